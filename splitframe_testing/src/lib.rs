//! Utilities for driving a [`PayloadFragmenter`](splitframe::PayloadFragmenter)
//! during tests.
//!
//! These helpers drain a bound fragmenter, split the resulting frames back
//! into their sections, and build payloads with recognisable byte patterns so
//! assertions can pinpoint misplaced slices.
//!
//! ```rust
//! use splitframe::{Payload, PayloadFragmenter, StreamId};
//! use splitframe_testing::{drain_response, patterned};
//!
//! let mut fragmenter = PayloadFragmenter::new(4, 4).expect("positive mtus");
//! let frames = drain_response(&mut fragmenter, StreamId::new(1), &patterned(6, 9));
//! assert_eq!(frames.len(), 3);
//! ```

pub mod helpers;
pub mod logging;
pub mod payloads;

pub use helpers::{
    FrameSummary,
    concat_sections,
    drain_request_channel,
    drain_response,
    reassemble,
    summarise,
};
pub use logging::{LoggerHandle, logger};
pub use payloads::{mtu_strategy, patterned, payload_strategy};
