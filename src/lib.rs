#![doc(html_root_url = "https://docs.rs/splitframe/latest")]
//! Public API for the `splitframe` library.
//!
//! This crate splits logical messages, each a pair of metadata and data
//! byte regions, into bounded frames for streaming request/response
//! transports whose MTU applies separately to metadata and data. It also
//! provides the matching reassembler for the receiving side.

pub mod config;
pub mod error;
pub mod fragment;
pub mod frame;
pub mod payload;
pub mod stream_id;

pub use config::{FragmenterConfig, ReassemblerConfig};
pub use error::{ConfigError, FragmenterError, ReassemblyError};
pub use fragment::{
    Drain,
    MessageKind,
    PayloadFragmenter,
    PayloadReassembler,
    ReassembledPayload,
};
pub use frame::{DefaultFrameFactory, Frame, FrameFactory, FrameFlags, FrameType};
pub use payload::{Payload, PayloadSource};
pub use stream_id::StreamId;
