//! Splitting logical messages into bounded frames and stitching them back.
//!
//! The outbound side is [`PayloadFragmenter`], a reusable cursor-driven state
//! machine. The inbound side is [`PayloadReassembler`], which relies on the
//! continuation bit the fragmenter sets on every frame except the last.

mod cursor;
pub mod drain;
pub mod fragmenter;
pub mod reassembler;

pub use drain::Drain;
pub use fragmenter::{MessageKind, PayloadFragmenter};
pub use reassembler::{PayloadReassembler, ReassembledPayload};
