//! Error types emitted by the fragmentation layer.
//!
//! Each concern gets its own enum: configuration problems surface once at
//! construction, fragmenter misuse surfaces per call, and reassembly
//! failures surface per inbound frame.

use std::num::NonZeroUsize;

use thiserror::Error;

use crate::{StreamId, frame::FrameType};

/// Errors produced while validating fragmenter configuration.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The metadata MTU must allow at least one byte per frame.
    #[error("metadata mtu must be positive")]
    ZeroMetadataMtu,
    /// The data MTU must allow at least one byte per frame.
    #[error("data mtu must be positive")]
    ZeroDataMtu,
}

/// Errors produced while binding or driving a
/// [`PayloadFragmenter`](crate::PayloadFragmenter).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FragmenterError {
    /// A frame was requested although the bound message has no bytes left.
    #[error("fragment sequence exhausted")]
    Exhausted,
    /// A request-channel binding supplied a negative initial demand.
    #[error("initial request n must not be negative, got {value}")]
    InvalidRequestN { value: i32 },
}

/// Errors produced by [`PayloadReassembler`](crate::PayloadReassembler).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ReassemblyError {
    /// A continuation frame did not match the type that opened the stream.
    #[error("frame type mismatch on stream {stream_id}: expected {expected}, found {found}")]
    FrameTypeMismatch {
        stream_id: StreamId,
        expected: FrameType,
        found: FrameType,
    },
    /// The reassembled message would exceed the configured cap.
    #[error("message on stream {stream_id} too large: attempted {attempted} bytes, limit {limit}")]
    MessageTooLarge {
        stream_id: StreamId,
        attempted: usize,
        limit: NonZeroUsize,
    },
}
