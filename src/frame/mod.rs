//! Frame values emitted by the fragmenter and the factory seam that builds
//! them.
//!
//! Header encoding is left to the transport; this module only models what a
//! single fragment carries: stream id, frame type, flags, optional demand and
//! the two optional payload sections.

pub mod factory;
pub mod flags;
pub mod frame_type;

use bytes::Bytes;
pub use factory::{DefaultFrameFactory, FrameFactory};
pub use flags::FrameFlags;
pub use frame_type::FrameType;

use crate::StreamId;

/// One bounded fragment of a logical message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    stream_id: StreamId,
    frame_type: FrameType,
    flags: FrameFlags,
    initial_request_n: Option<u32>,
    metadata: Option<Bytes>,
    data: Option<Bytes>,
}

impl Frame {
    /// Construct a frame from its parts.
    #[must_use]
    pub fn new(
        stream_id: StreamId,
        frame_type: FrameType,
        flags: FrameFlags,
        initial_request_n: Option<u32>,
        metadata: Option<Bytes>,
        data: Option<Bytes>,
    ) -> Self {
        Self {
            stream_id,
            frame_type,
            flags,
            initial_request_n,
            metadata,
            data,
        }
    }

    /// Stream the frame belongs to.
    #[must_use]
    pub const fn stream_id(&self) -> StreamId { self.stream_id }

    /// Frame family.
    #[must_use]
    pub const fn frame_type(&self) -> FrameType { self.frame_type }

    /// Header flags.
    #[must_use]
    pub const fn flags(&self) -> FrameFlags { self.flags }

    /// Demand carried by request-channel frames; `None` for other families.
    #[must_use]
    pub const fn initial_request_n(&self) -> Option<u32> { self.initial_request_n }

    /// Metadata section, or `None` when the frame carries none.
    #[must_use]
    pub fn metadata(&self) -> Option<&Bytes> { self.metadata.as_ref() }

    /// Data section, or `None` when the frame carries none.
    #[must_use]
    pub fn data(&self) -> Option<&Bytes> { self.data.as_ref() }

    /// Whether further fragments of the same logical message follow.
    #[must_use]
    pub const fn is_followed(&self) -> bool {
        self.flags.contains(self.frame_type.follows_flag())
    }

    /// Consume the frame, returning `(metadata, data)`.
    #[must_use]
    pub fn into_sections(self) -> (Option<Bytes>, Option<Bytes>) { (self.metadata, self.data) }
}
