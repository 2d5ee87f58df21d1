//! Construction seam between the fragmenter and the frame-encoding layer.

use bytes::Bytes;

use super::{Frame, FrameFlags, FrameType};
use crate::StreamId;

/// Builds frames from the pieces produced by one fragmentation step.
///
/// `None` for a section means the frame carries no such section, which is
/// distinct from a present but empty section.
pub trait FrameFactory {
    /// Frame representation produced by this factory.
    type Frame;

    /// Build a response fragment.
    fn response_frame(
        &self,
        stream_id: StreamId,
        metadata: Option<Bytes>,
        data: Option<Bytes>,
        flags: FrameFlags,
    ) -> Self::Frame;

    /// Build a request-channel fragment carrying `initial_request_n` demand.
    fn request_channel_frame(
        &self,
        stream_id: StreamId,
        metadata: Option<Bytes>,
        data: Option<Bytes>,
        initial_request_n: u32,
        flags: FrameFlags,
    ) -> Self::Frame;
}

/// Factory producing in-memory [`Frame`] values.
///
/// Sets [`FrameFlags::METADATA`] whenever a metadata section is present.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultFrameFactory;

impl FrameFactory for DefaultFrameFactory {
    type Frame = Frame;

    fn response_frame(
        &self,
        stream_id: StreamId,
        metadata: Option<Bytes>,
        data: Option<Bytes>,
        flags: FrameFlags,
    ) -> Frame {
        let flags = flags.with_if(FrameFlags::METADATA, metadata.is_some());
        Frame::new(stream_id, FrameType::Next, flags, None, metadata, data)
    }

    fn request_channel_frame(
        &self,
        stream_id: StreamId,
        metadata: Option<Bytes>,
        data: Option<Bytes>,
        initial_request_n: u32,
        flags: FrameFlags,
    ) -> Frame {
        let flags = flags.with_if(FrameFlags::METADATA, metadata.is_some());
        Frame::new(
            stream_id,
            FrameType::RequestChannel,
            flags,
            Some(initial_request_n),
            metadata,
            data,
        )
    }
}
