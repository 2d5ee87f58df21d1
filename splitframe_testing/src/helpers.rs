//! Helpers for draining fragmenters and inspecting the emitted frames.

use std::num::NonZeroUsize;

use bytes::Bytes;
use splitframe::{
    Frame,
    Payload,
    PayloadFragmenter,
    PayloadReassembler,
    ReassembledPayload,
    ReassemblerConfig,
    ReassemblyError,
    StreamId,
};

/// Compact view of a frame used for table-style assertions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSummary {
    /// Metadata section length, `None` when absent.
    pub metadata: Option<usize>,
    /// Data section length, `None` when absent.
    pub data: Option<usize>,
    /// Whether the continuation bit is set.
    pub followed: bool,
    /// Demand carried by the frame, if its family has one.
    pub initial_request_n: Option<u32>,
}

/// Bind `fragmenter` as a response to `payload` and collect every frame.
pub fn drain_response(
    fragmenter: &mut PayloadFragmenter,
    stream_id: StreamId,
    payload: &Payload,
) -> Vec<Frame> {
    fragmenter.bind_for_response(stream_id, payload);
    fragmenter.drain().collect()
}

/// Bind `fragmenter` as a channel request to `payload` and collect every
/// frame.
///
/// # Panics
///
/// Panics if `initial_request_n` is negative.
pub fn drain_request_channel(
    fragmenter: &mut PayloadFragmenter,
    stream_id: StreamId,
    payload: &Payload,
    initial_request_n: i32,
) -> Vec<Frame> {
    fragmenter
        .bind_for_request_channel(stream_id, payload, initial_request_n)
        .expect("initial request n must be non-negative");
    fragmenter.drain().collect()
}

/// Summarise each frame's section lengths, continuation bit and demand.
pub fn summarise(frames: &[Frame]) -> Vec<FrameSummary> {
    frames
        .iter()
        .map(|frame| FrameSummary {
            metadata: frame.metadata().map(Bytes::len),
            data: frame.data().map(Bytes::len),
            followed: frame.is_followed(),
            initial_request_n: frame.initial_request_n(),
        })
        .collect()
}

/// Concatenate the metadata and data sections of `frames`, treating absent
/// sections as empty.
pub fn concat_sections(frames: &[Frame]) -> (Vec<u8>, Vec<u8>) {
    let mut metadata = Vec::new();
    let mut data = Vec::new();
    for frame in frames {
        if let Some(section) = frame.metadata() {
            metadata.extend_from_slice(section);
        }
        if let Some(section) = frame.data() {
            data.extend_from_slice(section);
        }
    }
    (metadata, data)
}

/// Feed `frames` through a fresh reassembler sized for `max_message_size`.
///
/// Returns every message completed along the way.
///
/// # Errors
///
/// Propagates the first [`ReassemblyError`] raised by the reassembler.
pub fn reassemble(
    frames: &[Frame],
    max_message_size: NonZeroUsize,
) -> Result<Vec<ReassembledPayload>, ReassemblyError> {
    let mut reassembler = PayloadReassembler::new(ReassemblerConfig::new(max_message_size));
    let mut completed = Vec::new();
    for frame in frames {
        if let Some(message) = reassembler.push(frame)? {
            completed.push(message);
        }
    }
    Ok(completed)
}
