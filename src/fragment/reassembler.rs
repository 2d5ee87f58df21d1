//! Inbound helper that stitches fragments back into complete payloads.
//!
//! [`PayloadReassembler`] mirrors the outbound
//! [`PayloadFragmenter`](crate::PayloadFragmenter) by collecting frame
//! sections keyed by [`StreamId`]. A frame whose continuation bit is clear
//! completes its stream's message. The helper guards against unbounded
//! allocation with a configurable cap and purges stale partial messages after
//! a fixed timeout.

use std::{
    collections::{
        HashMap,
        hash_map::{Entry, OccupiedEntry},
    },
    num::NonZeroUsize,
    time::{Duration, Instant},
};

use bytes::{Bytes, BytesMut};
use tracing::{debug, warn};

use crate::{
    Payload,
    ReassemblerConfig,
    StreamId,
    error::ReassemblyError,
    frame::{Frame, FrameType},
};

#[derive(Debug)]
struct PartialPayload {
    frame_type: FrameType,
    initial_request_n: Option<u32>,
    metadata: BytesMut,
    data: BytesMut,
    started_at: Instant,
}

impl PartialPayload {
    fn new(frame: &Frame, started_at: Instant) -> Self {
        let mut partial = Self {
            frame_type: frame.frame_type(),
            initial_request_n: frame.initial_request_n(),
            metadata: BytesMut::new(),
            data: BytesMut::new(),
            started_at,
        };
        partial.push(frame);
        partial
    }

    fn push(&mut self, frame: &Frame) {
        if let Some(metadata) = frame.metadata() {
            self.metadata.extend_from_slice(metadata);
        }
        if let Some(data) = frame.data() {
            self.data.extend_from_slice(data);
        }
    }

    fn len(&self) -> usize { self.metadata.len() + self.data.len() }

    fn started_at(&self) -> Instant { self.started_at }

    fn into_payload(self) -> Payload { Payload::new(self.metadata.freeze(), self.data.freeze()) }
}

/// Container for a fully re-assembled logical message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReassembledPayload {
    stream_id: StreamId,
    frame_type: FrameType,
    initial_request_n: Option<u32>,
    payload: Payload,
}

impl ReassembledPayload {
    /// Stream shared by the frames that formed this message.
    #[must_use]
    pub const fn stream_id(&self) -> StreamId { self.stream_id }

    /// Frame family of the message.
    #[must_use]
    pub const fn frame_type(&self) -> FrameType { self.frame_type }

    /// Demand carried by the first frame of a channel request.
    #[must_use]
    pub const fn initial_request_n(&self) -> Option<u32> { self.initial_request_n }

    /// Borrow the re-assembled payload.
    #[must_use]
    pub fn payload(&self) -> &Payload { &self.payload }

    /// Consume the message, returning the owned payload.
    #[must_use]
    pub fn into_payload(self) -> Payload { self.payload }
}

/// Stateful frame re-assembler with timeout-based eviction.
#[derive(Debug)]
pub struct PayloadReassembler {
    max_message_size: NonZeroUsize,
    timeout: Duration,
    buffers: HashMap<StreamId, PartialPayload>,
}

impl PayloadReassembler {
    /// Create a re-assembler enforcing the limits in `config`.
    #[must_use]
    pub fn new(config: ReassemblerConfig) -> Self {
        Self {
            max_message_size: config.max_message_size,
            timeout: config.reassembly_timeout,
            buffers: HashMap::new(),
        }
    }

    /// Process a frame using the current time.
    ///
    /// Returns `Ok(Some(_))` when the frame completes its message and
    /// `Ok(None)` while more frames are required.
    ///
    /// # Errors
    ///
    /// Returns [`ReassemblyError`] when the frame type changes mid-message or
    /// the message would exceed the configured limit. The partial message is
    /// dropped in both cases.
    pub fn push(&mut self, frame: &Frame) -> Result<Option<ReassembledPayload>, ReassemblyError> {
        self.push_at(frame, Instant::now())
    }

    /// Process a frame using an explicit clock reading.
    ///
    /// # Errors
    ///
    /// See [`PayloadReassembler::push`].
    pub fn push_at(
        &mut self,
        frame: &Frame,
        now: Instant,
    ) -> Result<Option<ReassembledPayload>, ReassemblyError> {
        self.purge_expired_at(now);

        let stream_id = frame.stream_id();
        let incoming = section_len(frame.metadata()) + section_len(frame.data());

        match self.buffers.entry(stream_id) {
            Entry::Occupied(occupied) => {
                Self::append_and_maybe_complete(self.max_message_size, occupied, frame, incoming)
            }
            Entry::Vacant(vacant) => {
                Self::assert_within_limit(self.max_message_size, stream_id, incoming)?;
                if frame.is_followed() {
                    vacant.insert(PartialPayload::new(frame, now));
                    return Ok(None);
                }
                // Single-frame messages keep sharing the frame's storage.
                let payload = Payload::new(
                    frame.metadata().cloned().unwrap_or_default(),
                    frame.data().cloned().unwrap_or_default(),
                );
                Ok(Some(complete(
                    stream_id,
                    frame.frame_type(),
                    frame.initial_request_n(),
                    payload,
                )))
            }
        }
    }

    /// Remove partial messages that exceeded the configured timeout.
    ///
    /// Returns the streams whose messages were evicted.
    pub fn purge_expired(&mut self) -> Vec<StreamId> { self.purge_expired_at(Instant::now()) }

    /// Remove partial messages that exceeded the configured timeout using an
    /// explicit clock reading.
    ///
    /// Returns the streams whose messages were evicted.
    pub fn purge_expired_at(&mut self, now: Instant) -> Vec<StreamId> {
        let mut evicted = Vec::new();
        let timeout = self.timeout;

        self.buffers.retain(|stream_id, partial| {
            let expired = now.saturating_duration_since(partial.started_at()) >= timeout;
            if expired {
                evicted.push(*stream_id);
            }
            !expired
        });

        if !evicted.is_empty() {
            warn!(evicted = evicted.len(), "purged stale partial payloads");
        }
        evicted
    }

    /// Number of partial messages currently buffered.
    #[must_use]
    pub fn buffered_len(&self) -> usize { self.buffers.len() }

    fn assert_within_limit(
        limit: NonZeroUsize,
        stream_id: StreamId,
        attempted: usize,
    ) -> Result<(), ReassemblyError> {
        if attempted > limit.get() {
            warn!(stream_id = %stream_id, attempted, limit = limit.get(), "payload too large");
            return Err(ReassemblyError::MessageTooLarge {
                stream_id,
                attempted,
                limit,
            });
        }
        Ok(())
    }

    fn append_and_maybe_complete(
        limit: NonZeroUsize,
        mut occupied: OccupiedEntry<'_, StreamId, PartialPayload>,
        frame: &Frame,
        incoming: usize,
    ) -> Result<Option<ReassembledPayload>, ReassemblyError> {
        let stream_id = *occupied.key();
        let expected = occupied.get().frame_type;
        if frame.frame_type() != expected {
            occupied.remove();
            warn!(
                stream_id = %stream_id,
                expected = %expected,
                found = %frame.frame_type(),
                "frame type changed mid-message"
            );
            return Err(ReassemblyError::FrameTypeMismatch {
                stream_id,
                expected,
                found: frame.frame_type(),
            });
        }

        let attempted = occupied.get().len().saturating_add(incoming);
        if let Err(err) = Self::assert_within_limit(limit, stream_id, attempted) {
            occupied.remove();
            return Err(err);
        }

        occupied.get_mut().push(frame);
        if frame.is_followed() {
            return Ok(None);
        }
        let partial = occupied.remove();
        let frame_type = partial.frame_type;
        let initial_request_n = partial.initial_request_n;
        Ok(Some(complete(
            stream_id,
            frame_type,
            initial_request_n,
            partial.into_payload(),
        )))
    }
}

fn section_len(section: Option<&Bytes>) -> usize { section.map_or(0, Bytes::len) }

fn complete(
    stream_id: StreamId,
    frame_type: FrameType,
    initial_request_n: Option<u32>,
    payload: Payload,
) -> ReassembledPayload {
    debug!(
        stream_id = %stream_id,
        frame_type = %frame_type,
        len = payload.len(),
        "reassembled payload"
    );
    ReassembledPayload {
        stream_id,
        frame_type,
        initial_request_n,
        payload,
    }
}
