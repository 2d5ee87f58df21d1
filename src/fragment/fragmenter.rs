//! Outbound helper that splits logical messages into bounded frames.
//!
//! [`PayloadFragmenter`] is built once per connection with fixed metadata and
//! data MTUs, then rebound to each logical message in turn. Every step slices
//! at most one MTU of metadata and one MTU of data from the bound payload and
//! hands the views to a [`FrameFactory`]. The two regions advance
//! independently; the sequence ends once both are exhausted.
//!
//! The fragmenter holds no locks and allocates nothing per message. Exclusive
//! access is expressed through `&mut self`.

use derive_more::Display;
use tracing::{debug, trace};

use super::{Drain, cursor::RegionCursor};
use crate::{
    FragmenterConfig,
    PayloadSource,
    StreamId,
    error::{ConfigError, FragmenterError},
    frame::{DefaultFrameFactory, FrameFactory, FrameFlags, FrameType},
};

/// Kind of logical message a fragmenter is bound to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum MessageKind {
    /// Response fragments emitted as stream "next value" frames.
    #[display("RESPONSE")]
    Response,
    /// Request fragments emitted as channel-request frames with demand.
    #[display("REQUEST_CHANNEL")]
    RequestChannel,
}

impl MessageKind {
    /// Frame family used for fragments of this kind.
    #[must_use]
    pub const fn frame_type(self) -> FrameType {
        match self {
            Self::Response => FrameType::Next,
            Self::RequestChannel => FrameType::RequestChannel,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Binding {
    Idle,
    Emitting {
        stream_id: StreamId,
        kind: MessageKind,
        // Zeroed after the first emitted frame.
        initial_request_n: u32,
    },
}

/// Reusable splitter turning a [`PayloadSource`] into bounded frames.
///
/// # Examples
///
/// ```
/// use splitframe::{Payload, PayloadFragmenter, StreamId};
///
/// let mut fragmenter = PayloadFragmenter::new(2, 4).expect("positive mtus");
/// fragmenter.bind_for_response(StreamId::new(1), &Payload::new("abc", "defgh"));
///
/// let first = fragmenter.next_frame().expect("first frame");
/// assert!(first.is_followed());
/// let last = fragmenter.next_frame().expect("second frame");
/// assert!(!last.is_followed());
/// assert!(!fragmenter.has_more());
/// ```
#[derive(Debug)]
pub struct PayloadFragmenter<F = DefaultFrameFactory> {
    config: FragmenterConfig,
    factory: F,
    metadata: RegionCursor,
    data: RegionCursor,
    binding: Binding,
}

impl PayloadFragmenter<DefaultFrameFactory> {
    /// Create a fragmenter emitting [`Frame`](crate::Frame) values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when either MTU is zero.
    pub fn new(metadata_mtu: usize, data_mtu: usize) -> Result<Self, ConfigError> {
        let config = FragmenterConfig::new(metadata_mtu, data_mtu)?;
        Ok(Self::from_config(config))
    }

    /// Create a fragmenter from a validated configuration.
    #[must_use]
    pub fn from_config(config: FragmenterConfig) -> Self {
        Self::with_factory(config, DefaultFrameFactory)
    }
}

impl<F: FrameFactory> PayloadFragmenter<F> {
    /// Create a fragmenter that builds frames through `factory`.
    #[must_use]
    pub fn with_factory(config: FragmenterConfig, factory: F) -> Self {
        Self {
            config,
            factory,
            metadata: RegionCursor::default(),
            data: RegionCursor::default(),
            binding: Binding::Idle,
        }
    }

    /// Return the MTU configuration.
    #[must_use]
    pub const fn config(&self) -> FragmenterConfig { self.config }

    /// Borrow the frame factory.
    #[must_use]
    pub const fn factory(&self) -> &F { &self.factory }

    /// Stream of the current binding, if any.
    #[must_use]
    pub const fn stream_id(&self) -> Option<StreamId> {
        match self.binding {
            Binding::Idle => None,
            Binding::Emitting { stream_id, .. } => Some(stream_id),
        }
    }

    /// Message kind of the current binding, if any.
    #[must_use]
    pub const fn message_kind(&self) -> Option<MessageKind> {
        match self.binding {
            Binding::Idle => None,
            Binding::Emitting { kind, .. } => Some(kind),
        }
    }

    /// Bind to `payload` as a response, discarding any unfinished sequence.
    pub fn bind_for_response(&mut self, stream_id: StreamId, payload: &impl PayloadSource) {
        self.bind(stream_id, payload, MessageKind::Response, 0);
    }

    /// Bind to `payload` as a channel request carrying `initial_request_n`
    /// demand on its first frame, discarding any unfinished sequence.
    ///
    /// # Errors
    ///
    /// Returns [`FragmenterError::InvalidRequestN`] when `initial_request_n`
    /// is negative. The previous binding is left untouched in that case.
    pub fn bind_for_request_channel(
        &mut self,
        stream_id: StreamId,
        payload: &impl PayloadSource,
        initial_request_n: i32,
    ) -> Result<(), FragmenterError> {
        let demand = u32::try_from(initial_request_n).map_err(|_| {
            FragmenterError::InvalidRequestN {
                value: initial_request_n,
            }
        })?;
        self.bind(stream_id, payload, MessageKind::RequestChannel, demand);
        Ok(())
    }

    /// Return to the idle state, releasing the bound regions.
    pub fn unbind(&mut self) {
        self.discard_unfinished();
        self.metadata.clear();
        self.data.clear();
        self.binding = Binding::Idle;
    }

    /// Whether either bound region still has bytes to emit.
    ///
    /// Always `false` while idle.
    #[must_use]
    pub fn has_more(&self) -> bool { self.metadata.has_remaining() || self.data.has_remaining() }

    /// Number of frames still to be emitted for the current binding.
    #[must_use]
    pub fn frame_count_hint(&self) -> usize {
        self.metadata
            .steps_remaining(self.config.metadata_mtu)
            .max(self.data.steps_remaining(self.config.data_mtu))
    }

    /// Emit the next frame of the bound message.
    ///
    /// # Errors
    ///
    /// Returns [`FragmenterError::Exhausted`] when nothing remains to emit,
    /// including when the fragmenter is idle.
    pub fn next_frame(&mut self) -> Result<F::Frame, FragmenterError> {
        if !self.has_more() {
            return Err(FragmenterError::Exhausted);
        }
        let Binding::Emitting {
            stream_id,
            kind,
            initial_request_n,
        } = &mut self.binding
        else {
            return Err(FragmenterError::Exhausted);
        };

        let metadata = self.metadata.advance(self.config.metadata_mtu);
        let data = self.data.advance(self.config.data_mtu);
        let more_following = self.metadata.has_remaining() || self.data.has_remaining();
        let flags = FrameFlags::empty().with_if(kind.frame_type().follows_flag(), more_following);

        trace!(
            stream_id = %stream_id,
            kind = %kind,
            metadata_len = metadata.as_ref().map_or(0, bytes::Bytes::len),
            data_len = data.as_ref().map_or(0, bytes::Bytes::len),
            more_following,
            "emitting fragment"
        );

        let frame = match kind {
            MessageKind::Response => self.factory.response_frame(*stream_id, metadata, data, flags),
            MessageKind::RequestChannel => {
                let demand = std::mem::take(initial_request_n);
                self.factory
                    .request_channel_frame(*stream_id, metadata, data, demand, flags)
            }
        };
        Ok(frame)
    }

    /// Iterate over the remaining frames of the bound message.
    ///
    /// Dropping the iterator early abandons the rest of the sequence until
    /// the next bind.
    pub fn drain(&mut self) -> Drain<'_, F> { Drain::new(self) }

    fn bind(
        &mut self,
        stream_id: StreamId,
        payload: &impl PayloadSource,
        kind: MessageKind,
        initial_request_n: u32,
    ) {
        self.discard_unfinished();
        self.metadata.rebind(payload.metadata());
        self.data.rebind(payload.data());
        self.binding = Binding::Emitting {
            stream_id,
            kind,
            initial_request_n,
        };
        debug!(
            stream_id = %stream_id,
            kind = %kind,
            metadata_len = self.metadata.capacity(),
            data_len = self.data.capacity(),
            initial_request_n,
            "bound fragmenter"
        );
    }

    fn discard_unfinished(&self) {
        if !self.has_more() {
            return;
        }
        if let Some(stream_id) = self.stream_id() {
            debug!(
                stream_id = %stream_id,
                metadata_remaining = self.metadata.remaining(),
                data_remaining = self.data.remaining(),
                "discarding unfinished fragment sequence"
            );
        }
    }
}
