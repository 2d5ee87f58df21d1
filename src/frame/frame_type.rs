use derive_more::Display;

use super::FrameFlags;

/// Frame families the fragmenter can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum FrameType {
    /// A stream "next value" frame carrying one response fragment.
    #[display("NEXT")]
    Next,
    /// A channel-request frame carrying one request fragment.
    #[display("REQUEST_CHANNEL")]
    RequestChannel,
}

impl FrameType {
    /// Flag bit meaning "additional fragments follow" for this family.
    #[must_use]
    pub const fn follows_flag(self) -> FrameFlags {
        match self {
            Self::Next => FrameFlags::RESPONSE_FOLLOWS,
            Self::RequestChannel => FrameFlags::REQUEST_CHANNEL_FOLLOWS,
        }
    }
}
