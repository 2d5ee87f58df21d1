//! Header flag bits understood by the fragmentation layer.

use std::ops::{BitOr, BitOrAssign};

use derive_more::{Display, From, Into};

/// 16-bit flag field of a frame header.
///
/// The fragmenter only ever ORs the continuation bit of the frame family it
/// is emitting into this field; the frame factory may add further bits.
///
/// # Examples
///
/// ```
/// use splitframe::FrameFlags;
/// let flags = FrameFlags::empty() | FrameFlags::RESPONSE_FOLLOWS;
/// assert!(flags.contains(FrameFlags::RESPONSE_FOLLOWS));
/// assert!(!flags.contains(FrameFlags::METADATA));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, From, Into)]
#[display("{_0:#06x}")]
pub struct FrameFlags(u16);

impl FrameFlags {
    /// The frame carries a metadata section.
    pub const METADATA: Self = Self(0b0100_0000_0000_0000);
    /// More response fragments follow for this logical message.
    pub const RESPONSE_FOLLOWS: Self = Self(0b0010_0000_0000_0000);
    /// More request-channel fragments follow for this logical message.
    pub const REQUEST_CHANNEL_FOLLOWS: Self = Self(0b0010_0000_0000_0000);

    /// Flags with no bit set.
    #[must_use]
    pub const fn empty() -> Self { Self(0) }

    /// Construct flags from their raw header representation.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self { Self(bits) }

    /// Return the raw header representation.
    #[must_use]
    pub const fn bits(self) -> u16 { self.0 }

    /// Whether every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool { self.0 & other.0 == other.0 }

    /// Return `self` with the bits of `other` set when `enabled` holds.
    #[must_use]
    pub const fn with_if(self, other: Self, enabled: bool) -> Self {
        if enabled { Self(self.0 | other.0) } else { self }
    }
}

impl BitOr for FrameFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output { Self(self.0 | rhs.0) }
}

impl BitOrAssign for FrameFlags {
    fn bitor_assign(&mut self, rhs: Self) { self.0 |= rhs.0; }
}
