use derive_more::{Display, From, Into};

/// Identifier of the logical stream a frame belongs to.
///
/// Allocation of identifiers is the caller's concern; the fragmenter only
/// stamps the bound value into every frame it emits.
///
/// # Examples
///
/// ```
/// use splitframe::StreamId;
/// let id = StreamId::new(5);
/// assert_eq!(id.get(), 5);
/// assert_eq!(id.to_string(), "5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
#[display("{_0}")]
pub struct StreamId(u32);

impl StreamId {
    /// Create a new identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self { Self(value) }

    /// Return the inner numeric identifier.
    #[must_use]
    pub const fn get(self) -> u32 { self.0 }
}
