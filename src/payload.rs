//! Logical message payloads handed to the fragmenter.
//!
//! A [`Payload`] pairs two independent byte regions, metadata and data. Both
//! are stored as [`Bytes`] so fragment views can share the original storage
//! instead of copying it.

use bytes::Bytes;

/// Source of the two byte regions that make up a logical message.
///
/// Implementors hand out their regions as [`Bytes`]; the fragmenter clones
/// the handles (a reference-count bump) and slices them without moving any
/// read position of the source.
pub trait PayloadSource {
    /// Metadata region. An absent region is an empty [`Bytes`].
    fn metadata(&self) -> &Bytes;

    /// Data region. An absent region is an empty [`Bytes`].
    fn data(&self) -> &Bytes;
}

/// Metadata and data regions of one logical message.
///
/// # Examples
///
/// ```
/// use splitframe::Payload;
/// let payload = Payload::new("meta", "data");
/// assert_eq!(payload.metadata().as_ref(), b"meta");
/// assert_eq!(payload.len(), 8);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Payload {
    metadata: Bytes,
    data: Bytes,
}

impl Payload {
    /// Construct a payload from metadata and data regions.
    #[must_use]
    pub fn new(metadata: impl Into<Bytes>, data: impl Into<Bytes>) -> Self {
        Self {
            metadata: metadata.into(),
            data: data.into(),
        }
    }

    /// Construct a payload that carries no metadata.
    #[must_use]
    pub fn from_data(data: impl Into<Bytes>) -> Self { Self::new(Bytes::new(), data) }

    /// Borrow the metadata region.
    #[must_use]
    pub fn metadata(&self) -> &Bytes { &self.metadata }

    /// Borrow the data region.
    #[must_use]
    pub fn data(&self) -> &Bytes { &self.data }

    /// Combined length of both regions.
    #[must_use]
    pub fn len(&self) -> usize { self.metadata.len() + self.data.len() }

    /// Whether both regions are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.metadata.is_empty() && self.data.is_empty() }

    /// Consume the payload, returning `(metadata, data)`.
    #[must_use]
    pub fn into_parts(self) -> (Bytes, Bytes) { (self.metadata, self.data) }
}

impl PayloadSource for Payload {
    fn metadata(&self) -> &Bytes { &self.metadata }

    fn data(&self) -> &Bytes { &self.data }
}
