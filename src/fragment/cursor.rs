//! Read position over one bound byte region.
//!
//! A cursor never copies or advances the region it walks; each step yields a
//! `Bytes::slice` view sharing the original storage.

use std::num::NonZeroUsize;

use bytes::Bytes;

#[derive(Clone, Debug, Default)]
pub(crate) struct RegionCursor {
    region: Bytes,
    offset: usize,
}

impl RegionCursor {
    /// Attach to `region` and rewind to its start.
    pub(crate) fn rebind(&mut self, region: &Bytes) {
        self.region = region.clone();
        self.offset = 0;
    }

    /// Drop the reference to the bound region.
    pub(crate) fn clear(&mut self) {
        self.region = Bytes::new();
        self.offset = 0;
    }

    pub(crate) fn capacity(&self) -> usize { self.region.len() }

    pub(crate) fn offset(&self) -> usize { self.offset }

    pub(crate) fn remaining(&self) -> usize { self.region.len().saturating_sub(self.offset) }

    pub(crate) fn has_remaining(&self) -> bool { self.offset < self.region.len() }

    /// Number of steps of at most `mtu` bytes needed to exhaust the region.
    pub(crate) fn steps_remaining(&self, mtu: NonZeroUsize) -> usize {
        self.remaining().div_ceil(mtu.get())
    }

    /// Take the next slice of at most `mtu` bytes.
    ///
    /// Returns `None` once the region is exhausted (or was empty), leaving
    /// the offset at capacity.
    pub(crate) fn advance(&mut self, mtu: NonZeroUsize) -> Option<Bytes> {
        let len = mtu.get().min(self.remaining());
        if len == 0 {
            return None;
        }
        let start = self.offset;
        self.offset = start + len;
        debug_assert!(self.offset <= self.region.len(), "cursor overran region");
        Some(self.region.slice(start..self.offset))
    }
}
