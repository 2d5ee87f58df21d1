//! Configuration for fragmentation and reassembly.
//!
//! Both structs deserialise with `serde`, so they can be embedded in a
//! larger application configuration. Zero-sized limits are unrepresentable:
//! `NonZeroUsize` rejects them during deserialisation and
//! [`FragmenterConfig::new`] rejects them at construction.

use std::{num::NonZeroUsize, time::Duration};

use serde::Deserialize;

use crate::error::ConfigError;

/// Maximum number of metadata and data bytes a single frame may carry.
///
/// # Examples
///
/// ```
/// use splitframe::FragmenterConfig;
/// let config = FragmenterConfig::new(10, 20).expect("positive mtus");
/// assert_eq!(config.metadata_mtu.get(), 10);
/// assert_eq!(config.data_mtu.get(), 20);
/// assert!(FragmenterConfig::new(0, 20).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct FragmenterConfig {
    /// Metadata bytes allowed per frame.
    pub metadata_mtu: NonZeroUsize,
    /// Data bytes allowed per frame.
    pub data_mtu: NonZeroUsize,
}

impl FragmenterConfig {
    /// Validate raw MTU values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroMetadataMtu`] or [`ConfigError::ZeroDataMtu`]
    /// when the corresponding value is zero.
    pub fn new(metadata_mtu: usize, data_mtu: usize) -> Result<Self, ConfigError> {
        let metadata_mtu = NonZeroUsize::new(metadata_mtu).ok_or(ConfigError::ZeroMetadataMtu)?;
        let data_mtu = NonZeroUsize::new(data_mtu).ok_or(ConfigError::ZeroDataMtu)?;
        Ok(Self::from_non_zero(metadata_mtu, data_mtu))
    }

    /// Build a configuration from already validated MTUs.
    #[must_use]
    pub const fn from_non_zero(metadata_mtu: NonZeroUsize, data_mtu: NonZeroUsize) -> Self {
        Self {
            metadata_mtu,
            data_mtu,
        }
    }
}

/// Limits applied by [`PayloadReassembler`](crate::PayloadReassembler).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct ReassemblerConfig {
    /// Hard cap on the combined metadata and data size of one message.
    pub max_message_size: NonZeroUsize,
    /// Age after which an incomplete message is evicted.
    #[serde(default = "default_reassembly_timeout")]
    pub reassembly_timeout: Duration,
}

const DEFAULT_REASSEMBLY_TIMEOUT: Duration = Duration::from_secs(30);

fn default_reassembly_timeout() -> Duration { DEFAULT_REASSEMBLY_TIMEOUT }

impl ReassemblerConfig {
    /// Create a configuration with the default 30 second timeout.
    #[must_use]
    pub const fn new(max_message_size: NonZeroUsize) -> Self {
        Self {
            max_message_size,
            reassembly_timeout: DEFAULT_REASSEMBLY_TIMEOUT,
        }
    }

    /// Replace the eviction timeout.
    #[must_use]
    pub const fn with_timeout(mut self, reassembly_timeout: Duration) -> Self {
        self.reassembly_timeout = reassembly_timeout;
        self
    }
}
