//! Configuration types for archive loading and decoding.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ArchiveConfig`] - where the export file lives and how its wrapper is stripped
//! - [`DecodeOptions`] - knobs for the record decoders
//!
//! # Example
//!
//! ```rust
//! use tweetpack::config::{ArchiveConfig, DecodeOptions, SourceIdPolicy};
//!
//! let config = ArchiveConfig::new()
//!     .with_tweets_file("data/tweets.js")
//!     .with_decode(DecodeOptions::new().with_source_ids(SourceIdPolicy::Lenient));
//!
//! assert_eq!(config.prefix_len, 25);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Length of `window.YTD.tweet.part0 = `, the assignment that wraps the JSON payload.
pub const DEFAULT_PREFIX_LEN: usize = 25;

/// Location of the tweets file inside an export directory.
pub const DEFAULT_TWEETS_FILE: &str = "data/tweet.js";

/// Configuration for loading an export.
///
/// # Example
///
/// ```rust
/// use tweetpack::config::ArchiveConfig;
///
/// let config = ArchiveConfig::new().with_prefix_len(0);
/// assert_eq!(config.tweets_file.to_str(), Some("data/tweet.js"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Bytes stripped from the start of the file before JSON parsing (default: 25)
    pub prefix_len: usize,

    /// Path of the tweets file relative to the export directory (default: `data/tweet.js`)
    pub tweets_file: PathBuf,

    /// Options passed to every record decoder
    pub decode: DecodeOptions,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            prefix_len: DEFAULT_PREFIX_LEN,
            tweets_file: PathBuf::from(DEFAULT_TWEETS_FILE),
            decode: DecodeOptions::default(),
        }
    }
}

impl ArchiveConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many bytes of wrapper precede the JSON array.
    #[must_use]
    pub fn with_prefix_len(mut self, len: usize) -> Self {
        self.prefix_len = len;
        self
    }

    /// Sets the tweets file path, relative to the export directory.
    #[must_use]
    pub fn with_tweets_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.tweets_file = path.into();
        self
    }

    /// Sets the decoder options.
    #[must_use]
    pub fn with_decode(mut self, options: DecodeOptions) -> Self {
        self.decode = options;
        self
    }
}

/// How `source_status_id`/`source_user_id` pairs on media are checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceIdPolicy {
    /// A `_str` value without its integer counterpart is rejected.
    #[default]
    Strict,
    /// A `_str` value without its integer counterpart is ignored.
    Lenient,
}

/// Options shared by the record decoders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Pairing rule for media source ids (default: strict)
    pub source_ids: SourceIdPolicy,
}

impl DecodeOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that tolerate orphaned source id strings on media.
    pub fn lenient() -> Self {
        Self {
            source_ids: SourceIdPolicy::Lenient,
        }
    }

    /// Sets the source id pairing rule.
    #[must_use]
    pub fn with_source_ids(mut self, policy: SourceIdPolicy) -> Self {
        self.source_ids = policy;
        self
    }
}
