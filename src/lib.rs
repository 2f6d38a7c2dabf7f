//! # Tweetpack
//!
//! A Rust library for loading the `tweet.js` file of a personal Twitter data
//! export and decoding it into strongly typed, fully validated records.
//!
//! ## Overview
//!
//! An export stores each tweet as a loosely typed JSON object: integers arrive as
//! strings, every id comes twice (`id` and `id_str`), and media carry parallel
//! `http`/`https` URLs. Tweetpack decodes these objects strictly:
//!
//! - every redundant pair must agree,
//! - every known key must have the expected shape,
//! - and every key must be understood; a record with leftover keys is rejected.
//!
//! Nothing from a record is silently dropped, so a successful decode is a faithful
//! copy of the export.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tweetpack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let archive = Archive::open("twitter-2020-06-07")?;
//!
//!     for tweet in &archive {
//!         let tweet = tweet?;
//!         println!("{} {}", tweet.created_at, tweet.full_text);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Decoding Single Records
//!
//! ```rust
//! use serde_json::json;
//! use tweetpack::decode_int_range;
//!
//! let range = decode_int_range(&json!(["0", "140"])).unwrap();
//! assert_eq!(range.len(), 140);
//!
//! let err = decode_int_range(&json!(["9", "3"])).unwrap_err();
//! assert_eq!(err.to_string(), "malformed range: end 3 is before begin 9");
//! ```
//!
//! ## Module Structure
//!
//! - [`archive`] - [`Archive`]: reads `data/tweet.js` and iterates decoded tweets
//! - [`decode`] - Strict decoders for tweets, entities, media, ranges and timestamps
//! - [`model`] - Typed records: [`Tweet`], [`Entities`], [`Medium`], [`IntRange`]
//! - [`config`] - [`ArchiveConfig`](config::ArchiveConfig), [`DecodeOptions`](config::DecodeOptions)
//! - [`core`] - Filtering, statistics and report writers
//! - [`format`] - Runtime selection of a report format
//! - [`feed`] - RSS-style feed items built from a timeline source
//! - [`error`] - [`TweetpackError`], [`DecodeError`] and [`Result`]
//! - [`prelude`] - Convenient re-exports

pub mod archive;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod decode;
pub mod error;
pub mod feed;
pub mod format;
pub mod model;

#[cfg(test)]
mod test_support;

// Re-export the main types at the crate root for convenience
pub use archive::Archive;
pub use decode::{
    decode_entities, decode_int_range, decode_medium, decode_timestamp, decode_tweet,
};
pub use error::{DecodeError, DecodeErrorKind, Result, TweetpackError};
pub use model::{Entities, IntRange, Medium, MediumKind, Tweet};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use tweetpack::prelude::*;
/// ```
pub mod prelude {
    // Loading
    pub use crate::archive::Archive;
    pub use crate::config::{ArchiveConfig, DecodeOptions, SourceIdPolicy};

    // Records
    pub use crate::model::{
        AspectRatio, Entities, Hashtag, IntRange, Medium, MediumKind, Resize, Size, Symbol,
        Tweet, Url, UserMention, Variant,
    };

    // Decoders
    pub use crate::decode::{
        decode_entities, decode_int_range, decode_medium, decode_timestamp, decode_tweet,
        decode_tweet_with,
    };

    // Error types
    pub use crate::error::{DecodeError, DecodeErrorKind, Result, TweetpackError};

    // Filtering and statistics
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::{OutputConfig, TweetRow};
    pub use crate::core::processor::ArchiveStats;

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::OutputFormat;
}
