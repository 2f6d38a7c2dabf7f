//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of rows - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one row per line - requires `json-output` feature
//!
//! Every writer emits one [`TweetRow`](crate::core::models::TweetRow) per tweet, with
//! the optional columns chosen by [`OutputConfig`](crate::core::models::OutputConfig).
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> tweetpack::Result<()> {
//! use tweetpack::Archive;
//! use tweetpack::core::output::{to_csv, write_json, write_jsonl};
//! use tweetpack::core::models::OutputConfig;
//!
//! let tweets = Archive::open("twitter-2020-06-07")?.tweets()?;
//! let config = OutputConfig::new().with_timestamps();
//!
//! write_json(&tweets, "tweets.json", &config)?;
//! write_jsonl(&tweets, "tweets.jsonl", &config)?;
//! let csv_string = to_csv(&tweets, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
