//! Processing of decoded tweets for reports.
//!
//! This module contains:
//! - [`models`] - Flat report rows and output configuration
//! - [`filter`] - Tweet filtering by date and reply status
//! - [`processor`] - Archive statistics
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() {
//! use tweetpack::core::{
//!     ArchiveStats, FilterConfig, OutputConfig,
//!     apply_filters, write_csv, write_json, write_jsonl,
//! };
//! # }
//! ```

pub mod filter;
pub mod models;
pub mod output;
pub mod processor;

// Re-export main types for convenience
pub use filter::{FilterConfig, apply_filters};
pub use models::{OutputConfig, TweetRow};
pub use processor::ArchiveStats;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
