//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options, convertible to
//!   [`crate::format::OutputFormat`]

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{ArchiveConfig, DEFAULT_PREFIX_LEN, DecodeOptions, SourceIdPolicy};
use crate::core::{FilterConfig, OutputConfig};
use crate::error::Result;

/// Default report path; its extension follows `--format` when left unchanged.
pub const DEFAULT_OUTPUT: &str = "tweets.csv";

/// Validate a Twitter personal data export and flatten its tweets into a report.
#[derive(Parser, Debug, Clone)]
#[command(name = "tweetpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    tweetpack twitter-2020-06-07/
    tweetpack twitter-2020-06-07/ --check
    tweetpack data/tweet.js -f jsonl -o tweets.jsonl --ids -t
    tweetpack twitter-2020-06-07/ --after 2020-01-01 --no-replies --media")]
pub struct Args {
    /// Export directory, or a tweet.js file
    pub archive: PathBuf,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Keep tweets on or after this date (YYYY-MM-DD, UTC)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep tweets on or before this date (YYYY-MM-DD, UTC)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Drop replies to other tweets
    #[arg(long)]
    pub no_replies: bool,

    /// Include full timestamps in output
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Include tweet IDs in output
    #[arg(long)]
    pub ids: bool,

    /// Include the replied-to tweet ID in output
    #[arg(short = 'r', long)]
    pub replies: bool,

    /// Include attached media kinds in output
    #[arg(long)]
    pub media: bool,

    /// Validate and summarize only; write no output file
    #[arg(long)]
    pub check: bool,

    /// Bytes of JavaScript wrapper before the JSON array
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_PREFIX_LEN)]
    pub prefix_len: usize,

    /// Accept media source id strings that lack their numeric counterpart
    #[arg(long)]
    pub lenient_source_ids: bool,

    /// Log decoding progress (overrides RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn archive_config(&self) -> ArchiveConfig {
        let policy = if self.lenient_source_ids {
            SourceIdPolicy::Lenient
        } else {
            SourceIdPolicy::Strict
        };

        ArchiveConfig::new()
            .with_prefix_len(self.prefix_len)
            .with_decode(DecodeOptions::new().with_source_ids(policy))
    }

    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(after) = &self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(before) = &self.before {
            config = config.with_date_to(before)?;
        }
        if self.no_replies {
            config = config.without_replies();
        }
        Ok(config)
    }

    pub fn output_config(&self) -> OutputConfig {
        OutputConfig {
            include_timestamps: self.timestamps,
            include_ids: self.ids,
            include_replies: self.replies,
            include_media: self.media,
        }
    }

    /// The output path, with the default file's extension matched to `--format`.
    pub fn output_path(&self) -> String {
        if self.output != DEFAULT_OUTPUT {
            return self.output.clone();
        }
        let format: crate::format::OutputFormat = self.format.into();
        format!("tweets.{}", format.extension())
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of rows
    Json,

    /// JSON Lines, one row per line
    #[value(alias = "ndjson")]
    Jsonl,
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("tweetpack").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["export"]);
        assert_eq!(args.archive, PathBuf::from("export"));
        assert_eq!(args.format, OutputFormat::Csv);
        assert_eq!(args.output_path(), "tweets.csv");
        assert!(!args.check);
        assert_eq!(args.archive_config(), ArchiveConfig::default());
        assert!(!args.filter_config().unwrap().is_active());
    }

    #[test]
    fn test_default_output_follows_format() {
        assert_eq!(parse(&["export", "-f", "jsonl"]).output_path(), "tweets.jsonl");
        assert_eq!(parse(&["export", "-f", "ndjson"]).format, OutputFormat::Jsonl);
        assert_eq!(
            parse(&["export", "-f", "json", "-o", "mine.txt"]).output_path(),
            "mine.txt"
        );
    }

    #[test]
    fn test_output_columns() {
        let config = parse(&["export", "-t", "--ids", "-r", "--media"]).output_config();
        assert!(config.include_timestamps);
        assert!(config.include_ids);
        assert!(config.include_replies);
        assert!(config.include_media);
    }

    #[test]
    fn test_filters() {
        let args = parse(&["export", "--after", "2020-01-01", "--no-replies"]);
        let config = args.filter_config().unwrap();
        assert!(config.after.is_some());
        assert!(config.exclude_replies);

        let args = parse(&["export", "--before", "yesterday"]);
        assert!(args.filter_config().unwrap_err().is_invalid_date());
    }

    #[test]
    fn test_decode_flags() {
        let config =
            parse(&["export", "--prefix-len", "0", "--lenient-source-ids"]).archive_config();
        assert_eq!(config.prefix_len, 0);
        assert_eq!(config.decode.source_ids, SourceIdPolicy::Lenient);
    }

    #[test]
    fn test_archive_is_required() {
        assert!(Args::try_parse_from(["tweetpack"]).is_err());
    }
}
