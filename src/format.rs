//! Output format selection.
//!
//! [`OutputFormat`] names a report format independently of the CLI, so library
//! callers can pick a writer at runtime.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> tweetpack::Result<()> {
//! use tweetpack::Archive;
//! use tweetpack::format::{OutputFormat, write_to_format};
//! use tweetpack::core::models::OutputConfig;
//!
//! let tweets = Archive::open("twitter-2020-06-07")?.tweets()?;
//!
//! // Use format detection from extension
//! let format = OutputFormat::from_path("tweets.jsonl")?;
//! assert_eq!(format, OutputFormat::Jsonl);
//!
//! write_to_format(&tweets, "tweets.jsonl", format, &OutputConfig::new())?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::models::OutputConfig;
use crate::error::TweetpackError;
use crate::model::Tweet;

/// Report format for decoded tweets.
///
/// - [`Csv`](OutputFormat::Csv) - Semicolon-delimited, opens in spreadsheets
/// - [`Json`](OutputFormat::Json) - Pretty-printed array
/// - [`Jsonl`](OutputFormat::Jsonl) - One object per line
///
/// # Example
///
/// ```rust
/// use tweetpack::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of rows
    Json,

    /// JSON Lines, also known as NDJSON
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl]
    }

    /// Detects format from the extension of `path`, ignoring case.
    ///
    /// ```rust
    /// use tweetpack::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out/tweets.NDJSON").unwrap(), OutputFormat::Jsonl);
    /// assert!(OutputFormat::from_path("tweets.txt").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TweetpackError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        ext.parse().map_err(|_| {
            TweetpackError::invalid_format(
                "output",
                format!("unknown file extension '.{ext}', expected one of: csv, json, jsonl"),
            )
        })
    }

    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Csv => "CSV",
            OutputFormat::Json => "JSON",
            OutputFormat::Jsonl => "JSONL",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("unknown format '{s}', expected one of: csv, json, jsonl")),
        }
    }
}

/// Writes tweets to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    tweets: &[Tweet],
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), TweetpackError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(tweets, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(tweets, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(tweets, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Converts tweets to a string in the specified format.
///
/// ```rust
/// # #[cfg(feature = "json-output")]
/// # fn main() -> tweetpack::Result<()> {
/// use tweetpack::core::models::OutputConfig;
/// use tweetpack::format::{OutputFormat, to_format_string};
///
/// let jsonl = to_format_string(&[], OutputFormat::Jsonl, &OutputConfig::new())?;
/// assert!(jsonl.is_empty());
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "json-output"))]
/// # fn main() {}
/// ```
#[allow(unused_variables)]
pub fn to_format_string(
    tweets: &[Tweet],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, TweetpackError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(tweets, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(tweets, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(tweets, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

fn feature_disabled(format: OutputFormat) -> TweetpackError {
    TweetpackError::invalid_format(
        "output",
        format!(
            "{format} output requires the '{}' feature",
            format.required_feature()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("ndjson".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path("a/b/tweets.csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_path("tweets.jsonl").unwrap(), OutputFormat::Jsonl);

        let err = OutputFormat::from_path("tweets").unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn test_extension_round_trips_through_from_path() {
        for format in OutputFormat::all() {
            let path = format!("out.{}", format.extension());
            assert_eq!(OutputFormat::from_path(&path).unwrap(), *format);
        }
    }

    #[test]
    fn test_feature_disabled_message() {
        let err = feature_disabled(OutputFormat::Jsonl);
        assert!(err.to_string().contains("json-output"));
    }

    #[cfg(all(feature = "csv-output", feature = "json-output"))]
    #[test]
    fn test_write_to_format_each_format() {
        let tweets = vec![crate::test_support::tweet_at(1, "hi", "Sat Jun 06 12:09:03 +0000 2020")];
        let dir = tempfile::tempdir().unwrap();

        for format in OutputFormat::all() {
            let path = dir.path().join(format!("out.{}", format.extension()));
            let path = path.to_str().unwrap();
            write_to_format(&tweets, path, *format, &OutputConfig::new()).unwrap();

            let written = std::fs::read_to_string(path).unwrap();
            let expected = to_format_string(&tweets, *format, &OutputConfig::new()).unwrap();
            assert_eq!(written, expected, "{format}");
        }
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Jsonl).unwrap();
        assert_eq!(json, "\"jsonl\"");
    }
}
