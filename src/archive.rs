//! Loading `tweet.js` from a personal data export.
//!
//! The export stores tweets as a JavaScript assignment,
//! `window.YTD.tweet.part0 = [ ... ]`. [`Archive`] strips the fixed-length prefix,
//! parses the JSON array and hands each element to
//! [`decode_tweet_with`](crate::decode::decode_tweet_with).
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> tweetpack::Result<()> {
//! use tweetpack::Archive;
//!
//! let archive = Archive::open("twitter-2020-06-07")?;
//! for tweet in archive.tweets()? {
//!     println!("{}: {}", tweet.created_at, tweet.full_text);
//! }
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::{ArchiveConfig, DecodeOptions};
use crate::decode::{decode_tweet_with, unsigned_from};
use crate::error::{Result, TweetpackError};
use crate::model::Tweet;

/// The raw records of one `tweet.js` file, ready to decode.
#[derive(Debug, Clone)]
pub struct Archive {
    records: Vec<Value>,
    options: DecodeOptions,
    path: Option<PathBuf>,
}

impl Archive {
    /// Opens the export directory `dir` with the default [`ArchiveConfig`].
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(dir, &ArchiveConfig::default())
    }

    /// Opens the export directory `dir`, reading `config.tweets_file` inside it.
    pub fn open_with(dir: impl AsRef<Path>, config: &ArchiveConfig) -> Result<Self> {
        Self::from_path_with(dir.as_ref().join(&config.tweets_file), config)
    }

    /// Reads a `tweet.js` file directly.
    pub fn from_path(file: impl AsRef<Path>) -> Result<Self> {
        Self::from_path_with(file, &ArchiveConfig::default())
    }

    /// Reads a `tweet.js` file directly. `config.tweets_file` is ignored.
    pub fn from_path_with(file: impl AsRef<Path>, config: &ArchiveConfig) -> Result<Self> {
        let file = file.as_ref();
        debug!(path = %file.display(), "reading tweets file");

        let content = fs::read_to_string(file)?;
        let mut archive = Self::from_str_with(&content, config)?;
        archive.path = Some(file.to_path_buf());
        Ok(archive)
    }

    /// Parses the contents of a `tweet.js` file.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        Self::from_str_with(content, &ArchiveConfig::default())
    }

    /// Parses the contents of a `tweet.js` file, stripping `config.prefix_len` bytes.
    ///
    /// ```rust
    /// use tweetpack::Archive;
    ///
    /// let archive = Archive::from_str("window.YTD.tweet.part0 = []").unwrap();
    /// assert!(archive.is_empty());
    ///
    /// assert!(Archive::from_str("window.YTD").is_err());
    /// ```
    pub fn from_str_with(content: &str, config: &ArchiveConfig) -> Result<Self> {
        let payload = strip_prefix(content, config.prefix_len)?;

        let records = match serde_json::from_str(payload)? {
            Value::Array(records) => records,
            other => {
                return Err(TweetpackError::invalid_format(
                    "tweet.js",
                    format!("expected a JSON array, found {}", json_type(&other)),
                ));
            }
        };

        debug!(records = records.len(), "parsed tweet.js payload");

        Ok(Self {
            records,
            options: config.decode,
            path: None,
        })
    }

    /// The file the archive was read from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Undecoded elements of the export array.
    pub fn raw_records(&self) -> &[Value] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Decodes every record, stopping at the first failure.
    pub fn tweets(&self) -> Result<Vec<Tweet>> {
        self.iter().collect()
    }

    /// Decodes records lazily, in file order.
    pub fn iter(&self) -> Tweets<'_> {
        Tweets {
            archive: self,
            next: 0,
        }
    }
}

impl<'a> IntoIterator for &'a Archive {
    type Item = Result<Tweet>;
    type IntoIter = Tweets<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the decoded tweets of an [`Archive`].
///
/// Created by [`Archive::iter`].
#[derive(Debug)]
pub struct Tweets<'a> {
    archive: &'a Archive,
    next: usize,
}

impl Iterator for Tweets<'_> {
    type Item = Result<Tweet>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next;
        let raw = self.archive.records.get(index)?;
        self.next += 1;

        let result = decode_tweet_with(raw, &self.archive.options).map_err(|source| {
            let err = TweetpackError::decode(index, record_id(raw), source);
            match &self.archive.path {
                Some(path) => err.with_path(path),
                None => err,
            }
        });

        if let Ok(tweet) = &result {
            trace!(index, id = tweet.id, "decoded tweet");
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.archive.records.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Tweets<'_> {}

fn strip_prefix(content: &str, prefix_len: usize) -> Result<&str> {
    if content.len() < prefix_len {
        return Err(TweetpackError::invalid_format(
            "tweet.js",
            format!(
                "file is {} bytes, shorter than the {prefix_len}-byte assignment prefix",
                content.len()
            ),
        ));
    }

    content.get(prefix_len..).ok_or_else(|| {
        TweetpackError::invalid_format(
            "tweet.js",
            format!("byte {prefix_len} is not a character boundary"),
        )
    })
}

/// Best-effort id of an undecodable record, for error messages.
pub(crate) fn record_id(raw: &Value) -> Option<u64> {
    let tweet = raw.get("tweet")?;
    tweet
        .get("id_str")
        .and_then(unsigned_from)
        .or_else(|| tweet.get("id").and_then(unsigned_from))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
