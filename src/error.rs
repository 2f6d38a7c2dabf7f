//! Unified error types for tweetpack.
//!
//! Two layers:
//!
//! - [`DecodeError`] describes why a single export record was rejected. It carries a
//!   [`DecodeErrorKind`] and the path of the field that failed, for example
//!   `entities.media[0].video_info.variants[1].url`.
//! - [`TweetpackError`] covers everything an archive load or a CLI run can hit: I/O,
//!   JSON syntax, output writers and decode failures (with the index of the failing
//!   record).
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get messages naming the record and field that failed
//! - **Nothing is skipped**: a record is either fully valid or the load fails

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for tweetpack operations.
///
/// # Example
///
/// ```rust
/// use tweetpack::error::Result;
/// use tweetpack::Tweet;
///
/// fn my_function() -> Result<Vec<Tweet>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, TweetpackError>;

/// The error type for all tweetpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TweetpackError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The archive directory or `tweet.js` doesn't exist
    /// - Permission denied
    /// - The file is not valid UTF-8
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The payload after the assignment prefix is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The file doesn't match the expected container structure.
    ///
    /// This occurs when:
    /// - The file is shorter than the assignment prefix
    /// - The JSON payload is not an array
    /// - An output path has an unknown extension
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A record in the archive failed validation.
    #[error(
        "Record #{index}{} in {}: {source}",
        id.map(|id| format!(" (tweet {id})")).unwrap_or_default(),
        path.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "archive".to_string())
    )]
    Decode {
        /// Zero-based position of the record in the export array
        index: usize,
        /// The tweet id, when it could be read from the raw record
        id: Option<u64>,
        /// The file the record came from, if loaded from disk
        path: Option<PathBuf>,
        /// What went wrong
        #[source]
        source: DecodeError,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl From<std::string::FromUtf8Error> for TweetpackError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        TweetpackError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl TweetpackError {
    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        TweetpackError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        TweetpackError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates a decode error for the record at `index`.
    pub fn decode(index: usize, id: Option<u64>, source: DecodeError) -> Self {
        TweetpackError::Decode {
            index,
            id,
            path: None,
            source,
        }
    }

    /// Attaches the source file to a decode error. Other variants pass through.
    #[must_use]
    pub fn with_path(self, file: impl Into<PathBuf>) -> Self {
        match self {
            TweetpackError::Decode {
                index, id, source, ..
            } => TweetpackError::Decode {
                index,
                id,
                path: Some(file.into()),
                source,
            },
            other => other,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, TweetpackError::Io(_))
    }

    /// Returns `true` if this is a JSON syntax error.
    pub fn is_json(&self) -> bool {
        matches!(self, TweetpackError::Json(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, TweetpackError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, TweetpackError::InvalidDate { .. })
    }

    /// Returns the record-level error, if this is a decode failure.
    pub fn as_decode(&self) -> Option<&DecodeError> {
        match self {
            TweetpackError::Decode { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Record-level errors
// ============================================================================

/// Why a record was rejected.
///
/// Each kind maps to one decoder; missing or mistyped fields are reported with the
/// `Malformed*` kind of the decoder that read them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DecodeErrorKind {
    /// An index pair was not two integers in non-decreasing order.
    #[error("malformed range: {0}")]
    MalformedRange(String),

    /// A `created_at` value did not match `%a %b %d %H:%M:%S %z %Y`.
    #[error(
        "malformed timestamp {input:?}: expected a value like \"Sat Jun 06 12:09:03 +0000 2020\""
    )]
    MalformedTimestamp {
        /// The rejected input
        input: String,
    },

    /// A media record carried a `type` other than photo, animated_gif or video.
    #[error("unknown media type {0:?}")]
    UnknownMediaType(String),

    /// A media record was missing a field or had one of the wrong type.
    #[error("malformed media: {0}")]
    MalformedMedia(String),

    /// An entities record (or one of its hashtags, symbols, mentions or urls) was
    /// missing a field or had one of the wrong type.
    #[error("malformed entities: {0}")]
    MalformedEntities(String),

    /// The top-level record was missing a field or had one of the wrong type.
    #[error("malformed tweet: {0}")]
    MalformedTweet(String),

    /// An integer field and its `_str` duplicate disagree.
    #[error("{numeric_key} is {numeric} but {string_key} is {string}")]
    IdMismatch {
        /// Name of the integer field
        numeric_key: &'static str,
        /// Name of the string field
        string_key: &'static str,
        /// The integer value
        numeric: u64,
        /// The string field as found in the record (JSON-rendered)
        string: String,
    },

    /// `media_url` and `media_url_https` point at different resources.
    #[error("media_url {http:?} does not match media_url_https {https:?}")]
    MediaUrlMismatch {
        /// The `http://` url
        http: String,
        /// The `https://` url
        https: String,
    },

    /// The record carried keys no decoder read.
    #[error("unconsumed fields: {}", .0.join(", "))]
    UnconsumedFields(Vec<String>),
}

/// One step in the path to a failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// An object key
    Field(String),
    /// An array position
    Index(usize),
}

/// A rejected record: what went wrong, and where.
///
/// ```rust
/// use serde_json::json;
/// use tweetpack::decode::decode_int_range;
/// use tweetpack::error::DecodeErrorKind;
///
/// let err = decode_int_range(&json!(["5", "2"])).unwrap_err();
/// assert!(matches!(err.kind(), DecodeErrorKind::MalformedRange(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}{}", render_path(.path))]
pub struct DecodeError {
    kind: DecodeErrorKind,
    // Innermost segment first; segments are pushed while the error bubbles up.
    path: Vec<PathSegment>,
}

impl DecodeError {
    /// Creates an error with an empty path.
    pub fn new(kind: DecodeErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
        }
    }

    pub fn malformed_range(reason: impl Into<String>) -> Self {
        Self::new(DecodeErrorKind::MalformedRange(reason.into()))
    }

    pub fn malformed_timestamp(input: impl Into<String>) -> Self {
        Self::new(DecodeErrorKind::MalformedTimestamp {
            input: input.into(),
        })
    }

    pub fn unknown_media_type(media_type: impl Into<String>) -> Self {
        Self::new(DecodeErrorKind::UnknownMediaType(media_type.into()))
    }

    pub fn unconsumed(mut fields: Vec<String>) -> Self {
        fields.sort();
        Self::new(DecodeErrorKind::UnconsumedFields(fields))
    }

    /// Returns what went wrong.
    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    /// Returns the path to the failing field, outermost segment first.
    pub fn path(&self) -> impl Iterator<Item = &PathSegment> {
        self.path.iter().rev()
    }

    /// Renders the path as `a.b[0].c`. Empty when the error concerns the record itself.
    pub fn path_string(&self) -> String {
        join_path(&self.path)
    }

    /// Prefixes the path with an object key.
    #[must_use]
    pub fn at(mut self, field: impl Into<String>) -> Self {
        self.path.push(PathSegment::Field(field.into()));
        self
    }

    /// Prefixes the path with an array position.
    #[must_use]
    pub fn at_index(mut self, index: usize) -> Self {
        self.path.push(PathSegment::Index(index));
        self
    }

    pub fn is_unconsumed(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::UnconsumedFields(_))
    }

    pub fn is_id_mismatch(&self) -> bool {
        matches!(self.kind, DecodeErrorKind::IdMismatch { .. })
    }
}

impl From<DecodeErrorKind> for DecodeError {
    fn from(kind: DecodeErrorKind) -> Self {
        DecodeError::new(kind)
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, "{name}"),
            PathSegment::Index(i) => write!(f, "[{i}]"),
        }
    }
}

fn join_path(path: &[PathSegment]) -> String {
    let mut out = String::new();
    for segment in path.iter().rev() {
        if matches!(segment, PathSegment::Field(_)) && !out.is_empty() {
            out.push('.');
        }
        out.push_str(&segment.to_string());
    }
    out
}

fn render_path(path: &[PathSegment]) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" (at {})", join_path(path))
    }
}

/// Adds path context to decode results as they propagate.
pub(crate) trait DecodeContext<T> {
    /// Prefixes the error path with `field`.
    fn field(self, field: &str) -> std::result::Result<T, DecodeError>;

    /// Prefixes the error path with an array position.
    fn index(self, index: usize) -> std::result::Result<T, DecodeError>;
}

impl<T> DecodeContext<T> for std::result::Result<T, DecodeError> {
    fn field(self, field: &str) -> std::result::Result<T, DecodeError> {
        self.map_err(|e| e.at(field))
    }

    fn index(self, index: usize) -> std::result::Result<T, DecodeError> {
        self.map_err(|e| e.at_index(index))
    }
}

// ============================================================================
// Tests
// ============================================================================
