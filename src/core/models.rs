//! Flat report rows and the configuration that shapes them.

use serde::Serialize;

use crate::model::Tweet;

/// Configuration for output format.
/// Controls which columns are included next to the date and text.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Include the full creation timestamp (RFC 3339, original offset)
    pub include_timestamps: bool,
    /// Include tweet IDs
    pub include_ids: bool,
    /// Include the ID of the status a tweet replies to
    pub include_replies: bool,
    /// Include the kinds of attached media
    pub include_media: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables every optional column.
    pub fn all() -> Self {
        Self {
            include_timestamps: true,
            include_ids: true,
            include_replies: true,
            include_media: true,
        }
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.include_ids = true;
        self
    }

    #[must_use]
    pub fn with_replies(mut self) -> Self {
        self.include_replies = true;
        self
    }

    #[must_use]
    pub fn with_media(mut self) -> Self {
        self.include_media = true;
        self
    }
}

/// One tweet flattened for reports.
///
/// `date` and `text` are always present; the other fields are filled only when
/// enabled in [`OutputConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TweetRow {
    /// Creation day in UTC, `YYYY-MM-DD`
    pub date: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<u64>,
    /// Media kinds joined with `,`, e.g. `photo,photo`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<String>,
}

impl TweetRow {
    pub fn from_tweet(tweet: &Tweet, config: &OutputConfig) -> Self {
        Self {
            date: tweet.created_at_utc().format("%Y-%m-%d").to_string(),
            text: tweet.full_text.clone(),
            timestamp: config
                .include_timestamps
                .then(|| tweet.created_at.to_rfc3339()),
            id: config.include_ids.then_some(tweet.id),
            reply_to: if config.include_replies {
                tweet.in_reply_to_status_id
            } else {
                None
            },
            media: config.include_media.then(|| media_kinds(tweet)),
        }
    }
}

fn media_kinds(tweet: &Tweet) -> String {
    tweet
        .media()
        .iter()
        .map(|m| m.kind.type_name())
        .collect::<Vec<_>>()
        .join(",")
}
