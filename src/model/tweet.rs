//! The root record of an export.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use super::{Entities, IntRange, Medium};

/// Language code used when the platform could not classify the text.
pub const UNDETERMINED_LANG: &str = "und";

/// One post from a personal data export, fully validated.
///
/// Instances only come out of [`decode_tweet`](crate::decode::decode_tweet); every
/// id has been cross-checked against its string duplicate and every field of the
/// raw record has been accounted for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tweet {
    pub id: u64,
    pub created_at: DateTime<FixedOffset>,
    pub full_text: String,
    /// The part of `full_text` meant for display (excludes leading reply mentions
    /// and trailing media links).
    pub display_text_range: IntRange,
    /// Two-letter language code, or `"und"`.
    pub lang: String,
    /// HTML anchor naming the client that posted the tweet.
    pub source: String,
    pub retweeted: bool,
    pub favorited: bool,
    pub truncated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub possibly_sensitive: Option<bool>,
    pub retweet_count: u64,
    pub favorite_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to_status_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to_user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to_screen_name: Option<String>,
    pub entities: Entities,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_entities: Option<Entities>,
}

impl Tweet {
    /// Returns `true` if the tweet answers another status.
    pub fn is_reply(&self) -> bool {
        self.in_reply_to_status_id.is_some()
    }

    /// Returns `true` if the tweet is a retweet of someone else's post.
    ///
    /// Exports keep retweets as ordinary records whose text starts with `RT @`.
    pub fn is_retweet(&self) -> bool {
        self.full_text.starts_with("RT @")
    }

    /// Creation time normalized to UTC.
    pub fn created_at_utc(&self) -> DateTime<Utc> {
        self.created_at.with_timezone(&Utc)
    }

    /// The displayable slice of `full_text`.
    ///
    /// Offsets count characters, not bytes. Out-of-range offsets are clamped to the
    /// text length.
    pub fn display_text(&self) -> String {
        let begin = usize::try_from(self.display_text_range.begin()).unwrap_or(0);
        let end = usize::try_from(self.display_text_range.end()).unwrap_or(0);
        self.full_text
            .chars()
            .skip(begin)
            .take(end.saturating_sub(begin))
            .collect()
    }

    /// Media attachments, preferring `extended_entities` which lists every
    /// attachment rather than only the first.
    pub fn media(&self) -> &[Medium] {
        match &self.extended_entities {
            Some(extended) if !extended.media.is_empty() => &extended.media,
            _ => &self.entities.media,
        }
    }

    /// Permalink on the web client.
    pub fn permalink(&self, screen_name: &str) -> String {
        format!("https://twitter.com/{screen_name}/status/{}", self.id)
    }
}
