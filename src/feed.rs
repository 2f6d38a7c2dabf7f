//! Syndication feed built from a live timeline.
//!
//! Fetching is left to a [`TimelineSource`] implementation; this module only decodes
//! what the source returns and maps each tweet to a [`FeedItem`]. Rendering the feed
//! as RSS XML is up to the caller.
//!
//! # Example
//!
//! ```rust
//! use chrono::{DateTime, Utc};
//! use serde_json::Value;
//! use tweetpack::feed::{Feed, TimelineSource};
//!
//! struct Empty;
//!
//! impl TimelineSource for Empty {
//!     fn timeline(&self, _username: &str, _since: DateTime<Utc>) -> tweetpack::Result<Vec<Value>> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! let feed = Feed::last_day("ada", &Empty).unwrap();
//! assert_eq!(feed.title, "RSS feed for ada");
//! assert!(feed.items.is_empty());
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::archive::record_id;
use crate::config::DecodeOptions;
use crate::decode::decode_tweet_with;
use crate::error::{Result, TweetpackError};
use crate::model::Tweet;

/// Produces raw tweet records for a user, in the same shape as `tweet.js` elements.
pub trait TimelineSource {
    /// Returns records posted by `username` at or after `since`.
    fn timeline(&self, username: &str, since: DateTime<Utc>) -> Result<Vec<Value>>;
}

/// One entry of a [`Feed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub title: String,
    pub description: String,
    pub link: String,
}

impl FeedItem {
    /// Maps a tweet posted by `username` to a feed entry.
    pub fn from_tweet(username: &str, tweet: &Tweet) -> Self {
        Self {
            title: tweet.full_text.clone(),
            description: tweet.full_text.clone(),
            link: format!("https://mobile.twitter.com/{username}/status/{}", tweet.id),
        }
    }
}

/// A per-user feed of recent tweets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feed {
    pub title: String,
    pub description: String,
    pub link: String,
    pub items: Vec<FeedItem>,
}

impl Feed {
    /// Builds the feed for `username` from the last 24 hours of their timeline.
    pub fn last_day(username: &str, source: &impl TimelineSource) -> Result<Self> {
        Self::since(username, source, Utc::now() - Duration::days(1))
    }

    /// Builds the feed for `username` from tweets posted at or after `since`.
    pub fn since(
        username: &str,
        source: &impl TimelineSource,
        since: DateTime<Utc>,
    ) -> Result<Self> {
        let records = source.timeline(username, since)?;
        debug!(username, records = records.len(), %since, "fetched timeline");

        let options = DecodeOptions::default();
        let items = records
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                decode_tweet_with(raw, &options)
                    .map(|tweet| FeedItem::from_tweet(username, &tweet))
                    .map_err(|source| TweetpackError::decode(index, record_id(raw), source))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(username, items))
    }

    /// A feed for `username` holding `items`.
    pub fn new(username: &str, items: Vec<FeedItem>) -> Self {
        let title = format!("RSS feed for {username}");
        Self {
            description: title.clone(),
            title,
            link: format!("https://twitter.com/{username}"),
            items,
        }
    }
}
