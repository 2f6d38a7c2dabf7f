//! Summary statistics over decoded tweets.

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::model::{MediumKind, Tweet};

/// Counts reported after loading an archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArchiveStats {
    pub total: usize,
    pub replies: usize,
    pub retweets: usize,
    /// Tweets with at least one attachment
    pub with_media: usize,
    pub photos: usize,
    pub animated_gifs: usize,
    pub videos: usize,
    pub first: Option<DateTime<FixedOffset>>,
    pub last: Option<DateTime<FixedOffset>>,
}

impl ArchiveStats {
    /// Counts `tweets`. Media are taken from [`Tweet::media`], so an attachment listed
    /// in both `entities` and `extended_entities` is counted once.
    pub fn collect(tweets: &[Tweet]) -> Self {
        let mut stats = Self {
            total: tweets.len(),
            ..Self::default()
        };

        for tweet in tweets {
            if tweet.is_reply() {
                stats.replies += 1;
            }
            if tweet.is_retweet() {
                stats.retweets += 1;
            }

            let media = tweet.media();
            if !media.is_empty() {
                stats.with_media += 1;
            }
            for medium in media {
                match medium.kind {
                    MediumKind::Photo => stats.photos += 1,
                    MediumKind::AnimatedGif { .. } => stats.animated_gifs += 1,
                    MediumKind::Video { .. } => stats.videos += 1,
                }
            }

            let ts = tweet.created_at;
            if stats.first.is_none_or(|first| ts < first) {
                stats.first = Some(ts);
            }
            if stats.last.is_none_or(|last| ts > last) {
                stats.last = Some(ts);
            }
        }

        stats
    }

    pub fn media_count(&self) -> usize {
        self.photos + self.animated_gifs + self.videos
    }

    /// Share of tweets that are replies, in percent.
    pub fn reply_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.replies as f64 / self.total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{photo_tweet, reply_tweet, tweet_at};

    #[test]
    fn test_empty() {
        let stats = ArchiveStats::collect(&[]);
        assert_eq!(stats, ArchiveStats::default());
        assert_eq!(stats.reply_ratio(), 0.0);
    }

    #[test]
    fn test_counts() {
        let tweets = vec![
            tweet_at(1, "RT @ada: hello", "Wed Jan 01 12:00:00 +0000 2020"),
            reply_tweet(2, 1),
            photo_tweet(3, 3),
            tweet_at(4, "late", "Thu Dec 31 08:00:00 +0000 2020"),
        ];

        let stats = ArchiveStats::collect(&tweets);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.replies, 1);
        assert_eq!(stats.retweets, 1);
        assert_eq!(stats.with_media, 1);
        assert_eq!(stats.photos, 3);
        assert_eq!(stats.media_count(), 3);
        assert_eq!(stats.reply_ratio(), 25.0);
        assert_eq!(
            stats.first.map(|t| t.to_rfc3339()).as_deref(),
            Some("2020-01-01T12:00:00+00:00")
        );
        assert_eq!(
            stats.last.map(|t| t.to_rfc3339()).as_deref(),
            Some("2020-12-31T08:00:00+00:00")
        );
    }
}
