//! Filter tweets by date range and reply status.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering tweet collections.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Tweets on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Tweets on or before date |
//! | Replies | [`without_replies`](FilterConfig::without_replies) | Drop replies to other tweets |
//!
//! # Behavior Notes
//!
//! - Dates are calendar days in UTC; a tweet's offset is normalized before comparing
//! - Both date bounds are inclusive
//! - Multiple filters are combined with AND logic

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::TweetpackError;
use crate::model::Tweet;

/// Configuration for filtering tweets.
///
/// # Examples
///
/// ```
/// use tweetpack::core::filter::FilterConfig;
///
/// # fn main() -> tweetpack::Result<()> {
/// let config = FilterConfig::new()
///     .with_date_from("2020-01-01")?
///     .with_date_to("2020-12-31")?
///     .without_replies();
///
/// assert!(config.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only tweets on or after this timestamp.
    pub after: Option<DateTime<Utc>>,

    /// Include only tweets on or before this timestamp.
    pub before: Option<DateTime<Utc>>,

    /// Drop tweets that reply to another status.
    pub exclude_replies: bool,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all tweets pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`TweetpackError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, TweetpackError> {
        let naive = parse_date(date_str)?;
        self.after = Some(naive.and_time(chrono::NaiveTime::MIN).and_utc());
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`TweetpackError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, TweetpackError> {
        let naive = parse_date(date_str)?;

        // End of the day to include the full day
        let end = naive
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| TweetpackError::invalid_date(date_str))?;
        self.before = Some(end.and_utc());
        Ok(self)
    }

    /// Drops replies from the result.
    #[must_use]
    pub fn without_replies(mut self) -> Self {
        self.exclude_replies = true;
        self
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: DateTime<Utc>) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: DateTime<Utc>) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.exclude_replies
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `tweet` passes every active filter.
    pub fn matches(&self, tweet: &Tweet) -> bool {
        if self.exclude_replies && tweet.is_reply() {
            return false;
        }

        let ts = tweet.created_at_utc();
        if self.after.is_some_and(|after| ts < after) {
            return false;
        }
        if self.before.is_some_and(|before| ts > before) {
            return false;
        }

        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, TweetpackError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| TweetpackError::invalid_date(date_str))
}

/// Filters a collection of tweets based on the provided configuration.
///
/// Returns a new vector containing only tweets that match all active filters, in
/// their original order. If no filters are active, returns the input unchanged.
pub fn apply_filters(tweets: Vec<Tweet>, config: &FilterConfig) -> Vec<Tweet> {
    if !config.is_active() {
        return tweets;
    }

    tweets.into_iter().filter(|tweet| config.matches(tweet)).collect()
}
