//! Text entities: hashtags, cashtags, mentions, links and media.

use serde::Serialize;

use super::{IntRange, Medium};

/// A `#hashtag` occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hashtag {
    /// The tag without the leading `#`.
    pub text: String,
    pub indices: IntRange,
}

/// A `$CASHTAG` occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub text: String,
    pub indices: IntRange,
}

/// An `@mention` of another account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserMention {
    pub name: String,
    pub screen_name: String,
    pub indices: IntRange,
    pub id: u64,
}

/// A shortened link and what it expands to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Url {
    pub display_url: String,
    pub expanded_url: String,
    pub indices: IntRange,
    /// The `t.co` form as it appears in the text.
    pub url: String,
}

/// Every structured span found in one tweet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entities {
    pub hashtags: Vec<Hashtag>,
    pub user_mentions: Vec<UserMention>,
    pub urls: Vec<Url>,
    pub media: Vec<Medium>,
    pub symbols: Vec<Symbol>,
}

impl Entities {
    /// Returns `true` if no entity of any kind was found.
    pub fn is_empty(&self) -> bool {
        self.hashtags.is_empty()
            && self.user_mentions.is_empty()
            && self.urls.is_empty()
            && self.media.is_empty()
            && self.symbols.is_empty()
    }

    /// Total number of entities across all kinds.
    pub fn len(&self) -> usize {
        self.hashtags.len()
            + self.user_mentions.len()
            + self.urls.len()
            + self.media.len()
            + self.symbols.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let entities = Entities::default();
        assert!(entities.is_empty());
        assert_eq!(entities.len(), 0);
    }

    #[test]
    fn test_len_counts_every_kind() {
        let indices = IntRange::new(0, 4).unwrap();
        let entities = Entities {
            hashtags: vec![Hashtag {
                text: "rust".into(),
                indices,
            }],
            symbols: vec![Symbol {
                text: "TSLA".into(),
                indices,
            }],
            ..Entities::default()
        };
        assert!(!entities.is_empty());
        assert_eq!(entities.len(), 2);
    }
}
