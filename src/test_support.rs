//! Decoded tweets for unit tests.

use serde_json::{Value, json};

use crate::decode::decode_tweet;
use crate::model::Tweet;

pub(crate) fn raw_tweet(id: u64, text: &str, created_at: &str) -> Value {
    json!({"tweet": {
        "retweeted": false,
        "source": "<a href=\"https://mobile.twitter.com\" rel=\"nofollow\">Twitter Web App</a>",
        "entities": {"hashtags": [], "symbols": [], "user_mentions": [], "urls": []},
        "display_text_range": ["0", text.chars().count().to_string()],
        "favorite_count": "0",
        "id_str": id.to_string(),
        "truncated": false,
        "retweet_count": "0",
        "id": id.to_string(),
        "created_at": created_at,
        "favorited": false,
        "full_text": text,
        "lang": "en"
    }})
}

pub(crate) fn tweet_at(id: u64, text: &str, created_at: &str) -> Tweet {
    decode_tweet(&raw_tweet(id, text, created_at)).unwrap()
}

pub(crate) fn reply_tweet(id: u64, parent: u64) -> Tweet {
    let mut raw = raw_tweet(id, "@ada sure", "Sat Jun 06 12:09:03 +0000 2020");
    raw["tweet"]["in_reply_to_status_id"] = json!(parent.to_string());
    raw["tweet"]["in_reply_to_status_id_str"] = json!(parent.to_string());
    raw["tweet"]["in_reply_to_user_id"] = json!("12");
    raw["tweet"]["in_reply_to_user_id_str"] = json!("12");
    raw["tweet"]["in_reply_to_screen_name"] = json!("ada");
    decode_tweet(&raw).unwrap()
}

pub(crate) fn raw_photo(id: u64) -> Value {
    json!({
        "expanded_url": format!("https://twitter.com/ada/status/{id}/photo/1"),
        "indices": ["5", "28"],
        "url": "https://t.co/AbCdEf",
        "media_url": format!("http://pbs.twimg.com/media/{id}.jpg"),
        "id_str": id.to_string(),
        "id": id.to_string(),
        "media_url_https": format!("https://pbs.twimg.com/media/{id}.jpg"),
        "sizes": {"thumb": {"w": "150", "h": "150", "resize": "crop"}},
        "type": "photo",
        "display_url": "pic.twitter.com/AbCdEf"
    })
}

/// A tweet with `photos` photo attachments in `extended_entities`.
pub(crate) fn photo_tweet(id: u64, photos: u64) -> Tweet {
    let mut raw = raw_tweet(id, "look https://t.co/AbCdEf", "Sat Jun 06 12:09:03 +0000 2020");
    let media: Vec<Value> = (1..=photos).map(|n| raw_photo(id * 10 + n)).collect();
    raw["tweet"]["entities"]["media"] = json!([media[0].clone()]);
    raw["tweet"]["extended_entities"] = json!({"media": media});
    decode_tweet(&raw).unwrap()
}
