use serde_json::Value;

use super::entities::decode_entities_with;
use super::fields::{FieldReader, Presence, Scope, decode_checked_int, is_blank};
use super::range::decode_int_range;
use super::timestamp::decode_timestamp;
use crate::config::DecodeOptions;
use crate::error::{DecodeContext, DecodeError};
use crate::model::{Tweet, UNDETERMINED_LANG};

/// Decodes one element of the export array with the default [`DecodeOptions`].
///
/// The element must be an object whose only key is `"tweet"`. Error paths are
/// relative to the inner object.
///
/// ```rust
/// use serde_json::json;
/// use tweetpack::decode::decode_tweet;
///
/// let raw = json!({"tweet": {
///     "retweeted": false,
///     "source": "<a href=\"https://mobile.twitter.com\">Twitter Web App</a>",
///     "entities": {"hashtags": [], "symbols": [], "user_mentions": [], "urls": []},
///     "display_text_range": ["0", "13"],
///     "favorite_count": "2",
///     "id_str": "1269257433393143808",
///     "truncated": false,
///     "retweet_count": "0",
///     "id": "1269257433393143808",
///     "created_at": "Sat Jun 06 12:09:03 +0000 2020",
///     "favorited": false,
///     "full_text": "Hello, world!",
///     "lang": "en"
/// }});
///
/// let tweet = decode_tweet(&raw).unwrap();
/// assert_eq!(tweet.id, 1269257433393143808);
/// assert_eq!(tweet.favorite_count, 2);
/// assert!(!tweet.is_reply());
/// ```
pub fn decode_tweet(raw: &Value) -> Result<Tweet, DecodeError> {
    decode_tweet_with(raw, &DecodeOptions::default())
}

/// Decodes one element of the export array.
pub fn decode_tweet_with(raw: &Value, options: &DecodeOptions) -> Result<Tweet, DecodeError> {
    let mut wrapper = FieldReader::new(raw, Scope::Tweet)?;
    let inner = wrapper.required("tweet")?;
    wrapper.finish()?;

    let mut reader = FieldReader::new(inner, Scope::Tweet).field("tweet")?;

    let retweeted = reader.boolean("retweeted")?;
    let source = reader.string("source")?;

    let lang = reader.string("lang")?;
    if lang.chars().count() != 2 && lang != UNDETERMINED_LANG {
        return Err(Scope::Tweet
            .malformed(format!(
                "expected a two-letter code or {UNDETERMINED_LANG:?}, found {lang:?}"
            ))
            .at("lang"));
    }

    let full_text = reader.string("full_text")?;
    let favorited = reader.boolean("favorited")?;
    let possibly_sensitive = reader.opt_boolean("possibly_sensitive")?;

    let id =
        decode_checked_int(&mut reader, "id", "id_str", Presence::Required)?.unwrap_or_default();
    let retweet_count = reader.integer("retweet_count")?;

    let created_at_raw = reader.string("created_at")?;
    let created_at = decode_timestamp(&created_at_raw).field("created_at")?;

    let truncated = reader.boolean("truncated")?;
    let favorite_count = reader.integer("favorite_count")?;

    let display_text_range =
        decode_int_range(reader.required("display_text_range")?).field("display_text_range")?;

    let entities = decode_entities_with(reader.required("entities")?, options).field("entities")?;
    let extended_entities = match reader.take("extended_entities") {
        Some(raw) if !is_blank(raw) => {
            Some(decode_entities_with(raw, options).field("extended_entities")?)
        }
        _ => None,
    };

    let in_reply_to_status_id = decode_checked_int(
        &mut reader,
        "in_reply_to_status_id",
        "in_reply_to_status_id_str",
        Presence::Optional,
    )?;
    let in_reply_to_user_id = decode_checked_int(
        &mut reader,
        "in_reply_to_user_id",
        "in_reply_to_user_id_str",
        Presence::Optional,
    )?;
    let in_reply_to_screen_name = reader.opt_string("in_reply_to_screen_name")?;

    reader.finish()?;

    Ok(Tweet {
        id,
        created_at,
        full_text,
        display_text_range,
        lang,
        source,
        retweeted,
        favorited,
        truncated,
        possibly_sensitive,
        retweet_count,
        favorite_count,
        in_reply_to_status_id,
        in_reply_to_user_id,
        in_reply_to_screen_name,
        entities,
        extended_entities,
    })
}
