use serde_json::Value;

use super::fields::{FieldReader, Presence, Scope, decode_checked_int};
use super::media::decode_medium_with;
use super::range::decode_int_range;
use crate::config::DecodeOptions;
use crate::error::{DecodeContext, DecodeError};
use crate::model::{Entities, Hashtag, IntRange, Symbol, Url, UserMention};

/// Decodes an `entities` (or `extended_entities`) object with the default
/// [`DecodeOptions`].
pub fn decode_entities(raw: &Value) -> Result<Entities, DecodeError> {
    decode_entities_with(raw, &DecodeOptions::default())
}

/// Decodes an `entities` object.
///
/// Each list defaults to empty when absent; a `null` list is rejected. Media errors
/// keep their own kind, everything else is reported as malformed entities.
///
/// ```rust
/// use serde_json::json;
/// use tweetpack::decode::decode_entities;
///
/// let entities = decode_entities(&json!({
///     "hashtags": [{"text": "rust", "indices": ["0", "5"]}],
///     "urls": []
/// }))
/// .unwrap();
/// assert_eq!(entities.hashtags[0].text, "rust");
/// assert!(entities.media.is_empty());
/// ```
pub fn decode_entities_with(raw: &Value, options: &DecodeOptions) -> Result<Entities, DecodeError> {
    let mut reader = FieldReader::new(raw, Scope::Entities)?;

    let hashtags = decode_list(&mut reader, "hashtags", decode_hashtag)?;
    let symbols = decode_list(&mut reader, "symbols", decode_symbol)?;
    let user_mentions = decode_list(&mut reader, "user_mentions", decode_user_mention)?;
    let urls = decode_list(&mut reader, "urls", decode_url)?;
    let media = decode_list(&mut reader, "media", |raw| decode_medium_with(raw, options))?;

    reader.finish()?;

    Ok(Entities {
        hashtags,
        user_mentions,
        urls,
        media,
        symbols,
    })
}

fn decode_list<T>(
    reader: &mut FieldReader<'_>,
    key: &str,
    decode: impl Fn(&Value) -> Result<T, DecodeError>,
) -> Result<Vec<T>, DecodeError> {
    reader
        .array_or_empty(key)?
        .iter()
        .enumerate()
        .map(|(i, item)| decode(item).index(i))
        .collect::<Result<Vec<_>, _>>()
        .field(key)
}

fn indices(reader: &mut FieldReader<'_>) -> Result<IntRange, DecodeError> {
    decode_int_range(reader.required("indices")?).field("indices")
}

fn decode_hashtag(raw: &Value) -> Result<Hashtag, DecodeError> {
    let mut reader = FieldReader::new(raw, Scope::Entities)?;
    let text = reader.string("text")?;
    let indices = indices(&mut reader)?;
    reader.finish()?;
    Ok(Hashtag { text, indices })
}

fn decode_symbol(raw: &Value) -> Result<Symbol, DecodeError> {
    let mut reader = FieldReader::new(raw, Scope::Entities)?;
    let text = reader.string("text")?;
    let indices = indices(&mut reader)?;
    reader.finish()?;
    Ok(Symbol { text, indices })
}

fn decode_user_mention(raw: &Value) -> Result<UserMention, DecodeError> {
    let mut reader = FieldReader::new(raw, Scope::Entities)?;
    let name = reader.string("name")?;
    let screen_name = reader.string("screen_name")?;
    let indices = indices(&mut reader)?;
    let id =
        decode_checked_int(&mut reader, "id", "id_str", Presence::Required)?.unwrap_or_default();
    reader.finish()?;
    Ok(UserMention {
        name,
        screen_name,
        indices,
        id,
    })
}

fn decode_url(raw: &Value) -> Result<Url, DecodeError> {
    let mut reader = FieldReader::new(raw, Scope::Entities)?;
    let display_url = reader.string("display_url")?;
    let expanded_url = reader.string("expanded_url")?;
    let indices = indices(&mut reader)?;
    let url = reader.string("url")?;
    reader.finish()?;
    Ok(Url {
        display_url,
        expanded_url,
        indices,
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeErrorKind;
    use serde_json::json;

    fn full() -> Value {
        json!({
            "hashtags": [{"text": "rustlang", "indices": ["10", "19"]}],
            "symbols": [{"text": "TSLA", "indices": ["20", "25"]}],
            "user_mentions": [{
                "name": "Ada Lovelace",
                "screen_name": "ada",
                "indices": ["0", "4"],
                "id_str": "12",
                "id": "12"
            }],
            "urls": [{
                "url": "https://t.co/xyz",
                "expanded_url": "https://www.rust-lang.org/",
                "display_url": "rust-lang.org",
                "indices": ["26", "49"]
            }]
        })
    }

    #[test]
    fn test_all_lists_decode() {
        let entities = decode_entities(&full()).unwrap();
        assert_eq!(entities.hashtags[0].text, "rustlang");
        assert_eq!(entities.symbols[0].text, "TSLA");
        assert_eq!(entities.user_mentions[0].id, 12);
        assert_eq!(entities.user_mentions[0].screen_name, "ada");
        assert_eq!(entities.urls[0].display_url, "rust-lang.org");
        assert_eq!(entities.urls[0].indices.end(), 49);
        assert!(entities.media.is_empty());
        assert_eq!(entities.len(), 4);
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let entities = decode_entities(&json!({})).unwrap();
        assert!(entities.is_empty());

        let entities = decode_entities(&json!({"media": []})).unwrap();
        assert!(entities.is_empty());
    }

    #[test]
    fn test_null_list_is_rejected() {
        for key in ["hashtags", "symbols", "user_mentions", "urls", "media"] {
            let mut raw = json!({});
            raw[key] = Value::Null;
            let err = decode_entities(&raw).unwrap_err();
            assert!(matches!(err.kind(), DecodeErrorKind::MalformedEntities(_)));
            assert!(err.to_string().contains("expected an array, found null"));
            assert_eq!(err.path_string(), key);
        }
    }

    #[test]
    fn test_zero_mention_id_is_cross_checked() {
        let mention = |id: Value, id_str: &str| {
            json!({"user_mentions": [{
                "name": "Root",
                "screen_name": "root",
                "indices": ["0", "5"],
                "id_str": id_str,
                "id": id
            }]})
        };

        let entities = decode_entities(&mention(json!(0), "0")).unwrap();
        assert_eq!(entities.user_mentions[0].id, 0);

        let err = decode_entities(&mention(json!(0), "7")).unwrap_err();
        assert!(err.is_id_mismatch());
    }

    #[test]
    fn test_list_must_be_array() {
        let err = decode_entities(&json!({"urls": {}})).unwrap_err();
        assert!(matches!(err.kind(), DecodeErrorKind::MalformedEntities(_)));
        assert_eq!(err.path_string(), "urls");
    }

    #[test]
    fn test_extra_key_on_entities_fails() {
        let mut raw = full();
        raw["polls"] = json!([]);
        let err = decode_entities(&raw).unwrap_err();
        assert_eq!(
            err.kind(),
            &DecodeErrorKind::UnconsumedFields(vec!["polls".into()])
        );
    }

    #[test]
    fn test_extra_key_on_item_fails() {
        let mut raw = full();
        raw["hashtags"][0]["lang"] = json!("en");
        let err = decode_entities(&raw).unwrap_err();
        assert!(err.is_unconsumed());
        assert_eq!(err.path_string(), "hashtags[0]");
    }

    #[test]
    fn test_mention_id_mismatch() {
        let mut raw = full();
        raw["user_mentions"][0]["id_str"] = json!("13");
        let err = decode_entities(&raw).unwrap_err();
        assert!(err.is_id_mismatch());
        assert_eq!(err.path_string(), "user_mentions[0]");
    }

    #[test]
    fn test_missing_item_field() {
        let mut raw = full();
        raw["urls"][0].as_object_mut().unwrap().remove("expanded_url");
        let err = decode_entities(&raw).unwrap_err();
        assert!(matches!(err.kind(), DecodeErrorKind::MalformedEntities(_)));
        assert_eq!(err.path_string(), "urls[0].expanded_url");
    }

    #[test]
    fn test_bad_indices_keep_range_kind() {
        let mut raw = full();
        raw["symbols"][0]["indices"] = json!(["25", "20"]);
        let err = decode_entities(&raw).unwrap_err();
        assert!(matches!(err.kind(), DecodeErrorKind::MalformedRange(_)));
        assert_eq!(err.path_string(), "symbols[0].indices");
    }

    #[test]
    fn test_media_errors_propagate_unchanged() {
        let raw = json!({"media": [{"type": "photo"}]});
        let err = decode_entities(&raw).unwrap_err();
        assert!(matches!(err.kind(), DecodeErrorKind::MalformedMedia(_)));
        assert_eq!(err.path_string(), "media[0].display_url");
    }
}
