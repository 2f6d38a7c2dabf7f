//! Decoder for media attachments (`entities.media[]`, `extended_entities.media[]`).

use std::collections::BTreeMap;

use serde_json::Value;

use super::fields::{FieldReader, Presence, Scope, decode_checked_int, describe, unsigned_from};
use super::range::decode_int_range;
use crate::config::{DecodeOptions, SourceIdPolicy};
use crate::error::{DecodeContext, DecodeError, DecodeErrorKind};
use crate::model::{AspectRatio, Medium, MediumKind, Resize, Size, Variant};

/// Decodes one media record with the default [`DecodeOptions`].
pub fn decode_medium(raw: &Value) -> Result<Medium, DecodeError> {
    decode_medium_with(raw, &DecodeOptions::default())
}

/// Decodes one media record.
///
/// Shared fields are read first, then the `type` discriminant selects the
/// kind-specific block. Every object on the way (the record, each size, `video_info`,
/// each variant and `additional_media_info`) must be fully consumed.
pub fn decode_medium_with(raw: &Value, options: &DecodeOptions) -> Result<Medium, DecodeError> {
    let mut reader = FieldReader::new(raw, Scope::Media)?;

    let display_url = reader.string("display_url")?;
    let expanded_url = reader.string("expanded_url")?;
    let id =
        decode_checked_int(&mut reader, "id", "id_str", Presence::Required)?.unwrap_or_default();
    let indices = decode_int_range(reader.required("indices")?).field("indices")?;

    let media_url = reader.string("media_url")?;
    let media_url_https = reader.string("media_url_https")?;
    check_media_urls(&media_url, &media_url_https)?;

    let sizes = decode_sizes(reader.required("sizes")?).field("sizes")?;

    let source_presence = match options.source_ids {
        SourceIdPolicy::Strict => Presence::Optional,
        SourceIdPolicy::Lenient => Presence::Lenient,
    };
    let source_status_id = decode_checked_int(
        &mut reader,
        "source_status_id",
        "source_status_id_str",
        source_presence,
    )?;
    let source_user_id = decode_checked_int(
        &mut reader,
        "source_user_id",
        "source_user_id_str",
        source_presence,
    )?;

    let url = reader.string("url")?;

    let media_type = reader.string("type")?;
    let kind = match media_type.as_str() {
        "photo" => MediumKind::Photo,
        "animated_gif" => {
            let mut video_info = reader.object("video_info")?;
            let (variants, aspect_ratio) = decode_playback(&mut video_info).field("video_info")?;
            video_info.finish().field("video_info")?;
            MediumKind::AnimatedGif {
                variants,
                aspect_ratio,
            }
        }
        "video" => {
            let mut video_info = reader.object("video_info")?;
            let (variants, aspect_ratio) = decode_playback(&mut video_info).field("video_info")?;
            let duration_millis = video_info.integer("duration_millis").field("video_info")?;
            video_info.finish().field("video_info")?;

            let monetizable =
                decode_additional_media_info(reader.required("additional_media_info")?)
                    .field("additional_media_info")?;

            MediumKind::Video {
                variants,
                aspect_ratio,
                duration_millis,
                monetizable,
            }
        }
        other => return Err(DecodeError::unknown_media_type(other).at("type")),
    };

    reader.finish()?;

    Ok(Medium {
        display_url,
        expanded_url,
        id,
        indices,
        media_url_https,
        sizes,
        source_status_id,
        source_user_id,
        url,
        kind,
    })
}

fn check_media_urls(http: &str, https: &str) -> Result<(), DecodeError> {
    match (http.strip_prefix("http://"), https.strip_prefix("https://")) {
        (Some(a), Some(b)) if a == b => Ok(()),
        _ => Err(DecodeError::new(DecodeErrorKind::MediaUrlMismatch {
            http: http.to_string(),
            https: https.to_string(),
        })),
    }
}

fn decode_sizes(raw: &Value) -> Result<BTreeMap<String, Size>, DecodeError> {
    let Value::Object(sizes) = raw else {
        return Err(Scope::Media.malformed(format!("expected an object, found {}", describe(raw))));
    };

    sizes
        .iter()
        .map(|(name, size)| decode_size(size).field(name).map(|size| (name.clone(), size)))
        .collect()
}

fn decode_size(raw: &Value) -> Result<Size, DecodeError> {
    let mut reader = FieldReader::new(raw, Scope::Media)?;

    let height = reader.integer("h")?;
    let width = reader.integer("w")?;
    let resize_name = reader.string("resize")?;
    let resize = Resize::from_name(&resize_name).ok_or_else(|| {
        Scope::Media
            .malformed(format!("unknown resize policy {resize_name:?}"))
            .at("resize")
    })?;

    reader.finish()?;
    Ok(Size {
        width,
        height,
        resize,
    })
}

/// Reads the parts of `video_info` shared by GIFs and videos.
fn decode_playback(
    video_info: &mut FieldReader<'_>,
) -> Result<(Vec<Variant>, AspectRatio), DecodeError> {
    let aspect_ratio =
        decode_aspect_ratio(video_info.required("aspect_ratio")?).field("aspect_ratio")?;

    let variants = video_info
        .array("variants")?
        .iter()
        .enumerate()
        .map(|(i, variant)| decode_variant(variant).index(i))
        .collect::<Result<Vec<_>, _>>()
        .field("variants")?;

    Ok((variants, aspect_ratio))
}

fn decode_aspect_ratio(raw: &Value) -> Result<AspectRatio, DecodeError> {
    let pair = match raw.as_array().map(Vec::as_slice) {
        Some([width, height]) => (unsigned_from(width), unsigned_from(height)),
        _ => {
            return Err(Scope::Media.malformed(format!(
                "expected two integers, found {}",
                describe(raw)
            )));
        }
    };

    match pair {
        (Some(width), Some(height)) => Ok(AspectRatio { width, height }),
        _ => Err(Scope::Media.malformed(format!("expected two integers, found {raw}"))),
    }
}

fn decode_variant(raw: &Value) -> Result<Variant, DecodeError> {
    let mut reader = FieldReader::new(raw, Scope::Media)?;

    let bitrate = reader.opt_integer("bitrate")?;
    let content_type = reader.string("content_type")?;
    let url = reader.string("url")?;

    reader.finish()?;
    Ok(Variant {
        url,
        bitrate,
        content_type,
    })
}

/// Returns `monetizable`. The remaining keys are only accepted at their defaults.
fn decode_additional_media_info(raw: &Value) -> Result<bool, DecodeError> {
    let mut reader = FieldReader::new(raw, Scope::Media)?;

    let monetizable = reader.boolean("monetizable")?;

    for key in ["title", "description"] {
        if let Some(value) = reader.take(key) {
            if value.as_str() != Some("") {
                return Err(Scope::Media
                    .malformed(format!("expected an empty string, found {}", describe(value)))
                    .at(key));
            }
        }
    }

    if let Some(value) = reader.take("embeddable") {
        if value != &Value::Bool(true) {
            return Err(Scope::Media
                .malformed(format!("expected true, found {}", describe(value)))
                .at("embeddable"));
        }
    }

    reader.finish()?;
    Ok(monetizable)
}
