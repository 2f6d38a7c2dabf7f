//! Integration tests for tweetpack.
//!
//! These tests load a complete export fixture from disk and verify the decoded
//! records, then run them through filtering, statistics and the report writers.

use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;
use tweetpack::config::{ArchiveConfig, DecodeOptions, SourceIdPolicy};
use tweetpack::core::{ArchiveStats, FilterConfig, OutputConfig, apply_filters};
use tweetpack::model::{MediumKind, Resize};
use tweetpack::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("twitter-2020-06-07")
}

fn fixture_tweets() -> Vec<Tweet> {
    Archive::open(fixture_dir())
        .expect("fixture should load")
        .tweets()
        .expect("fixture should decode")
}

fn fixture_content() -> String {
    fs::read_to_string(fixture_dir().join("data").join("tweet.js")).unwrap()
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_open_export_directory() {
    let archive = Archive::open(fixture_dir()).unwrap();
    assert_eq!(archive.len(), 5);
    assert!(archive.path().unwrap().ends_with("data/tweet.js"));
}

#[test]
fn test_open_file_directly() {
    let archive = Archive::from_path(fixture_dir().join("data").join("tweet.js")).unwrap();
    assert_eq!(archive.tweets().unwrap().len(), 5);
}

#[test]
fn test_iteration_is_lazy_and_ordered() {
    let archive = Archive::open(fixture_dir()).unwrap();
    let ids: Vec<u64> = archive.iter().map(|t| t.unwrap().id).collect();
    assert_eq!(
        ids,
        vec![
            1268000000000000001,
            1268000000000000002,
            1268000000000000003,
            1268000000000000004,
            1268000000000000005,
        ]
    );
    assert_eq!(archive.iter().len(), 5);
}

#[test]
fn test_missing_export_is_io_error() {
    let dir = tempdir().unwrap();
    let err = Archive::open(dir.path()).unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_custom_tweets_file_location() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tweets.js"), fixture_content()).unwrap();

    let config = ArchiveConfig::new().with_tweets_file("tweets.js");
    let archive = Archive::open_with(dir.path(), &config).unwrap();
    assert_eq!(archive.len(), 5);
}

#[test]
fn test_custom_prefix_length() {
    let payload = &fixture_content()["window.YTD.tweet.part0 = ".len()..];
    let content = format!("window.YTD.tweets.part12 = {payload}");

    let config = ArchiveConfig::new().with_prefix_len("window.YTD.tweets.part12 = ".len());
    let archive = Archive::from_str_with(&content, &config).unwrap();
    assert_eq!(archive.tweets().unwrap().len(), 5);

    // The default prefix cuts into the JSON payload.
    assert!(Archive::from_str(&content).unwrap_err().is_json());
}

// ============================================================================
// Decoded content
// ============================================================================

#[test]
fn test_plain_tweet_with_entities() {
    let tweet = &fixture_tweets()[0];

    assert_eq!(tweet.full_text, "@ada have you read the new #rustlang https://t.co/Xyz123");
    assert_eq!(tweet.lang, "en");
    assert_eq!(tweet.favorite_count, 4);
    assert_eq!(tweet.retweet_count, 1);
    assert_eq!(tweet.possibly_sensitive, None);
    assert!(!tweet.is_reply());
    assert!(tweet.extended_entities.is_none());

    let entities = &tweet.entities;
    assert_eq!(entities.hashtags[0].text, "rustlang");
    assert_eq!(entities.hashtags[0].indices.begin(), 26);
    assert_eq!(entities.user_mentions[0].screen_name, "ada");
    assert_eq!(entities.user_mentions[0].id, 12);
    assert_eq!(entities.urls[0].expanded_url, "https://blog.rust-lang.org/");
    assert!(entities.symbols.is_empty());
    assert!(entities.media.is_empty());
    assert_eq!(entities.len(), 3);
}

#[test]
fn test_photos_prefer_extended_entities() {
    let tweet = &fixture_tweets()[1];

    assert_eq!(tweet.entities.media.len(), 1);
    assert_eq!(tweet.media().len(), 2);
    assert!(tweet.media().iter().all(Medium::is_photo));
    assert_eq!(tweet.possibly_sensitive, Some(false));
    assert!(tweet.favorited);

    let second = &tweet.media()[1];
    assert_eq!(second.id, 1268000000000000102);
    assert_eq!(second.media_url(), "http://pbs.twimg.com/media/EZbbbb.jpg");
    assert_eq!(second.sizes["large"].width, 1536);
    assert_eq!(second.sizes["large"].height, 2048);
    assert_eq!(second.sizes["thumb"].resize, Resize::Crop);
}

#[test]
fn test_timestamps_keep_their_offset() {
    let tweet = &fixture_tweets()[1];
    assert_eq!(tweet.created_at.to_rfc3339(), "2020-06-06T12:09:03+03:00");
    assert_eq!(tweet.created_at_utc().to_rfc3339(), "2020-06-06T09:09:03+00:00");
}

#[test]
fn test_video() {
    let tweet = &fixture_tweets()[2];
    let medium = &tweet.media()[0];

    assert!(medium.is_video());
    // `entities` lists the video as its thumbnail photo.
    assert!(tweet.entities.media[0].is_photo());

    let MediumKind::Video {
        variants,
        aspect_ratio,
        duration_millis,
        monetizable,
    } = &medium.kind
    else {
        panic!("expected a video, got {:?}", medium.kind);
    };
    assert_eq!(variants.len(), 3);
    assert_eq!((aspect_ratio.width, aspect_ratio.height), (16, 9));
    assert_eq!(*duration_millis, 14000);
    assert!(!monetizable);

    let best = medium.best_variant().unwrap();
    assert_eq!(best.bitrate, Some(2176000));
    assert!(best.url.ends_with("1280x720/v.mp4"));
}

#[test]
fn test_animated_gif() {
    let tweet = &fixture_tweets()[3];
    let medium = &tweet.media()[0];

    assert_eq!(tweet.lang, "und");
    assert!(medium.is_animated_gif());
    assert_eq!(medium.variants().len(), 1);
    assert_eq!(medium.variants()[0].bitrate, Some(0));
}

#[test]
fn test_reply() {
    let tweet = &fixture_tweets()[4];

    assert!(tweet.is_reply());
    assert_eq!(tweet.in_reply_to_status_id, Some(1268000000000000001));
    assert_eq!(tweet.in_reply_to_user_id, Some(12));
    assert_eq!(tweet.in_reply_to_screen_name.as_deref(), Some("ada"));
    assert_eq!(tweet.display_text(), "not yet, tonight");
}

// ============================================================================
// Failures carry their location
// ============================================================================

#[test]
fn test_decode_error_names_record_and_file() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    let broken = fixture_content().replacen(
        "\"lang\" : \"und\"",
        "\"lang\" : \"und\", \"edit_info\" : { }",
        1,
    );
    fs::write(data.join("tweet.js"), broken).unwrap();

    let archive = Archive::open(dir.path()).unwrap();
    let err = archive.tweets().unwrap_err();

    let TweetpackError::Decode { index, id, path, source } = &err else {
        panic!("expected a decode error, got {err:?}");
    };
    assert_eq!(*index, 3);
    assert_eq!(*id, Some(1268000000000000004));
    assert!(path.as_ref().unwrap().ends_with("data/tweet.js"));
    assert_eq!(
        source.kind(),
        &DecodeErrorKind::UnconsumedFields(vec!["edit_info".into()])
    );
    assert!(err.to_string().starts_with("Record #3 (tweet 1268000000000000004) in "));

    // Records before the broken one still decode.
    assert_eq!(archive.iter().take_while(|r| r.is_ok()).count(), 3);
}

#[test]
fn test_nested_error_path() {
    let broken = fixture_content().replacen(
        "\"id_str\" : \"1268000000000000102\"",
        "\"id_str\" : \"1268000000000000199\"",
        1,
    );
    let err = Archive::from_str(&broken).unwrap().tweets().unwrap_err();
    let source = err.as_decode().unwrap();

    assert!(source.is_id_mismatch());
    assert_eq!(source.path_string(), "extended_entities.media[1]");
}

#[test]
fn test_lenient_source_ids() {
    let content = fixture_content().replacen(
        "\"id_str\" : \"1268000000000000101\",",
        "\"id_str\" : \"1268000000000000101\", \"source_status_id_str\" : \"99\",",
        1,
    );

    let strict = Archive::from_str(&content).unwrap().tweets().unwrap_err();
    assert_eq!(strict.as_decode().unwrap().path_string(), "entities.media[0].source_status_id_str");

    let config = ArchiveConfig::new()
        .with_decode(DecodeOptions::new().with_source_ids(SourceIdPolicy::Lenient));
    let tweets = Archive::from_str_with(&content, &config).unwrap().tweets().unwrap();
    assert_eq!(tweets[1].entities.media[0].source_status_id, None);
}

// ============================================================================
// Processing pipeline
// ============================================================================

#[test]
fn test_stats() {
    let stats = ArchiveStats::collect(&fixture_tweets());

    assert_eq!(stats.total, 5);
    assert_eq!(stats.replies, 1);
    assert_eq!(stats.retweets, 0);
    assert_eq!(stats.with_media, 3);
    assert_eq!(stats.photos, 2);
    assert_eq!(stats.videos, 1);
    assert_eq!(stats.animated_gifs, 1);
    assert_eq!(
        stats.first.unwrap().to_rfc3339(),
        "2020-06-05T09:15:00+00:00"
    );
    assert_eq!(
        stats.last.unwrap().to_rfc3339(),
        "2020-06-07T21:45:10+00:00"
    );
}

#[test]
fn test_filter_pipeline() {
    let config = FilterConfig::new()
        .with_date_from("2020-06-06")
        .unwrap()
        .with_date_to("2020-06-06")
        .unwrap()
        .without_replies();

    let kept = apply_filters(fixture_tweets(), &config);
    let ids: Vec<u64> = kept.iter().map(|t| t.id).collect();

    // 18:30 at -0500 is 23:30 UTC, still June 6th.
    assert_eq!(ids, vec![1268000000000000002, 1268000000000000003]);
}

#[cfg(all(feature = "csv-output", feature = "json-output"))]
#[test]
fn test_write_all_formats() {
    use tweetpack::format::{OutputFormat, write_to_format};

    let dir = tempdir().unwrap();
    let tweets = fixture_tweets();
    let config = OutputConfig::new().with_ids().with_media();

    for format in OutputFormat::all() {
        let path = dir.path().join(format!("tweets.{}", format.extension()));
        write_to_format(&tweets, path.to_str().unwrap(), *format, &config).unwrap();
        assert!(fs::metadata(&path).unwrap().len() > 0, "{format} output is empty");
    }

    let jsonl = fs::read_to_string(dir.path().join("tweets.jsonl")).unwrap();
    let rows: Vec<serde_json::Value> = jsonl
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[1]["media"], "photo,photo");
    assert_eq!(rows[2]["media"], "video");
    assert_eq!(rows[3]["media"], "animated_gif");
    assert_eq!(rows[4]["id"], 1268000000000000005_u64);
}
