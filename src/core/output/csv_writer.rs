//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::{OutputConfig, TweetRow};
use crate::error::Result;
use crate::model::Tweet;

/// Writes tweets to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: Depends on OutputConfig
///   - Basic: `Date`, `Text`
///   - With IDs: `ID` first
///   - With timestamps: `Timestamp` after the ID
///   - With replies: `ReplyTo` after the text
///   - With media: `Media` last
/// - Encoding: UTF-8
pub fn write_csv(tweets: &[Tweet], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(tweets, file, config)
}

/// Converts tweets to a CSV string.
///
/// Same format as [`write_csv`], returned as a `String`.
pub fn to_csv(tweets: &[Tweet], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(tweets, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(tweets: &[Tweet], sink: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(build_header(config))?;

    for tweet in tweets {
        let row = TweetRow::from_tweet(tweet, config);
        writer.write_record(build_record(row, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_ids {
        header.push("ID");
    }
    if config.include_timestamps {
        header.push("Timestamp");
    }

    header.push("Date");
    header.push("Text");

    if config.include_replies {
        header.push("ReplyTo");
    }
    if config.include_media {
        header.push("Media");
    }

    header
}

/// Build CSV record for a single row, in header order.
fn build_record(row: TweetRow, config: &OutputConfig) -> Vec<String> {
    let mut record = Vec::new();

    if config.include_ids {
        record.push(row.id.map(|id| id.to_string()).unwrap_or_default());
    }
    if config.include_timestamps {
        record.push(row.timestamp.unwrap_or_default());
    }

    record.push(row.date);
    record.push(row.text);

    if config.include_replies {
        record.push(row.reply_to.map(|id| id.to_string()).unwrap_or_default());
    }
    if config.include_media {
        record.push(row.media.unwrap_or_default());
    }

    record
}
