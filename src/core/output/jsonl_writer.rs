//! JSON Lines (JSONL) output writer.
//!
//! One row per line, which suits line-oriented tools (`jq -c`, `grep`) and
//! appending to existing datasets.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::core::models::{OutputConfig, TweetRow};
use crate::error::Result;
use crate::model::Tweet;

/// Writes tweets to JSONL (JSON Lines) format.
///
/// # Format
/// ```text
/// {"date":"2020-06-06","text":"Hello"}
/// {"date":"2020-06-07","text":"Hi"}
/// ```
pub fn write_jsonl(tweets: &[Tweet], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(tweets, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts tweets to a JSONL string, each line terminated by `\n`.
pub fn to_jsonl(tweets: &[Tweet], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(tweets, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(tweets: &[Tweet], writer: &mut W, config: &OutputConfig) -> Result<()> {
    for tweet in tweets {
        serde_json::to_writer(&mut *writer, &TweetRow::from_tweet(tweet, config))?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{reply_tweet, tweet_at};
    use serde_json::Value;

    #[test]
    fn test_to_jsonl_one_object_per_line() {
        let tweets = vec![
            tweet_at(1, "multi\nline", "Sat Jun 06 12:09:03 +0000 2020"),
            reply_tweet(2, 1),
        ];

        let jsonl = to_jsonl(&tweets, &OutputConfig::new().with_replies()).unwrap();
        let lines: Vec<&str> = jsonl.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["text"], "multi\nline");
        assert!(first.get("reply_to").is_none());

        let second: Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["reply_to"], 1);
    }

    #[test]
    fn test_write_jsonl_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        let tweets = vec![tweet_at(1, "x", "Sat Jun 06 12:09:03 +0000 2020")];

        write_jsonl(&tweets, path.to_str().unwrap(), &OutputConfig::new()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "{\"date\":\"2020-06-06\",\"text\":\"x\"}\n");
    }
}
