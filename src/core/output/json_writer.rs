//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::{OutputConfig, TweetRow};
use crate::error::Result;
use crate::model::Tweet;

/// Writes tweets to a JSON file as an array of rows.
///
/// # Format
/// ```json
/// [
///   {"date": "2020-06-06", "text": "Hello"},
///   {"date": "2020-06-07", "text": "Hi", "id": 1269257433393143808}
/// ]
/// ```
pub fn write_json(tweets: &[Tweet], output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(tweets, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts tweets to a pretty-printed JSON array.
pub fn to_json(tweets: &[Tweet], config: &OutputConfig) -> Result<String> {
    let rows: Vec<TweetRow> = tweets
        .iter()
        .map(|t| TweetRow::from_tweet(t, config))
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::tweet_at;
    use serde_json::Value;

    #[test]
    fn test_to_json_array() {
        let tweets = vec![
            tweet_at(1, "Hello", "Sat Jun 06 12:09:03 +0000 2020"),
            tweet_at(2, "World", "Sat Jun 06 12:10:00 +0000 2020"),
        ];

        let json = to_json(&tweets, &OutputConfig::new().with_ids()).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["text"], "Hello");
        assert_eq!(parsed[1]["id"], 2);
        assert!(parsed[0].get("timestamp").is_none());
    }

    #[test]
    fn test_write_json_file() {
        let tweets = vec![tweet_at(1, "Hello", "Sat Jun 06 12:09:03 +0000 2020")];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");

        write_json(&tweets, path.to_str().unwrap(), &OutputConfig::new()).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"date\": \"2020-06-06\""));
    }

    #[test]
    fn test_empty_is_empty_array() {
        assert_eq!(to_json(&[], &OutputConfig::new()).unwrap(), "[]");
    }
}
