//! Strict decoders from raw export JSON to [`crate::model`] types.
//!
//! Every decoder borrows a [`serde_json::Value`] and either returns a fully
//! validated record or a [`DecodeError`](crate::error::DecodeError) naming the kind
//! of failure and the path to the field that caused it. Nothing is defaulted or
//! skipped silently: keys a decoder does not know about are an error, so a change in
//! the export format surfaces immediately instead of losing data.
//!
//! | Decoder | Input |
//! |---------|-------|
//! | [`decode_tweet`] | one element of the export array (`{"tweet": {...}}`) |
//! | [`decode_entities`] | an `entities` / `extended_entities` object |
//! | [`decode_medium`] | one element of `entities.media` |
//! | [`decode_int_range`] | an `indices` / `display_text_range` pair |
//! | [`decode_timestamp`] | a `created_at` string |
//!
//! The `*_with` variants take [`DecodeOptions`](crate::config::DecodeOptions).

mod entities;
mod fields;
mod media;
mod range;
mod timestamp;
mod tweet;

pub use entities::{decode_entities, decode_entities_with};
pub use media::{decode_medium, decode_medium_with};
pub use range::decode_int_range;
pub use timestamp::{TIMESTAMP_FORMAT, decode_timestamp};
pub use tweet::{decode_tweet, decode_tweet_with};

pub(crate) use fields::unsigned_from;
