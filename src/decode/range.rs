use serde_json::Value;

use super::fields::{describe, integer_from, type_name};
use crate::error::DecodeError;
use crate::model::IntRange;

/// Decodes a `[begin, end]` offset pair.
///
/// Both elements may be JSON integers or strings holding integers. The pair must have
/// exactly two elements and `end` must not be smaller than `begin`.
///
/// ```rust
/// use serde_json::json;
/// use tweetpack::decode::decode_int_range;
///
/// let range = decode_int_range(&json!(["0", "140"])).unwrap();
/// assert_eq!((range.begin(), range.end()), (0, 140));
/// ```
pub fn decode_int_range(raw: &Value) -> Result<IntRange, DecodeError> {
    let Value::Array(items) = raw else {
        return Err(DecodeError::malformed_range(format!(
            "expected an array, found {}",
            type_name(raw)
        )));
    };

    let [begin, end] = items.as_slice() else {
        return Err(DecodeError::malformed_range(format!(
            "expected 2 elements, found {}",
            items.len()
        )));
    };

    let begin = bound(begin).map_err(|e| e.at_index(0))?;
    let end = bound(end).map_err(|e| e.at_index(1))?;

    IntRange::new(begin, end)
        .ok_or_else(|| DecodeError::malformed_range(format!("end {end} is before begin {begin}")))
}

fn bound(value: &Value) -> Result<i64, DecodeError> {
    integer_from(value).ok_or_else(|| {
        DecodeError::malformed_range(format!("expected an integer, found {}", describe(value)))
    })
}
