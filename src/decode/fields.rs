//! Exhaustive field access over raw JSON objects.
//!
//! [`FieldReader`] borrows an object and records every key a decoder reads.
//! [`FieldReader::finish`] then fails with [`DecodeErrorKind::UnconsumedFields`]
//! if any key was never read, so a field added upstream can't slip through a
//! decoder unnoticed.

use std::collections::BTreeSet;

use serde_json::{Map, Value};

use crate::error::{DecodeContext, DecodeError, DecodeErrorKind};

/// Which decoder is reading; decides the error kind for missing or mistyped fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    Tweet,
    Entities,
    Media,
}

impl Scope {
    pub(crate) fn malformed(self, reason: impl Into<String>) -> DecodeError {
        let reason = reason.into();
        DecodeError::new(match self {
            Scope::Tweet => DecodeErrorKind::MalformedTweet(reason),
            Scope::Entities => DecodeErrorKind::MalformedEntities(reason),
            Scope::Media => DecodeErrorKind::MalformedMedia(reason),
        })
    }
}

/// Whether an id pair may be missing, and how strictly the string half is paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Presence {
    /// Both halves must be present and agree.
    Required,
    /// A missing, null or zero integer means "no value"; the string half must then
    /// be missing or null too.
    Optional,
    /// As `Optional`, but the string half is ignored when the integer is empty.
    Lenient,
}

pub(crate) struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    consumed: BTreeSet<&'a str>,
    scope: Scope,
}

impl<'a> FieldReader<'a> {
    /// Fails unless `value` is a JSON object.
    pub(crate) fn new(value: &'a Value, scope: Scope) -> Result<Self, DecodeError> {
        match value {
            Value::Object(object) => Ok(Self {
                object,
                consumed: BTreeSet::new(),
                scope,
            }),
            other => Err(scope.malformed(format!(
                "expected an object, found {}",
                type_name(other)
            ))),
        }
    }

    pub(crate) fn scope(&self) -> Scope {
        self.scope
    }

    /// Marks `key` as read and returns its value, which may be `null`.
    pub(crate) fn take(&mut self, key: &str) -> Option<&'a Value> {
        let (key, value) = self.object.get_key_value(key)?;
        self.consumed.insert(key.as_str());
        Some(value)
    }

    /// Marks `key` as read; absent and `null` both come back as `None`.
    pub(crate) fn optional(&mut self, key: &str) -> Option<&'a Value> {
        self.take(key).filter(|v| !v.is_null())
    }

    pub(crate) fn required(&mut self, key: &str) -> Result<&'a Value, DecodeError> {
        self.optional(key)
            .ok_or_else(|| self.scope.malformed("missing required field").at(key))
    }

    pub(crate) fn string(&mut self, key: &str) -> Result<String, DecodeError> {
        let value = self.required(key)?;
        self.as_string(value).field(key)
    }

    pub(crate) fn opt_string(&mut self, key: &str) -> Result<Option<String>, DecodeError> {
        self.optional(key)
            .map(|value| self.as_string(value).field(key))
            .transpose()
    }

    pub(crate) fn boolean(&mut self, key: &str) -> Result<bool, DecodeError> {
        let value = self.required(key)?;
        self.as_bool(value).field(key)
    }

    pub(crate) fn opt_boolean(&mut self, key: &str) -> Result<Option<bool>, DecodeError> {
        self.optional(key)
            .map(|value| self.as_bool(value).field(key))
            .transpose()
    }

    /// A non-negative integer, given either as a JSON number or a numeric string.
    pub(crate) fn integer(&mut self, key: &str) -> Result<u64, DecodeError> {
        let value = self.required(key)?;
        unsigned_from(value)
            .ok_or_else(|| {
                self.scope
                    .malformed(format!("expected an integer, found {}", describe(value)))
            })
            .field(key)
    }

    pub(crate) fn opt_integer(&mut self, key: &str) -> Result<Option<u64>, DecodeError> {
        match self.optional(key) {
            Some(value) => unsigned_from(value)
                .map(Some)
                .ok_or_else(|| {
                    self.scope
                        .malformed(format!("expected an integer, found {}", describe(value)))
                })
                .field(key),
            None => Ok(None),
        }
    }

    pub(crate) fn array(&mut self, key: &str) -> Result<&'a [Value], DecodeError> {
        let value = self.required(key)?;
        self.as_array(value).field(key)
    }

    /// A list that defaults to empty when the key is absent. `null` is not a list.
    pub(crate) fn array_or_empty(&mut self, key: &str) -> Result<&'a [Value], DecodeError> {
        match self.take(key) {
            Some(value) => self.as_array(value).field(key),
            None => Ok(&[]),
        }
    }

    /// Opens a nested object under the same scope.
    pub(crate) fn object(&mut self, key: &str) -> Result<FieldReader<'a>, DecodeError> {
        let value = self.required(key)?;
        FieldReader::new(value, self.scope).field(key)
    }

    /// Fails if any key of the object was never read.
    pub(crate) fn finish(self) -> Result<(), DecodeError> {
        let leftover: Vec<String> = self
            .object
            .keys()
            .filter(|key| !self.consumed.contains(key.as_str()))
            .cloned()
            .collect();

        if leftover.is_empty() {
            Ok(())
        } else {
            Err(DecodeError::unconsumed(leftover))
        }
    }

    fn as_string(&self, value: &Value) -> Result<String, DecodeError> {
        value.as_str().map(ToString::to_string).ok_or_else(|| {
            self.scope
                .malformed(format!("expected a string, found {}", type_name(value)))
        })
    }

    fn as_bool(&self, value: &Value) -> Result<bool, DecodeError> {
        value.as_bool().ok_or_else(|| {
            self.scope
                .malformed(format!("expected a boolean, found {}", type_name(value)))
        })
    }

    fn as_array(&self, value: &'a Value) -> Result<&'a [Value], DecodeError> {
        value.as_array().map(Vec::as_slice).ok_or_else(|| {
            self.scope
                .malformed(format!("expected an array, found {}", type_name(value)))
        })
    }
}

/// Reads an integer field together with its `_str` duplicate and checks that the
/// string is exactly the decimal rendering of the integer.
///
/// [`Presence::Required`] treats only an absent or `null` integer as missing, so
/// `0` still goes through the cross-check. [`Presence::Optional`] and
/// [`Presence::Lenient`] return `None` when the integer is absent, `null`, `0` or
/// `""`. Both keys are always consumed.
pub(crate) fn decode_checked_int(
    reader: &mut FieldReader<'_>,
    numeric_key: &'static str,
    string_key: &'static str,
    presence: Presence,
) -> Result<Option<u64>, DecodeError> {
    let numeric = reader.take(numeric_key);
    let string = reader.take(string_key);

    let numeric = match (numeric, presence) {
        (Some(value), Presence::Required) if !value.is_null() => value,
        (Some(value), Presence::Optional | Presence::Lenient) if !is_empty_id(value) => value,
        (_, Presence::Required) => {
            return Err(reader
                .scope()
                .malformed("missing required field")
                .at(numeric_key));
        }
        (_, Presence::Optional) => {
            return match string {
                None | Some(Value::Null) => Ok(None),
                Some(_) => Err(reader
                    .scope()
                    .malformed(format!("present without a value for {numeric_key}"))
                    .at(string_key)),
            };
        }
        (_, Presence::Lenient) => return Ok(None),
    };

    let value = unsigned_from(numeric).ok_or_else(|| {
        reader
            .scope()
            .malformed(format!("expected an integer, found {}", describe(numeric)))
            .at(numeric_key)
    })?;

    match string {
        Some(Value::String(s)) if *s == value.to_string() => Ok(Some(value)),
        other => Err(DecodeError::new(DecodeErrorKind::IdMismatch {
            numeric_key,
            string_key,
            numeric: value,
            string: other.map_or_else(|| "missing".to_string(), Value::to_string),
        })),
    }
}

/// Converts a JSON number or numeric string to `i64`. Floats and booleans are
/// rejected.
pub(crate) fn integer_from(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Converts a JSON number or numeric string to `u64`. Floats, booleans and
/// negative values are rejected.
pub(crate) fn unsigned_from(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Absent-like values: `null`, `false`, zero, and empty strings, arrays or objects.
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::Array(items) => items.is_empty(),
        Value::Object(object) => object.is_empty(),
        scalar => is_empty_id(scalar),
    }
}

fn is_empty_id(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_u64() == Some(0) || n.as_i64() == Some(0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Type name plus the value itself for scalars, e.g. `string "12a"`.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Array(_) | Value::Object(_) | Value::Null => type_name(value).to_string(),
        scalar => format!("{} {}", type_name(value), scalar),
    }
}
