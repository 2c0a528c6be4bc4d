//! JSON object parsing for decoded segments

use crate::error::{Error, Result};
use miniserde::json::{self, Object, Value};

/// Parse a decoded segment, requiring a top-level JSON object
pub(crate) fn parse_object(segment: &'static str, input: &str) -> Result<Object> {
    let value: Value =
        json::from_str(input).map_err(|_| Error::FormatInvalidJson { segment })?;

    match value {
        Value::Object(object) => Ok(object),
        _ => Err(Error::SegmentNotObject { segment }),
    }
}

/// Borrow a string member of an object
pub(crate) fn string_member<'a>(object: &'a Object, name: &str) -> Option<&'a str> {
    match object.get(name) {
        Some(Value::String(value)) => Some(value.as_str()),
        _ => None,
    }
}
