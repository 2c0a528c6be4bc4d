use crate::error::Result;
use crate::utils::json::{parse_object, string_member};
use miniserde::json::{Object, Value};

/// Decoded token header
///
/// Only decodability is required. No field is mandatory and none is
/// interpreted; the accessors are conveniences for diagnostics.
#[derive(Debug, Clone)]
pub struct TokenHeader {
    raw: Object,
}

impl TokenHeader {
    pub(crate) fn from_json(json: &str) -> Result<Self> {
        Ok(Self {
            raw: parse_object("header", json)?,
        })
    }

    /// Declared algorithm (`alg`), if a string
    pub fn algorithm(&self) -> Option<&str> {
        string_member(&self.raw, "alg")
    }

    /// Declared token type (`typ`), if a string
    pub fn token_type(&self) -> Option<&str> {
        string_member(&self.raw, "typ")
    }

    /// Key ID (`kid`), if a string
    pub fn key_id(&self) -> Option<&str> {
        string_member(&self.raw, "kid")
    }

    /// Any header member by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.raw.get(name)
    }

    /// The full decoded header object
    pub fn as_object(&self) -> &Object {
        &self.raw
    }
}
