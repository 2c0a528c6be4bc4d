//! Token construction helpers
//!
//! Tokens are assembled by hand from `serde_json` values. Nothing is signed:
//! the signature segment is an arbitrary placeholder since inspection never
//! looks at it.

#![allow(dead_code)]

use base64::{
    Engine,
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
};
use serde_json::{Value, json};
use std::time::{SystemTime, UNIX_EPOCH};

pub fn now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

/// Fluent builder for unsigned test tokens
pub struct TokenBuilder {
    header: Value,
    claims: serde_json::Map<String, Value>,
    signature: String,
}

impl TokenBuilder {
    pub fn new() -> Self {
        Self {
            header: json!({"alg": "HS256", "typ": "JWT"}),
            claims: serde_json::Map::new(),
            signature: URL_SAFE_NO_PAD.encode("signature"),
        }
    }

    pub fn header(mut self, header: Value) -> Self {
        self.header = header;
        self
    }

    pub fn claim(mut self, name: &str, value: Value) -> Self {
        self.claims.insert(name.to_string(), value);
        self
    }

    pub fn expires_at(self, exp: i64) -> Self {
        self.claim("exp", json!(exp))
    }

    pub fn issued_at(self, iat: i64) -> Self {
        self.claim("iat", json!(iat))
    }

    pub fn signature(mut self, signature: &str) -> Self {
        self.signature = signature.to_string();
        self
    }

    /// Base64URL segments without padding
    pub fn build(&self) -> String {
        format!(
            "{}.{}.{}",
            URL_SAFE_NO_PAD.encode(self.header.to_string()),
            URL_SAFE_NO_PAD.encode(Value::Object(self.claims.clone()).to_string()),
            self.signature
        )
    }

    /// Standard-alphabet segments with padding
    pub fn build_padded_standard(&self) -> String {
        format!(
            "{}.{}.{}",
            STANDARD.encode(self.header.to_string()),
            STANDARD.encode(Value::Object(self.claims.clone()).to_string()),
            self.signature
        )
    }
}

/// Header `{"alg":"HS256","typ":"JWT"}` and payload `{"id":1, ...}`
pub fn standard_token(exp: i64, iat: i64) -> String {
    TokenBuilder::new()
        .claim("id", json!(1))
        .expires_at(exp)
        .issued_at(iat)
        .build()
}

/// Assemble a token from already-encoded segments
pub fn raw_token(header: &str, payload: &str, signature: &str) -> String {
    format!(
        "{}.{}.{}",
        URL_SAFE_NO_PAD.encode(header),
        URL_SAFE_NO_PAD.encode(payload),
        signature
    )
}
