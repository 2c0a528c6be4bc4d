//! Payload claims and temporal evaluation
//!
//! Only `exp` and `iat` are interpreted. Numeric dates may be integers or
//! floats; a fractional date is rounded up, which keeps `now >= exp` and
//! `now < iat` exact for whole-second `now`.

use crate::error::{Error, Result};
use crate::outcome::Outcome;
use crate::utils::bounds::apply_leeway;
use crate::utils::json::parse_object;
use miniserde::json::{Number, Object, Value};
use std::time::{SystemTime, UNIX_EPOCH};

/// What to do with a payload that has no `exp` claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingExpiry {
    /// Treat the token as unusable
    #[default]
    Reject,
    /// Treat the token as never expiring
    NeverExpires,
}

/// Decoded token payload
#[derive(Debug, Clone)]
pub struct Claims {
    expiration: Option<i64>,
    issued_at: Option<i64>,
    raw: Object,
}

impl Claims {
    pub(crate) fn from_json(json: &str) -> Result<Self> {
        let raw = parse_object("payload", json)?;

        // `exp: null` is malformed, `iat: null` counts as absent
        let expiration = match raw.get("exp") {
            None => None,
            Some(value) => Some(numeric_date("exp", value)?),
        };
        let issued_at = match raw.get("iat") {
            None | Some(Value::Null) => None,
            Some(value) => Some(numeric_date("iat", value)?),
        };

        Ok(Self {
            expiration,
            issued_at,
            raw,
        })
    }

    /// Expiration Time (`exp`), seconds since Unix epoch
    pub fn expiration(&self) -> Option<i64> {
        self.expiration
    }

    /// Issued At (`iat`), seconds since Unix epoch
    pub fn issued_at(&self) -> Option<i64> {
        self.issued_at
    }

    /// Any claim by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.raw.get(name)
    }

    /// The full decoded payload object
    pub fn as_object(&self) -> &Object {
        &self.raw
    }
}

/// Convert a JSON number into whole epoch seconds
fn numeric_date(claim: &'static str, value: &Value) -> Result<i64> {
    let invalid = Error::ClaimInvalidType { claim };
    match value {
        Value::Number(Number::U64(n)) => i64::try_from(*n).map_err(|_| invalid),
        Value::Number(Number::I64(n)) => Ok(*n),
        Value::Number(Number::F64(n)) => {
            let ceiled = n.ceil();
            // i64::MAX as f64 rounds up to 2^63, hence the strict bound
            if ceiled.is_finite() && ceiled >= i64::MIN as f64 && ceiled < i64::MAX as f64 {
                Ok(ceiled as i64)
            } else {
                Err(invalid)
            }
        }
        _ => Err(invalid),
    }
}

/// Evaluate the temporal claims at `now`
///
/// Expiry is checked before issued-at, so a token failing both reports
/// [`Outcome::Expired`].
pub(crate) fn evaluate(
    claims: &Claims,
    leeway: u64,
    missing_expiry: MissingExpiry,
    now: i64,
) -> Outcome {
    // Overflowing leeway pushes the bound past any representable now
    match claims.expiration {
        Some(exp) if apply_leeway(exp, leeway, true).is_ok_and(|limit| now >= limit) => {
            return Outcome::Expired {
                expired_at: exp,
                now,
            };
        }
        Some(_) => {}
        None if missing_expiry == MissingExpiry::Reject => return Outcome::MissingExpiry,
        None => {}
    }

    // iat of zero skips the check
    if let Some(iat) = claims.issued_at.filter(|iat| *iat != 0) {
        if apply_leeway(iat, leeway, false).is_ok_and(|limit| now < limit) {
            return Outcome::NotYetValid { issued_at: iat, now };
        }
    }

    Outcome::Valid
}

/// Get current Unix timestamp
pub(crate) fn current_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
