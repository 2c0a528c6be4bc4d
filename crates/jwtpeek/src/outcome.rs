//! Tagged inspection result

use crate::error::{Error, Result};

/// Result of inspecting a token at a point in time
///
/// Every variant other than [`Outcome::Valid`] means the session must be
/// treated as unauthenticated.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Well-formed, not expired and already issued
    Valid,

    /// `now >= exp` (after leeway)
    Expired { expired_at: i64, now: i64 },

    /// `now < iat` (after leeway)
    NotYetValid { issued_at: i64, now: i64 },

    /// Payload carries no `exp` and the policy rejects such tokens
    MissingExpiry,

    /// The token could not be decoded
    Malformed(Error),
}

impl Outcome {
    /// Whether the token may be used
    pub fn is_valid(&self) -> bool {
        matches!(self, Outcome::Valid)
    }

    /// Short machine-friendly label, used as the `reason` field in logs
    pub fn reason(&self) -> &'static str {
        match self {
            Outcome::Valid => "valid",
            Outcome::Expired { .. } => "expired",
            Outcome::NotYetValid { .. } => "not_yet_valid",
            Outcome::MissingExpiry => "missing_expiry",
            Outcome::Malformed(_) => "malformed",
        }
    }

    /// Convert into a `Result`, mapping each failure to its [`Error`]
    ///
    /// `leeway` is echoed into the temporal errors.
    pub fn into_result(self, leeway: u64) -> Result<()> {
        match self {
            Outcome::Valid => Ok(()),
            Outcome::Expired { expired_at, now } => Err(Error::TokenExpired {
                expired_at,
                now,
                leeway,
            }),
            Outcome::NotYetValid { issued_at, now } => Err(Error::TokenNotYetValid {
                issued_at,
                now,
                leeway,
            }),
            Outcome::MissingExpiry => Err(Error::TokenMissingExpiry),
            Outcome::Malformed(error) => Err(error),
        }
    }
}

impl From<Error> for Outcome {
    fn from(error: Error) -> Self {
        Outcome::Malformed(error)
    }
}
