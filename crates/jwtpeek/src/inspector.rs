use crate::claims::{Claims, MissingExpiry, current_timestamp, evaluate};
use crate::error::{Error, Result};
use crate::header::TokenHeader;
use crate::limits::{MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE, MAX_TOKEN_LENGTH};
use crate::outcome::Outcome;
use crate::utils::base64url;
use crate::utils::bounds::validate_leeway;

/// A token whose header and payload decoded successfully
///
/// Nothing here is authenticated: the signature segment is carried as-is.
#[derive(Debug, Clone)]
pub struct DecodedToken {
    header: TokenHeader,
    claims: Claims,
    signature: String,
}

impl DecodedToken {
    pub fn header(&self) -> &TokenHeader {
        &self.header
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Raw signature segment, not decoded
    pub fn signature(&self) -> &str {
        &self.signature
    }
}

/// Token inspector
///
/// Configured once and reused; inspection is pure apart from reading the
/// clock, so a single instance can be shared across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Inspector {
    leeway: u64,
    missing_expiry: MissingExpiry,
}

impl Inspector {
    /// Inspector with exact comparisons and `exp` required
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> InspectorBuilder {
        InspectorBuilder::default()
    }

    pub fn leeway(&self) -> u64 {
        self.leeway
    }

    pub fn missing_expiry(&self) -> MissingExpiry {
        self.missing_expiry
    }

    /// Inspect a token against the current time
    pub fn inspect<'a>(&self, token: impl Into<Option<&'a str>>) -> Outcome {
        self.inspect_at(token, current_timestamp())
    }

    /// Inspect a token against an explicit `now` (epoch seconds)
    pub fn inspect_at<'a>(&self, token: impl Into<Option<&'a str>>, now: i64) -> Outcome {
        let outcome = match self.decode(token) {
            Ok(decoded) => evaluate(&decoded.claims, self.leeway, self.missing_expiry, now),
            Err(error) => Outcome::Malformed(error),
        };

        match &outcome {
            Outcome::Valid => {}
            Outcome::Expired { expired_at, now } => {
                tracing::debug!(
                    reason = outcome.reason(),
                    exp = expired_at,
                    now,
                    leeway = self.leeway,
                    "token rejected"
                );
            }
            Outcome::NotYetValid { issued_at, now } => {
                tracing::debug!(
                    reason = outcome.reason(),
                    iat = issued_at,
                    now,
                    leeway = self.leeway,
                    "token rejected"
                );
            }
            Outcome::MissingExpiry => {
                tracing::debug!(reason = outcome.reason(), "token rejected");
            }
            Outcome::Malformed(error) => {
                tracing::debug!(reason = outcome.reason(), %error, "token rejected");
            }
        }

        outcome
    }

    /// Structurally decode a token without looking at the clock
    ///
    /// Requires exactly three `.`-separated segments whose first two decode
    /// to JSON objects. The third segment is not inspected.
    pub fn decode<'a>(&self, token: impl Into<Option<&'a str>>) -> Result<DecodedToken> {
        let token = token.into().ok_or(Error::TokenMissing)?;
        if token.is_empty() {
            return Err(Error::TokenMissing);
        }

        if token.len() > MAX_TOKEN_LENGTH {
            return Err(Error::TokenTooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            });
        }

        let mut parts = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::FormatInvalid {
                parts: token.split('.').count(),
            });
        };

        let header_json = base64url::decode_string("header", header_b64, MAX_DECODED_HEADER_SIZE)?;
        let header = TokenHeader::from_json(&header_json)?;

        let payload_json =
            base64url::decode_string("payload", payload_b64, MAX_DECODED_PAYLOAD_SIZE)?;
        let claims = Claims::from_json(&payload_json)?;

        tracing::trace!(
            alg = header.algorithm(),
            exp = claims.expiration(),
            iat = claims.issued_at(),
            "token decoded"
        );

        Ok(DecodedToken {
            header,
            claims,
            signature: signature.to_string(),
        })
    }
}

/// Builder for [`Inspector`]
#[derive(Debug, Clone, Default)]
pub struct InspectorBuilder {
    leeway: u64,
    missing_expiry: MissingExpiry,
}

impl InspectorBuilder {
    /// Set clock skew tolerance
    ///
    /// # Security
    /// Leeway is limited to 300 seconds so it cannot effectively disable
    /// expiration checks. Larger values are rejected by [`build`](Self::build).
    pub fn leeway(mut self, seconds: u64) -> Self {
        self.leeway = seconds;
        self
    }

    /// Set the policy for tokens without `exp`
    pub fn missing_expiry(mut self, policy: MissingExpiry) -> Self {
        self.missing_expiry = policy;
        self
    }

    pub fn build(self) -> Result<Inspector> {
        validate_leeway(self.leeway)?;
        Ok(Inspector {
            leeway: self.leeway,
            missing_expiry: self.missing_expiry,
        })
    }
}
