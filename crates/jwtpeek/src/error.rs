//! Errors for jwtpeek

use thiserror::Error;

/// JWTPeek Errors
///
/// The boolean predicates never surface these; they are reported through
/// [`Outcome::Malformed`](crate::Outcome::Malformed) and
/// [`Inspector::decode`](crate::Inspector::decode) for diagnostics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("No token provided")]
    TokenMissing,

    #[error("Token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid token format: expected three parts separated by '.', found {parts}")]
    FormatInvalid { parts: usize },

    #[error("Base64 decoding of {segment} failed: {reason}")]
    FormatInvalidBase64 {
        segment: &'static str,
        reason: String,
    },

    #[error("JSON parsing of {segment} failed")]
    FormatInvalidJson { segment: &'static str },

    #[error("Decoded {segment} is not a JSON object")]
    SegmentNotObject { segment: &'static str },

    #[error("Decoded {segment} too large: {size} bytes (maximum: {max} bytes)")]
    SegmentTooLarge {
        segment: &'static str,
        size: usize,
        max: usize,
    },

    #[error("Claim '{claim}' is not a finite numeric date")]
    ClaimInvalidType { claim: &'static str },

    // ============================================================================
    // Token Errors
    // ============================================================================
    #[error("Token expired at {expired_at} (now: {now}, leeway: {leeway}s)")]
    TokenExpired {
        expired_at: i64,
        now: i64,
        leeway: u64,
    },

    #[error("Token issued in future at {issued_at} (now: {now}, leeway: {leeway}s)")]
    TokenNotYetValid {
        issued_at: i64,
        now: i64,
        leeway: u64,
    },

    #[error("Token has no 'exp' claim")]
    TokenMissingExpiry,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Leeway too large: {value} seconds (maximum: {max} seconds)")]
    LeewayTooLarge { value: u64, max: u64 },

    #[error("Integer overflow in timestamp arithmetic")]
    TimestampOverflow,
}

/// Result type alias for jwtpeek operations
pub type Result<T> = std::result::Result<T, Error>;
