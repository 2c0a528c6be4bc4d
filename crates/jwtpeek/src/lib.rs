//! # jwtpeek - Fail-Closed Token Inspection
//!
//! **jwtpeek** answers two questions about a compact token
//! (`header.payload.signature`) before a client spends a network round-trip
//! on it: is it well-formed, and is it usable right now?
//!
//! It does **not** verify signatures. A token that passes inspection is only
//! *plausibly* valid; the issuing server remains the authority. What
//! inspection does guarantee is the converse: a token that fails is never
//! worth sending.
//!
//! ## Quick Start
//!
//! ```ignore
//! if jwtpeek::is_token_expired(stored_token.as_deref()) {
//!     redirect_to_login();
//! }
//! ```
//!
//! For diagnostics, [`inspect`] returns a tagged [`Outcome`]:
//!
//! ```ignore
//! match jwtpeek::inspect(token) {
//!     Outcome::Valid => {}
//!     Outcome::Expired { expired_at, .. } => refresh(expired_at),
//!     other => tracing::warn!(reason = other.reason(), "dropping session"),
//! }
//! ```
//!
//! ## Fail-Closed
//!
//! Every failure (absent input, wrong segment count, bad base64, bad JSON,
//! non-object segments, non-numeric `exp`/`iat`) resolves to "invalid" and
//! "expired". Nothing panics and the predicates never return errors.
//!
//! ## Temporal Rules
//!
//! - expired when `now >= exp`
//! - not yet valid when `iat` is present, non-zero, and `now < iat`
//! - a payload without `exp` is rejected unless the inspector is built with
//!   [`MissingExpiry::NeverExpires`]
//!
//! A custom [`Inspector`] adds leeway (at most 300 seconds) to both checks.
//!
//! Nothing is cached; call again before every security-relevant decision.

mod bearer;
mod error;

// Internal modules
pub(crate) mod claims;
pub(crate) mod header;
pub(crate) mod inspector;
pub(crate) mod limits;
pub(crate) mod outcome;
pub(crate) mod utils;

// Public Interface
pub use bearer::bearer_token;
pub use claims::{Claims, MissingExpiry};
pub use error::{Error, Result};
pub use header::TokenHeader;
pub use inspector::{DecodedToken, Inspector, InspectorBuilder};
pub use outcome::Outcome;

/// Whether `token` has three segments with decodable JSON-object header and
/// payload
///
/// Structural only: the signature segment and the clock are not consulted.
pub fn is_valid_jwt<'a>(token: impl Into<Option<&'a str>>) -> bool {
    Inspector::new().decode(token).is_ok()
}

/// Whether `token` must be treated as expired right now
///
/// `true` for absent, empty or malformed input, for `now >= exp`, for a
/// future `iat`, and for a payload without `exp`.
pub fn is_token_expired<'a>(token: impl Into<Option<&'a str>>) -> bool {
    !inspect(token).is_valid()
}

/// Inspect `token` against the current time with the default [`Inspector`]
pub fn inspect<'a>(token: impl Into<Option<&'a str>>) -> Outcome {
    Inspector::new().inspect(token)
}
