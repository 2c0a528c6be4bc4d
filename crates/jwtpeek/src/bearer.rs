//! `Authorization` header parsing

/// Extract the token from an `Authorization: Bearer <token>` value
///
/// The scheme is matched case-insensitively. Returns `None` for any other
/// scheme, a missing token, or trailing words after the token.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let mut words = header_value.split_whitespace();
    let scheme = words.next()?;
    let token = words.next()?;

    if !scheme.eq_ignore_ascii_case("bearer") || words.next().is_some() {
        return None;
    }

    Some(token)
}
