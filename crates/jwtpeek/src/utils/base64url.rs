//! Base64 decoding for token segments
//!
//! Segments are normally Base64URL without padding (RFC 7515), but issuers in
//! the wild also emit padded or standard-alphabet segments. Both alphabets are
//! accepted, padding is optional, and the decoded size is bounded.

use crate::error::{Error, Result};
use base64::{
    Engine, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};

const LENIENT: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);
const STANDARD_LENIENT: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);

/// Decode a segment to bytes with maximum size limit
pub(crate) fn decode_bytes(segment: &'static str, input: &str, max_size: usize) -> Result<Vec<u8>> {
    // Both alphabets share 62 symbols; only '+' and '/' select the standard one
    let engine = if input.contains(['+', '/']) {
        &STANDARD_LENIENT
    } else {
        &URL_SAFE_LENIENT
    };

    // Reject oversized input before allocating (4 chars decode to at most 3 bytes)
    if input.len() / 4 * 3 > max_size {
        return Err(Error::SegmentTooLarge {
            segment,
            size: input.len() / 4 * 3,
            max: max_size,
        });
    }

    let result = engine
        .decode(input)
        .map_err(|e| Error::FormatInvalidBase64 {
            segment,
            reason: e.to_string(),
        })?;

    if result.len() > max_size {
        return Err(Error::SegmentTooLarge {
            segment,
            size: result.len(),
            max: max_size,
        });
    }

    Ok(result)
}

/// Decode a segment to a UTF-8 string with size limit
pub(crate) fn decode_string(segment: &'static str, input: &str, max_size: usize) -> Result<String> {
    decode_bytes(segment, input, max_size).and_then(|bytes| {
        String::from_utf8(bytes).map_err(|e| Error::FormatInvalidBase64 {
            segment,
            reason: format!("Invalid UTF-8: {e}"),
        })
    })
}
