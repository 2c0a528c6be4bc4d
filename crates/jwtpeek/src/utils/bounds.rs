//! Bounds validation utilities

use crate::error::{Error, Result};
use crate::limits::MAX_LEEWAY_SECONDS;

/// Check the leeway against [`MAX_LEEWAY_SECONDS`]
pub(crate) fn validate_leeway(leeway_seconds: u64) -> Result<()> {
    if leeway_seconds > MAX_LEEWAY_SECONDS {
        return Err(Error::LeewayTooLarge {
            value: leeway_seconds,
            max: MAX_LEEWAY_SECONDS,
        });
    }
    Ok(())
}

/// Apply leeway to a timestamp with overflow protection
pub(crate) fn apply_leeway(timestamp: i64, leeway_seconds: u64, add: bool) -> Result<i64> {
    let leeway_i64 = i64::try_from(leeway_seconds).map_err(|_| Error::TimestampOverflow)?;
    if add {
        timestamp.checked_add(leeway_i64)
    } else {
        timestamp.checked_sub(leeway_i64)
    }
    .ok_or(Error::TimestampOverflow)
}
