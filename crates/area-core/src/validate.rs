//! Input checks shared by every shape

use crate::{AreaError, AreaResult};

/// Check that `value` is a usable length: finite and strictly positive.
///
/// Infinity and NaN are tested before the sign, since NaN never compares
/// `<= 0.0`.
pub(crate) fn length(param: &'static str, value: f64) -> AreaResult<f64> {
    if value.is_infinite() {
        tracing::debug!(param, value, "rejected infinite length");
        return Err(AreaError::out_of_range(param, "length must be finite"));
    }

    if value.is_nan() {
        tracing::debug!(param, "rejected NaN length");
        return Err(AreaError::invalid_argument(
            param,
            "length cannot be represented by a NaN value",
        ));
    }

    if value <= 0.0 {
        tracing::debug!(param, value, "rejected non-positive length");
        return Err(AreaError::out_of_range(param, "length must be positive"));
    }

    Ok(value)
}

/// Like [`length`], but zero is allowed.
pub(crate) fn non_negative(param: &'static str, value: f64) -> AreaResult<f64> {
    if value == 0.0 {
        return Ok(0.0);
    }
    length(param, value)
}
