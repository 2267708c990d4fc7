use rootfinder_core::Real;

use super::Error;

/// The sign of a residual for bracket logic.
///
/// Zero is its own sign: an exactly-zero residual neither matches nor opposes
/// a positive or negative one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Residual is strictly positive.
    Positive,
    /// Residual is strictly negative.
    Negative,
    /// Residual is exactly zero (either signed zero).
    Zero,
}

impl Sign {
    /// Returns the sign of a residual value.
    ///
    /// NaN has no sign and maps to [`Sign::Zero`]; callers reject
    /// non-finite residuals before asking for their sign.
    #[must_use]
    pub fn of<T: Real>(value: T) -> Self {
        if value > T::zero() {
            Sign::Positive
        } else if value < T::zero() {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    /// Returns true if one sign is positive and the other negative.
    #[must_use]
    pub fn opposes(self, other: Sign) -> bool {
        matches!(
            (self, other),
            (Sign::Positive, Sign::Negative) | (Sign::Negative, Sign::Positive)
        )
    }
}

/// Returns the magnitude of `magnitude` carrying the sign of `sign`.
///
/// A non-negative `sign` (including `-0.0`) counts as positive.
#[must_use]
pub fn with_sign_of<T: Real>(magnitude: T, sign: T) -> T {
    if sign >= T::zero() {
        magnitude.abs()
    } else {
        -magnitude.abs()
    }
}

/// Checks that `[lower, upper]` can seed a bracketing solver.
///
/// The residuals are the function values at the endpoints. An exactly-zero
/// residual is accepted on either side, so callers that want to return a
/// root sitting on an endpoint must check for it themselves.
///
/// # Errors
///
/// - [`Error::NonFiniteBracket`] if an endpoint is NaN or infinite.
/// - [`Error::InvalidInterval`] if `lower > upper`.
/// - [`Error::NonFiniteResidual`] if an endpoint residual is NaN or infinite.
/// - [`Error::NoSignChange`] if both residuals are strictly positive or both
///   strictly negative.
pub fn validate_bracket<T: Real>(
    lower: T,
    upper: T,
    lower_residual: T,
    upper_residual: T,
) -> Result<(), Error<T>> {
    for value in [lower, upper] {
        if !value.is_finite() {
            return Err(Error::NonFiniteBracket { value });
        }
    }

    if lower > upper {
        return Err(Error::InvalidInterval { lower, upper });
    }

    for (x, residual) in [(lower, lower_residual), (upper, upper_residual)] {
        if !residual.is_finite() {
            return Err(Error::NonFiniteResidual { x, residual });
        }
    }

    let lower_sign = Sign::of(lower_residual);
    if lower_sign != Sign::Zero && lower_sign == Sign::of(upper_residual) {
        return Err(Error::NoSignChange {
            lower,
            upper,
            lower_residual,
            upper_residual,
        });
    }

    Ok(())
}
