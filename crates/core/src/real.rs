use std::fmt::{Debug, Display};

use num_traits::Float;

/// A floating-point precision that solvers can run at.
///
/// On top of [`Float`], a `Real` exposes the number of mantissa digits of the
/// type, which solvers use to size their iteration budgets.
pub trait Real: Float + Debug + Display + Send + Sync + 'static {
    /// Number of radix-2 digits in the mantissa (including the implicit bit).
    const DIGITS: u32;

    /// Converts a literal constant into this precision.
    fn from_f64(value: f64) -> Self;

    /// Returns [`Self::DIGITS`] as a `usize`.
    #[must_use]
    fn digits() -> usize {
        Self::DIGITS as usize
    }
}

impl Real for f32 {
    const DIGITS: u32 = f32::MANTISSA_DIGITS;

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Real for f64 {
    const DIGITS: u32 = f64::MANTISSA_DIGITS;

    fn from_f64(value: f64) -> Self {
        value
    }
}
