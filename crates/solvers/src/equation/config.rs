use rootfinder_core::Real;
use thiserror::Error;

/// Configuration shared by all solvers.
///
/// The meaning of `eps` depends on the method: a relative-step threshold in
/// percent for bisection and secant, the same plus an absolute residual bound
/// for Newton–Raphson and Brent, and an absolute step or bracket width for
/// Ridder.
///
/// Each method derives its iteration budget from the precision of `T`.
/// [`Config::with_max_iters`] overrides that budget.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config<T> {
    eps: T,
    max_iters: Option<usize>,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("eps must be finite and strictly positive")]
    Eps,
}

impl<T: Real> Default for Config<T> {
    /// Uses the square root of the machine epsilon as tolerance.
    fn default() -> Self {
        Self {
            eps: T::epsilon().sqrt(),
            max_iters: None,
        }
    }
}

impl<T: Real> Config<T> {
    /// Creates a config with the given tolerance and default budgets.
    ///
    /// # Errors
    ///
    /// Returns an error if `eps` is not finite or not strictly positive.
    pub fn new(eps: T) -> Result<Self, ConfigError> {
        if !eps.is_finite() || eps <= T::zero() {
            return Err(ConfigError::Eps);
        }
        Ok(Self {
            eps,
            max_iters: None,
        })
    }

    /// Overrides the method's default iteration budget.
    #[must_use]
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = Some(max_iters);
        self
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn eps(&self) -> T {
        self.eps
    }

    /// Returns the iteration budget override, if any.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }

    /// Returns the same tolerance with the default budgets restored.
    #[must_use]
    pub(crate) fn without_budget(&self) -> Self {
        Self {
            eps: self.eps,
            max_iters: None,
        }
    }

    /// Returns the budget to use given a method's default.
    pub(crate) fn budget(&self, default: usize) -> usize {
        self.max_iters.unwrap_or(default)
    }
}
