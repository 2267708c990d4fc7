use rootfinder_core::Real;

use super::{Error, Method};

/// Indicates how a solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Converged according to the method's convergence test.
    Converged,
    /// Reached the iteration budget without converging.
    MaxIters,
    /// The iteration produced a non-finite or undefined step.
    Diverged,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root-finding call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution<T> {
    /// Method that produced the final estimate.
    pub method: Method,
    /// Final solver status.
    pub status: Status,
    /// Latest root estimate.
    pub x: T,
    /// Function value at `x`.
    pub residual: T,
    /// Iterations performed (including any fallback iterations).
    pub iters: usize,
}

impl<T: Real> Solution<T> {
    pub(super) fn new(method: Method, status: Status, x: T, residual: T, iters: usize) -> Self {
        Self {
            method,
            status,
            x,
            residual,
            iters,
        }
    }

    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the root if the solver converged.
    #[must_use]
    pub fn root(&self) -> Option<T> {
        self.is_converged().then_some(self.x)
    }

    /// Returns the root, or NaN if no root was found.
    #[must_use]
    pub fn value(&self) -> T {
        self.root().unwrap_or_else(T::nan)
    }

    /// Returns the root, turning any other outcome into an error.
    ///
    /// # Errors
    ///
    /// - [`Error::MaxIterationsExceeded`] if the budget ran out.
    /// - [`Error::Diverged`] if the iteration diverged.
    /// - [`Error::StoppedByObserver`] if an observer stopped the solver.
    pub fn into_root(self) -> Result<T, Error<T>> {
        match self.status {
            Status::Converged => Ok(self.x),
            Status::MaxIters => Err(Error::MaxIterationsExceeded {
                method: self.method,
                iters: self.iters,
            }),
            Status::Diverged => Err(Error::Diverged {
                method: self.method,
                x: self.x,
            }),
            Status::StoppedByObserver => Err(Error::StoppedByObserver {
                method: self.method,
                iters: self.iters,
            }),
        }
    }
}
