use thiserror::Error;

use super::{ConfigError, Method};

/// Errors that can occur while finding a root.
///
/// Preconditions are checked before iterating and reported immediately.
/// Running out of iterations is not an error by itself; it becomes one only
/// through [`Solution::into_root`](super::Solution::into_root).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error<T> {
    #[error("interval reversed: lower bound {lower} exceeds upper bound {upper}")]
    InvalidInterval { lower: T, upper: T },

    #[error("bracket contains non-finite value: {value}")]
    NonFiniteBracket { value: T },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: T, residual: T },

    #[error("no sign change in bracket: f({lower})={lower_residual}, f({upper})={upper_residual}")]
    NoSignChange {
        lower: T,
        upper: T,
        lower_residual: T,
        upper_residual: T,
    },

    #[error("root must be bracketed: f({lower})={lower_residual}, f({upper})={upper_residual}")]
    NotBracketed {
        lower: T,
        upper: T,
        lower_residual: T,
        upper_residual: T,
    },

    #[error("derivative vanishes at x = {x}: f'(x) ≈ {derivative}")]
    DerivativeVanishing { x: T, derivative: T },

    #[error("{method} exceeded {iters} iterations without converging")]
    MaxIterationsExceeded { method: Method, iters: usize },

    #[error("{method} diverged at x = {x}")]
    Diverged { method: Method, x: T },

    #[error("{method} stopped by observer after {iters} iterations")]
    StoppedByObserver { method: Method, iters: usize },

    #[error("bracket invariant broken at x = {x}")]
    BrokenInvariant { x: T },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
