use std::fmt;

use rootfinder_core::Real;

/// Identifies which root-finding method produced an event or solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    Bisection,
    Secant,
    NewtonRaphson,
    Ridder,
    Brent,
}

impl Method {
    /// All methods, in order of increasing sophistication.
    pub const ALL: [Method; 5] = [
        Method::Bisection,
        Method::Secant,
        Method::NewtonRaphson,
        Method::Ridder,
        Method::Brent,
    ];

    /// Returns true for methods that keep a sign-changing bracket, so their
    /// events carry one.
    ///
    /// Brent checks its starting bracket but interpolates freely afterwards.
    #[must_use]
    pub fn is_bracketing(self) -> bool {
        matches!(self, Method::Bisection | Method::Ridder)
    }

    /// Returns the lowercase name of the method.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Method::Bisection => "bisection",
            Method::Secant => "secant",
            Method::NewtonRaphson => "newton-raphson",
            Method::Ridder => "ridder",
            Method::Brent => "brent",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Control actions supported by the solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the latest estimate.
    StopEarly,
}

/// Iteration event emitted once per new root estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<T> {
    /// Method that produced the estimate.
    ///
    /// During a Brent fallback this is the fallback method.
    pub method: Method,
    /// Iteration counter (1-based within the emitting method).
    pub iter: usize,
    /// The new root estimate.
    pub x: T,
    /// Function value at `x`.
    pub residual: T,
    /// Current bracket after the update, for bracketing methods.
    pub bracket: Option<[T; 2]>,
}

impl<T: Real> Event<T> {
    /// Returns the current bracket width, if the method keeps a bracket.
    #[must_use]
    pub fn width(&self) -> Option<T> {
        self.bracket.map(|[lower, upper]| (upper - lower).abs())
    }
}
