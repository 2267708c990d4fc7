//! Solvers for scalar equations: finding an `x` where `f(x) = 0`.
//!
//! # Solvers
//!
//! Bracketing methods keep a sign change between two endpoints and cannot
//! lose the root once it is enclosed:
//!
//! - [`bisection`]: halves the bracket; slow but guaranteed
//! - [`ridder`]: exponential extrapolation inside the bracket
//! - [`brent`]: inverse quadratic extrapolation, falling back to
//!   [`secant`] and then [`bisection`] when it does not converge
//!
//! Open methods only need a starting point and may diverge:
//!
//! - [`secant`]: extrapolates from the two latest iterates
//! - [`newton_raphson`]: follows a finite-difference derivative
//!
//! # Outcomes
//!
//! Every solver returns `Result<Solution<T>, Error<T>>`. An `Err` means a
//! precondition was violated (reversed interval, no sign change, vanishing
//! derivative) or an internal invariant broke. Running out of iterations or
//! diverging is not an error: the returned [`Solution`] carries a [`Status`]
//! and [`Solution::value`] yields NaN for anything that did not converge.
//!
//! # Observers
//!
//! Each solver has a `solve` function that accepts an [`Observer`] receiving
//! one [`Event`] per new estimate, and a `solve_unobserved` convenience
//! wrapper. Observers can return [`Action::StopEarly`] to end the call.
//!
//! [`Observer`]: rootfinder_core::Observer

mod bracket;
mod config;
mod error;
mod event;
mod solution;
mod step;

pub mod bisection;
pub mod brent;
pub mod newton_raphson;
pub mod ridder;
pub mod secant;

pub use bracket::{Sign, validate_bracket, with_sign_of};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Action, Event, Method};
pub use solution::{Solution, Status};
