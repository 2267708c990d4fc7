//! Core traits and types for scalar root finding.
//!
//! This crate defines the shared abstractions that solvers and benchmark
//! tooling build on:
//!
//! - [`Real`]: the floating-point precision a solver runs at
//! - [`Function`]: a pure callable `T → T` whose zero is being sought
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;
mod real;

pub use function::Function;
pub use observer::Observer;
pub use real::Real;
