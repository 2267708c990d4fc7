//! Root finders for scalar equations.
//!
//! Every solver in [`equation`] looks for an `x` where a [`Function`] crosses
//! zero, to a caller-specified tolerance, at any [`Real`] precision.
//!
//! [`Function`]: rootfinder_core::Function
//! [`Real`]: rootfinder_core::Real

pub mod equation;
