//! Benchmarks for the rootfinder solvers.
//!
//! The benchmark counts how many function evaluations each method needs to
//! reach a range of tolerances on a fixed set of reference problems.
//!
//! # Modules
//!
//! - [`CallCounter`]: wraps a function and counts its evaluations
//! - [`standard_problems`]: the four reference functions with their brackets
//!   and starting guesses
//! - [`Tolerances`]: a geometric sequence of tolerances
//! - [`sweep`]: runs a method across problems and tolerances
//!
//! # Features
//!
//! - `plot`: enables the [`plot`] module for viewing sweeps and solver
//!   convergence in an egui window. This feature adds dependencies on
//!   `eframe` and `egui_plot`.

mod counter;
mod functions;
mod sweep;
mod tolerances;

#[cfg(feature = "plot")]
pub mod plot;

pub use counter::CallCounter;
pub use functions::{BenchProblem, standard_problems, t1, t2, t3, t4};
pub use sweep::{Row, Sample, Series, measure, run, series, sweep};
pub use tolerances::{ToleranceError, Tolerances};
