//! Reference functions with known roots.
//!
//! Each function comes with a bracket for the two-point methods and a single
//! starting guess for Newton–Raphson.

use rootfinder_core::Real;

/// `|x| = e^(-x)`, with a simple root near 0.5671.
pub fn t1<T: Real>(x: T) -> T {
    x.abs() - (-x).exp()
}

/// `e^(-x²) = e^(-(x-3)²/3)`, with a simple root near 1.0981.
pub fn t2<T: Real>(x: T) -> T {
    let three = T::from_f64(3.0);
    let shifted = x - three;
    (-x * x).exp() - (-shifted * shifted / three).exp()
}

/// `x² = atan(x)`, with roots at 0 (a bracket endpoint) and near 0.8447.
pub fn t3<T: Real>(x: T) -> T {
    x * x - x.atan()
}

/// `(x-2)³ + 0.01(x-2)`, whose root at 2 is almost flat.
pub fn t4<T: Real>(x: T) -> T {
    let d = x - T::from_f64(2.0);
    d * d * d + T::from_f64(0.01) * d
}

/// A named benchmark function with its starting points.
#[derive(Debug, Clone, Copy)]
pub struct BenchProblem<T> {
    /// Short label used in tables and plot legends.
    pub name: &'static str,
    /// The function whose root is sought.
    pub function: fn(T) -> T,
    /// Interval for bisection, Ridder and Brent, and the two starting
    /// positions for secant.
    pub bracket: [T; 2],
    /// Starting guess for Newton–Raphson.
    pub guess: T,
}

/// Returns the four reference problems in the order `t1` to `t4`.
#[must_use]
pub fn standard_problems<T: Real>() -> [BenchProblem<T>; 4] {
    let n = T::from_f64;
    [
        BenchProblem {
            name: "t1",
            function: t1::<T>,
            bracket: [n(0.0), n(2.0)],
            guess: n(0.0),
        },
        BenchProblem {
            name: "t2",
            function: t2::<T>,
            bracket: [n(0.0), n(2.0)],
            guess: n(2.0),
        },
        BenchProblem {
            name: "t3",
            function: t3::<T>,
            bracket: [n(0.0), n(0.5)],
            guess: n(0.0),
        },
        BenchProblem {
            name: "t4",
            function: t4::<T>,
            bracket: [n(1.0), n(3.0)],
            guess: n(1.0),
        },
    ]
}
