//! Evaluation counts of a solver across a range of tolerances.

use rootfinder_core::{Function, Real};
use rootfinder_solvers::equation::{
    Config, ConfigError, Error, Method, Solution, bisection, brent, newton_raphson, ridder, secant,
};

use crate::{BenchProblem, CallCounter, Tolerances};

/// One solve of one problem at one tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<T> {
    /// Name of the problem that was solved.
    pub problem: &'static str,
    /// Number of function evaluations the solve used.
    pub evaluations: usize,
    /// What the solver returned.
    pub outcome: Result<Solution<T>, Error<T>>,
}

impl<T: Real> Sample<T> {
    /// Returns the root found, or NaN for an error or a non-converged solve.
    #[must_use]
    pub fn root(&self) -> T {
        match &self.outcome {
            Ok(solution) => solution.value(),
            Err(_) => T::nan(),
        }
    }
}

/// All samples for one tolerance, in problem order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row<T> {
    pub eps: T,
    pub samples: Vec<Sample<T>>,
}

/// Evaluation counts of one problem as `(eps, evaluations)` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

/// Solves `problem` with `method`, evaluating `f` in place of the problem's
/// own function.
///
/// Bisection and Brent use the bracket as an interval, secant and Ridder use
/// its endpoints as their two starting positions, and Newton–Raphson starts
/// from the guess.
///
/// # Errors
///
/// Forwards the solver's precondition errors.
pub fn run<T, F>(
    method: Method,
    f: &F,
    problem: &BenchProblem<T>,
    config: &Config<T>,
) -> Result<Solution<T>, Error<T>>
where
    T: Real,
    F: Function<T> + ?Sized,
{
    let [a, b] = problem.bracket;
    match method {
        Method::Bisection => bisection::solve_unobserved(f, [a, b], config),
        Method::Secant => secant::solve_unobserved(f, a, b, config),
        Method::NewtonRaphson => newton_raphson::solve_unobserved(f, problem.guess, config),
        Method::Ridder => ridder::solve_unobserved(f, a, b, config),
        Method::Brent => brent::solve_unobserved(f, [a, b], config),
    }
}

/// Solves `problem` once and counts the evaluations it took.
pub fn measure<T: Real>(method: Method, problem: &BenchProblem<T>, config: &Config<T>) -> Sample<T> {
    let counter = CallCounter::new(problem.function);
    let outcome = run(method, &counter, problem, config);
    Sample {
        problem: problem.name,
        evaluations: counter.count(),
        outcome,
    }
}

/// Runs `method` on every problem at every tolerance.
///
/// # Errors
///
/// Returns a [`ConfigError`] if a tolerance cannot configure a solver.
pub fn sweep<T: Real>(
    method: Method,
    problems: &[BenchProblem<T>],
    tolerances: Tolerances<T>,
) -> Result<Vec<Row<T>>, ConfigError> {
    tolerances
        .map(|eps| -> Result<Row<T>, ConfigError> {
            let config = Config::new(eps)?;
            let samples: Vec<_> = problems
                .iter()
                .map(|problem| measure(method, problem, &config))
                .collect();

            log::debug!(
                "{method}: eps = {eps}, evaluations = {:?}",
                samples.iter().map(|s| s.evaluations).collect::<Vec<_>>()
            );
            for sample in samples.iter().filter(|s| s.outcome.is_err()) {
                log::debug!("{method}: {} failed: {:?}", sample.problem, sample.outcome);
            }

            Ok(Row { eps, samples })
        })
        .collect()
}

/// Regroups sweep rows into one series per problem.
///
/// The problems are taken from the first row; rows are expected to share the
/// same problem order, as [`sweep`] produces them.
#[must_use]
pub fn series<T: Real>(rows: &[Row<T>]) -> Vec<Series> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };

    first
        .samples
        .iter()
        .enumerate()
        .map(|(i, sample)| Series {
            name: sample.problem.to_owned(),
            points: rows
                .iter()
                .filter_map(|row| {
                    let eps = row.eps.to_f64()?;
                    let evaluations = row.samples.get(i)?.evaluations;
                    Some([eps, evaluations as f64])
                })
                .collect(),
        })
        .collect()
}
