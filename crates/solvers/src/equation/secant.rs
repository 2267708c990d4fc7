//! Secant method for roots near two starting points.
//!
//! # Algorithm
//!
//! The secant method replaces the derivative in Newton's method by the slope
//! through the two latest iterates:
//!
//! ```text
//! dx = (x_prev - x) * f(x) / (f(x) - f(x_prev))
//! ```
//!
//! It needs no bracket and converges superlinearly near a simple root, but it
//! can wander off or stall when the two residuals coincide.
//!
//! # Limitations
//!
//! - **No bracket**: the starting points need not enclose a sign change, and
//!   the iterates may leave any interval.
//! - **Flat secants**: when `f(x) == f(x_prev)` exactly, no step can be
//!   computed and the solver reports [`Status::Diverged`] (unless `f(x)` is
//!   already zero).
//!
//! # Observer Events
//!
//! One [`Event`] per new iterate, without a bracket.

use rootfinder_core::{Function, Observer, Real};

use super::{Action, Config, Error, Event, Method, Solution, Status, step::RelativeStep};

/// Default iteration budget: the mantissa digits of `T`.
#[must_use]
pub fn default_max_iters<T: Real>() -> usize {
    T::digits()
}

/// Finds a root of `f` starting from the positions `x0` and `x1`.
///
/// The solver converges once the relative change between successive iterates
/// drops below `eps` percent.
///
/// # Errors
///
/// The secant method has no preconditions; the `Result` keeps the signature
/// uniform with the bracketing solvers. Non-convergence is reported through
/// [`Solution::status`].
pub fn solve<T, F, Obs>(
    f: &F,
    x0: T,
    x1: T,
    config: &Config<T>,
    mut observer: Obs,
) -> Result<Solution<T>, Error<T>>
where
    T: Real,
    F: Function<T> + ?Sized,
    Obs: Observer<Event<T>, Action>,
{
    let eps = config.eps();
    let max_iters = config.budget(default_max_iters::<T>());

    let mut x = x0;
    let mut x_prev = x1;
    let mut residual = f.eval(x);
    let mut residual_prev = f.eval(x_prev);

    let mut step = RelativeStep::new(eps);

    for iter in 1..=max_iters {
        let denominator = residual - residual_prev;
        if denominator == T::zero() {
            let status = if residual == T::zero() {
                Status::Converged
            } else {
                log::debug!("secant: flat secant at x = {x}, f(x) = {residual}");
                Status::Diverged
            };
            return Ok(Solution::new(Method::Secant, status, x, residual, iter - 1));
        }

        let dx = (x_prev - x) * residual / denominator;
        x_prev = x;
        residual_prev = residual;
        x = x + dx;
        residual = f.eval(x);

        if !x.is_finite() || !residual.is_finite() {
            log::debug!("secant: diverged to x = {x}, f(x) = {residual}");
            return Ok(Solution::new(
                Method::Secant,
                Status::Diverged,
                x,
                residual,
                iter,
            ));
        }

        step.update(x, x_prev);
        if residual == T::zero() {
            step.reset();
        }

        log::trace!(
            "secant: iter {iter}, x = {x}, f(x) = {residual}, error = {}",
            step.error()
        );

        let event = Event {
            method: Method::Secant,
            iter,
            x,
            residual,
            bracket: None,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(
                Method::Secant,
                Status::StoppedByObserver,
                x,
                residual,
                iter,
            ));
        }

        if step.is_below(eps) {
            return Ok(Solution::new(
                Method::Secant,
                Status::Converged,
                x,
                residual,
                iter,
            ));
        }
    }

    log::debug!("secant: no root found within {max_iters} iterations (eps = {eps})");
    Ok(Solution::new(
        Method::Secant,
        Status::MaxIters,
        x,
        residual,
        max_iters,
    ))
}

/// Finds a root of `f` starting from `x0` and `x1` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<T, F>(
    f: &F,
    x0: T,
    x1: T,
    config: &Config<T>,
) -> Result<Solution<T>, Error<T>>
where
    T: Real,
    F: Function<T> + ?Sized,
{
    solve(f, x0, x1, config, ())
}
