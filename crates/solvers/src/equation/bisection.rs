//! Bisection method for bracketed roots.
//!
//! # Algorithm
//!
//! Bisection evaluates the midpoint of a bracket whose endpoints have opposite
//! signs, then keeps the half that still contains the sign change. The bracket
//! halves every iteration, so the method converges linearly but cannot lose
//! the root.
//!
//! The solver converges once the relative change between successive midpoints
//! drops below `eps` percent, or immediately when a midpoint lands exactly on
//! a root.
//!
//! # Observer Events
//!
//! One [`Event`] per midpoint, carrying the bracket after the update.

use rootfinder_core::{Function, Observer, Real};

use super::{
    Action, Config, Error, Event, Method, Solution, Status, bracket::validate_bracket,
    step::RelativeStep,
};

/// Default iteration budget: the square of the mantissa digits of `T`.
#[must_use]
pub fn default_max_iters<T: Real>() -> usize {
    T::digits().pow(2)
}

/// Finds a root of `f` inside `bracket` using bisection.
///
/// Observers see each midpoint and the bracket it leaves behind.
///
/// # Errors
///
/// Returns an error if the bracket is reversed, non-finite, or does not
/// enclose a sign change. See [`validate_bracket`](super::validate_bracket).
pub fn solve<T, F, Obs>(
    f: &F,
    bracket: [T; 2],
    config: &Config<T>,
    mut observer: Obs,
) -> Result<Solution<T>, Error<T>>
where
    T: Real,
    F: Function<T> + ?Sized,
    Obs: Observer<Event<T>, Action>,
{
    let [mut lower, mut upper] = bracket;
    let mut lower_residual = f.eval(lower);
    let upper_residual = f.eval(upper);
    validate_bracket(lower, upper, lower_residual, upper_residual)?;

    let eps = config.eps();
    let max_iters = config.budget(default_max_iters::<T>());
    let half = T::from_f64(0.5);

    let mut step = RelativeStep::new(eps);
    let mut x = lower;
    let mut residual = lower_residual;

    for iter in 1..=max_iters {
        let previous = x;
        x = half * (lower + upper);
        residual = f.eval(x);

        if !residual.is_finite() {
            log::debug!("bisection: non-finite residual {residual} at x = {x}");
            return Ok(Solution::new(
                Method::Bisection,
                Status::Diverged,
                x,
                residual,
                iter,
            ));
        }

        step.update(x, previous);

        let cond = lower_residual * residual;
        if cond < T::zero() {
            upper = x;
        } else if cond > T::zero() {
            lower = x;
            lower_residual = residual;
        } else {
            // One of the residuals is exactly zero.
            step.reset();
            if lower_residual.abs() < eps {
                x = lower;
                residual = lower_residual;
            }
        }

        log::trace!(
            "bisection: iter {iter}, x = {x}, f(x) = {residual}, error = {}",
            step.error()
        );

        let event = Event {
            method: Method::Bisection,
            iter,
            x,
            residual,
            bracket: Some([lower, upper]),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(
                Method::Bisection,
                Status::StoppedByObserver,
                x,
                residual,
                iter,
            ));
        }

        if step.is_below(eps) {
            return Ok(Solution::new(
                Method::Bisection,
                Status::Converged,
                x,
                residual,
                iter,
            ));
        }
    }

    log::debug!("bisection: no root found within {max_iters} iterations (eps = {eps})");
    Ok(Solution::new(
        Method::Bisection,
        Status::MaxIters,
        x,
        residual,
        max_iters,
    ))
}

/// Finds a root of `f` inside `bracket` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is invalid. See [`solve`].
pub fn solve_unobserved<T, F>(
    f: &F,
    bracket: [T; 2],
    config: &Config<T>,
) -> Result<Solution<T>, Error<T>>
where
    T: Real,
    F: Function<T> + ?Sized,
{
    solve(f, bracket, config, ())
}
