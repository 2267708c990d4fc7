//! Newton–Raphson method with a finite-difference derivative.
//!
//! # Algorithm
//!
//! Each iteration follows the tangent at the current iterate down to zero:
//!
//! ```text
//! x <- x - f(x) / f'(x)
//! ```
//!
//! The derivative is never supplied by the caller. It is approximated by a
//! central difference with the fixed step [`DIFFERENCE_STEP`], so only `f`
//! is required.
//!
//! The solver converges once the relative step drops below `sqrt(eps)` percent
//! *and* the residual magnitude drops below `eps`.
//!
//! # Limitations
//!
//! - **Fixed difference step**: the derivative estimate is exact only for
//!   polynomials up to degree two. Near a flat root the estimate may be far
//!   off, which slows convergence to linear.
//! - **Vanishing derivative**: a derivative estimate smaller than `eps` in
//!   magnitude aborts with [`Error::DerivativeVanishing`].
//!
//! # Observer Events
//!
//! One [`Event`] per new iterate, without a bracket.

use rootfinder_core::{Function, Observer, Real};

use super::{Action, Config, Error, Event, Method, Solution, Status, step::RelativeStep};

/// Step `h` of the central difference `(f(x + h) - f(x - h)) / 2h`.
pub const DIFFERENCE_STEP: f64 = 0.1;

/// Default iteration budget: the cube of the mantissa digits of `T`.
#[must_use]
pub fn default_max_iters<T: Real>() -> usize {
    T::digits().pow(3)
}

/// Approximates `f'(x)` with a central difference of step `h`.
fn derivative<T, F>(f: &F, x: T, h: T) -> T
where
    T: Real,
    F: Function<T> + ?Sized,
{
    (f.eval(x + h) - f.eval(x - h)) / (h + h)
}

/// Finds a root of `f` starting from the guess `x0`.
///
/// # Errors
///
/// Returns [`Error::DerivativeVanishing`] if the derivative estimate at an
/// iterate is smaller than `eps` in magnitude.
pub fn solve<T, F, Obs>(
    f: &F,
    x0: T,
    config: &Config<T>,
    mut observer: Obs,
) -> Result<Solution<T>, Error<T>>
where
    T: Real,
    F: Function<T> + ?Sized,
    Obs: Observer<Event<T>, Action>,
{
    let eps = config.eps();
    let residual_tol = eps;
    let step_tol = eps.sqrt();
    let max_iters = config.budget(default_max_iters::<T>());
    let h = T::from_f64(DIFFERENCE_STEP);

    let mut x = x0;
    let mut residual = f.eval(x);
    let mut slope = derivative(f, x, h);

    let mut step = RelativeStep::new(eps);

    for iter in 1..=max_iters {
        if slope.abs() < eps {
            return Err(Error::DerivativeVanishing {
                x,
                derivative: slope,
            });
        }

        let previous = x;
        x = x - residual / slope;
        residual = f.eval(x);
        slope = derivative(f, x, h);

        if !x.is_finite() || !residual.is_finite() {
            log::debug!("newton-raphson: diverged to x = {x}, f(x) = {residual}");
            return Ok(Solution::new(
                Method::NewtonRaphson,
                Status::Diverged,
                x,
                residual,
                iter,
            ));
        }

        step.update(x, previous);
        if residual == T::zero() {
            step.reset();
        }

        log::trace!(
            "newton-raphson: iter {iter}, x = {x}, f(x) = {residual}, f'(x) ~ {slope}, error = {}",
            step.error()
        );

        let event = Event {
            method: Method::NewtonRaphson,
            iter,
            x,
            residual,
            bracket: None,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(
                Method::NewtonRaphson,
                Status::StoppedByObserver,
                x,
                residual,
                iter,
            ));
        }

        if step.is_below(step_tol) && residual.abs() < residual_tol {
            return Ok(Solution::new(
                Method::NewtonRaphson,
                Status::Converged,
                x,
                residual,
                iter,
            ));
        }
    }

    log::debug!("newton-raphson: no root found within {max_iters} iterations (eps = {eps})");
    Ok(Solution::new(
        Method::NewtonRaphson,
        Status::MaxIters,
        x,
        residual,
        max_iters,
    ))
}

/// Finds a root of `f` starting from `x0` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<T, F>(f: &F, x0: T, config: &Config<T>) -> Result<Solution<T>, Error<T>>
where
    T: Real,
    F: Function<T> + ?Sized,
{
    solve(f, x0, config, ())
}
