//! Hybrid inverse-interpolation method with secant and bisection fallbacks.
//!
//! # Algorithm
//!
//! The solver keeps three points `(x1, y1)`, `(x2, y2)`, `(x3, y3)`, seeded
//! with the lower endpoint, the midpoint and the upper endpoint of the bracket.
//! Each iteration fits the Lagrange polynomial through the points with `x` as
//! a function of `y` and evaluates it at `y = 0`:
//!
//! ```text
//! xN = x1*y2*y3 / ((y1-y2)(y1-y3))
//!    + x2*y1*y3 / ((y2-y1)(y2-y3))
//!    + x3*y1*y2 / ((y3-y1)(y3-y2))
//! ```
//!
//! The oldest point is dropped and `xN` becomes the newest. The solver
//! converges once the relative step drops below `eps` percent *and* the
//! residual magnitude drops below `eps`.
//!
//! # Fallbacks
//!
//! Inverse interpolation is fast but unguarded. When its budget runs out, or
//! when the fit degenerates to a non-finite point, the solver retries on the
//! initial bracket with [`secant`] and then with [`bisection`], each with
//! its own default budget. The first converged result wins. If every stage
//! fails, the bisection result is returned as is.
//!
//! # Observer Events
//!
//! One [`Event`] per interpolated point, without a bracket. Fallback stages
//! forward their own events to the same observer, and a stop request from
//! any stage ends the whole solve.

use rootfinder_core::{Function, Observer, Real};

use super::{
    Action, Config, Error, Event, Method, Solution, Status, bisection, bracket::validate_bracket,
    secant, step::RelativeStep,
};

/// Default iteration budget of the interpolation stage: the square of the
/// mantissa digits of `T`.
#[must_use]
pub fn default_max_iters<T: Real>() -> usize {
    T::digits().pow(2)
}

/// Evaluates the inverse Lagrange interpolant through three points at `y = 0`.
fn inverse_interpolation<T: Real>([x1, x2, x3]: [T; 3], [y1, y2, y3]: [T; 3]) -> T {
    x1 * y2 * y3 / ((y1 - y2) * (y1 - y3))
        + x2 * y1 * y3 / ((y2 - y1) * (y2 - y3))
        + x3 * y1 * y2 / ((y3 - y1) * (y3 - y2))
}

/// Finds a root of `f` inside `bracket`, falling back to simpler methods if
/// inverse interpolation does not converge.
///
/// The returned [`Solution::method`] names the stage that produced the
/// result, and [`Solution::iters`] counts the iterations of every stage run.
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
    let [lower, upper] = bracket;
    let lower_residual = f.eval(lower);
    let upper_residual = f.eval(upper);
    validate_bracket(lower, upper, lower_residual, upper_residual)?;

    let eps = config.eps();
    let max_iters = config.budget(default_max_iters::<T>());

    let mid = T::from_f64(0.5) * (lower + upper);
    let mut xs = [lower, mid, upper];
    let mut ys = [lower_residual, f.eval(mid), upper_residual];

    let mut step = RelativeStep::new(eps);
    let mut spent = max_iters;

    for iter in 1..=max_iters {
        let x = inverse_interpolation(xs, ys);
        if !x.is_finite() {
            log::debug!("brent: interpolation degenerated to {x} on iter {iter}");
            spent = iter - 1;
            break;
        }

        step.update(x, xs[2]);
        let residual = f.eval(x);
        xs = [xs[1], xs[2], x];
        ys = [ys[1], ys[2], residual];

        if !residual.is_finite() {
            log::debug!("brent: non-finite residual {residual} at x = {x}");
            spent = iter;
            break;
        }

        if residual == T::zero() {
            step.reset();
        }

        log::trace!(
            "brent: iter {iter}, x = {x}, f(x) = {residual}, error = {}",
            step.error()
        );

        let event = Event {
            method: Method::Brent,
            iter,
            x,
            residual,
            bracket: None,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(
                Method::Brent,
                Status::StoppedByObserver,
                x,
                residual,
                iter,
            ));
        }

        if step.is_below(eps) && residual.abs() < eps {
            return Ok(Solution::new(
                Method::Brent,
                Status::Converged,
                x,
                residual,
                iter,
            ));
        }
    }

    log::debug!("brent: interpolation did not converge, falling back to secant");
    let fallback = config.without_budget();

    let solution = secant::solve(f, lower, upper, &fallback, |event: &Event<T>| {
        observer.observe(event)
    })?;
    spent += solution.iters;
    if matches!(
        solution.status,
        Status::Converged | Status::StoppedByObserver
    ) {
        return Ok(Solution {
            iters: spent,
            ..solution
        });
    }

    log::debug!(
        "brent: secant fallback ended with {:?}, falling back to bisection",
        solution.status
    );
    let solution = bisection::solve(f, bracket, &fallback, |event: &Event<T>| {
        observer.observe(event)
    })?;
    Ok(Solution {
        iters: spent + solution.iters,
        ..solution
    })
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

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn config(eps: f64) -> Config<f64> {
        Config::new(eps).expect("valid eps")
    }

    fn step(x: f64) -> f64 {
        if x < 0.3 { -1.0 } else { 1.0 }
    }

    #[test]
    fn interpolation_reproduces_a_line() {
        let x = inverse_interpolation([0.0, 1.0, 2.0], [-1.0, 1.0, 3.0]);

        assert_relative_eq!(x, 0.5, epsilon = 1e-15);
    }

    #[test]
    fn converges_without_fallback() {
        let f = |x: f64| x.abs() - (-x).exp();

        let solution = solve_unobserved(&f, [0.0, 2.0], &config(1e-7)).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.method, Method::Brent);
        assert_relative_eq!(solution.x, 0.567_143_290_409_784, epsilon = 1e-6);
    }

    #[test]
    fn root_on_lower_endpoint() {
        let f = |x: f64| x * x - x.atan();

        let solution = solve_unobserved(&f, [0.0, 0.5], &config(1e-6)).expect("should solve");

        assert!(solution.is_converged());
        assert_eq!(solution.method, Method::Brent);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 0.0);
    }

    #[test]
    fn errors_on_reversed_interval() {
        let f = |x: f64| x - 1.0;

        let result = solve_unobserved(&f, [2.0, 0.0], &config(1e-6));

        assert!(matches!(result, Err(Error::InvalidInterval { .. })));
    }

    #[test]
    fn exhausted_interpolation_falls_back_to_secant() {
        let f = |x: f64| x * x - 2.0;

        let config = config(1e-9).with_max_iters(1);
        let direct = secant::solve_unobserved(&f, 0.0, 2.0, &config.without_budget())
            .expect("no preconditions");

        let solution = solve_unobserved(&f, [0.0, 2.0], &config).expect("should solve");

        assert!(solution.is_converged());
        assert_eq!(solution.method, Method::Secant);
        assert_eq!(solution.status, direct.status);
        assert_eq!(solution.x, direct.x);
        assert_eq!(solution.iters, 1 + direct.iters);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-8);
    }

    #[test]
    fn interpolation_events_carry_no_bracket() {
        let f = |x: f64| x.abs() - (-x).exp();

        let mut events = Vec::new();
        let observer = |event: &Event<f64>| {
            events.push(*event);
            None
        };
        solve(&f, [0.0, 2.0], &config(1e-7), observer).expect("should solve");

        assert!(!events.is_empty());
        assert!(events.iter().all(|event| event.method == Method::Brent));
        assert!(events.iter().all(|event| event.bracket.is_none()));
        assert!(!Method::Brent.is_bracketing());
    }

    #[test]
    fn degenerate_interpolation_matches_direct_fallbacks() {
        let config = config(1e-6);

        let direct_secant = secant::solve_unobserved(&step, 0.0, 1.0, &config).expect("secant");
        let direct_bisection =
            bisection::solve_unobserved(&step, [0.0, 1.0], &config).expect("bisection");
        let expected = if direct_secant.is_converged() {
            direct_secant
        } else {
            direct_bisection
        };

        let solution = solve_unobserved(&step, [0.0, 1.0], &config).expect("valid bracket");

        assert_eq!(solution.method, expected.method);
        assert_eq!(solution.status, expected.status);
        assert_relative_eq!(solution.x, expected.x);
    }

    #[test]
    fn observer_stop_in_fallback_is_final() {
        let mut methods = Vec::new();
        let observer = |event: &Event<f64>| {
            methods.push(event.method);
            (event.method == Method::Secant).then_some(Action::StopEarly)
        };

        let solution = solve(&step, [0.0, 1.0], &config(1e-6), observer).expect("valid bracket");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.method, Method::Secant);
        assert_eq!(methods, vec![Method::Secant]);
    }
}
