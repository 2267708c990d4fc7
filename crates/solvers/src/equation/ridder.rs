//! Ridder's method for bracketed roots.
//!
//! # Algorithm
//!
//! Each iteration evaluates the midpoint `xm` of the bracket `[xl, xh]` and
//! fits an exponential through the three points, which yields the new
//! estimate
//!
//! ```text
//! s    = sqrt(f(xm)^2 - f(xl) * f(xh))
//! xnew = xm + (xm - xl) * sign(f(xl) - f(xh)) * f(xm) / s
//! ```
//!
//! The bracket is then tightened around `xnew` using whichever of `xm`, `xl`
//! or `xh` still has the opposite sign. Convergence is quadratic near a simple
//! root, and the root never leaves the bracket.
//!
//! The solver converges when the bracket width drops to `eps`, when two
//! successive estimates are within `eps` of each other, or when an estimate
//! lands exactly on a root.
//!
//! # Observer Events
//!
//! One [`Event`] per estimate, carrying the bracket after re-bracketing.

use rootfinder_core::{Function, Observer, Real};

use super::{
    Action, Config, Error, Event, Method, Solution, Status,
    bracket::{Sign, with_sign_of},
};

/// Default iteration budget, independent of the precision.
pub const DEFAULT_MAX_ITERS: usize = 60;

/// Finds a root of `f` between the positions `xi` and `xii` using Ridder's
/// method.
///
/// The positions need not be ordered. If either endpoint is already an exact
/// root it is returned without iterating.
///
/// # Errors
///
/// Returns [`Error::NotBracketed`] if the endpoint residuals do not have
/// strictly opposite signs and neither is zero, and
/// [`Error::BrokenInvariant`] if no sub-bracket keeps the sign change.
pub fn solve<T, F, Obs>(
    f: &F,
    xi: T,
    xii: T,
    config: &Config<T>,
    mut observer: Obs,
) -> Result<Solution<T>, Error<T>>
where
    T: Real,
    F: Function<T> + ?Sized,
    Obs: Observer<Event<T>, Action>,
{
    let mut fl = f.eval(xi);
    let mut fh = f.eval(xii);

    if !Sign::of(fl).opposes(Sign::of(fh)) {
        if fl == T::zero() {
            return Ok(Solution::new(Method::Ridder, Status::Converged, xi, fl, 0));
        }
        if fh == T::zero() {
            return Ok(Solution::new(Method::Ridder, Status::Converged, xii, fh, 0));
        }
        return Err(Error::NotBracketed {
            lower: xi,
            upper: xii,
            lower_residual: fl,
            upper_residual: fh,
        });
    }

    let eps = config.eps();
    let max_iters = config.budget(DEFAULT_MAX_ITERS);
    let half = T::from_f64(0.5);

    let (mut xl, mut xh) = (xi, xii);
    let mut estimate: Option<(T, T)> = None;

    for iter in 1..=max_iters {
        let xm = half * (xl + xh);
        let fm = f.eval(xm);
        if !fm.is_finite() {
            log::debug!("ridder: non-finite residual {fm} at midpoint {xm}");
            return Ok(Solution::new(Method::Ridder, Status::Diverged, xm, fm, iter));
        }

        let s = (fm * fm - fl * fh).sqrt();
        if s == T::zero() {
            let (x, residual) = estimate.unwrap_or((xm, fm));
            return Ok(Solution::new(Method::Ridder, Status::Converged, x, residual, iter));
        }

        let direction = if fl >= fh { T::one() } else { -T::one() };
        let xnew = xm + (xm - xl) * (direction * fm / s);
        if let Some((previous, previous_residual)) = estimate {
            if (xnew - previous).abs() <= eps {
                return Ok(Solution::new(
                    Method::Ridder,
                    Status::Converged,
                    previous,
                    previous_residual,
                    iter,
                ));
            }
        }

        let fnew = f.eval(xnew);
        if !fnew.is_finite() {
            log::debug!("ridder: non-finite residual {fnew} at x = {xnew}");
            return Ok(Solution::new(
                Method::Ridder,
                Status::Diverged,
                xnew,
                fnew,
                iter,
            ));
        }
        estimate = Some((xnew, fnew));

        if fnew == T::zero() {
            return Ok(Solution::new(Method::Ridder, Status::Converged, xnew, fnew, iter));
        }

        if with_sign_of(fm, fnew) != fm {
            xl = xm;
            fl = fm;
            xh = xnew;
            fh = fnew;
        } else if with_sign_of(fl, fnew) != fl {
            xh = xnew;
            fh = fnew;
        } else if with_sign_of(fh, fnew) != fh {
            xl = xnew;
            fl = fnew;
        } else {
            return Err(Error::BrokenInvariant { x: xnew });
        }

        log::trace!("ridder: iter {iter}, x = {xnew}, f(x) = {fnew}, bracket = [{xl}, {xh}]");

        let event = Event {
            method: Method::Ridder,
            iter,
            x: xnew,
            residual: fnew,
            bracket: Some([xl, xh]),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::new(
                Method::Ridder,
                Status::StoppedByObserver,
                xnew,
                fnew,
                iter,
            ));
        }

        if (xh - xl).abs() <= eps {
            return Ok(Solution::new(Method::Ridder, Status::Converged, xnew, fnew, iter));
        }
    }

    log::debug!("ridder: no root found within {max_iters} iterations (eps = {eps})");
    let (x, residual) = estimate.unwrap_or((xl, fl));
    Ok(Solution::new(Method::Ridder, Status::MaxIters, x, residual, max_iters))
}

/// Finds a root of `f` between `xi` and `xii` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<T, F>(
    f: &F,
    xi: T,
    xii: T,
    config: &Config<T>,
) -> Result<Solution<T>, Error<T>>
where
    T: Real,
    F: Function<T> + ?Sized,
{
    solve(f, xi, xii, config, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn config(eps: f64) -> Config<f64> {
        Config::new(eps).expect("valid eps")
    }

    #[test]
    fn finds_square_root_of_two() {
        let f = |x: f64| x * x - 2.0;

        let solution = solve_unobserved(&f, 0.0, 2.0, &config(1e-10)).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.method, Method::Ridder);
        assert_relative_eq!(solution.x, 2.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn converges_in_few_iterations() {
        let f = |x: f64| x.exp() - 3.0;

        let solution = solve_unobserved(&f, 0.0, 4.0, &config(1e-12)).expect("should solve");

        assert!(solution.is_converged());
        assert!(solution.iters < 15);
        assert_relative_eq!(solution.x, 3.0_f64.ln(), epsilon = 1e-10);
    }

    #[test]
    fn accepts_positions_in_either_order() {
        let f = |x: f64| x.cos() - x;

        let forward = solve_unobserved(&f, 0.0, 1.0, &config(1e-10)).expect("should solve");
        let backward = solve_unobserved(&f, 1.0, 0.0, &config(1e-10)).expect("should solve");

        assert!(forward.is_converged() && backward.is_converged());
        assert_relative_eq!(forward.x, backward.x, epsilon = 1e-9);
    }

    #[test]
    fn exact_endpoint_root_returns_without_iterating() {
        let f = |x: f64| x * x - x.atan();

        let solution = solve_unobserved(&f, 0.0, 0.5, &config(1e-6)).expect("should solve");

        assert!(solution.is_converged());
        assert_eq!(solution.iters, 0);
        assert_relative_eq!(solution.x, 0.0);
    }

    #[test]
    fn identically_zero_function_returns_first_endpoint() {
        let f = |x: f64| x - x;

        let solution = solve_unobserved(&f, -1.0, 3.0, &config(1e-6)).expect("should solve");

        assert!(solution.is_converged());
        assert_relative_eq!(solution.x, -1.0);
    }

    #[test]
    fn errors_when_not_bracketed() {
        let f = |x: f64| x * x + 1.0;

        let result = solve_unobserved(&f, -1.0, 2.0, &config(1e-6));

        assert!(matches!(result, Err(Error::NotBracketed { .. })));
    }

    #[test]
    fn exhausted_budget_converts_to_error() {
        let f = |x: f64| x.powi(3) - 3.0;

        let config = config(1e-14).with_max_iters(1);
        let solution = solve_unobserved(&f, 0.0, 4.0, &config).expect("valid bracket");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(
            solution.into_root(),
            Err(Error::MaxIterationsExceeded {
                method: Method::Ridder,
                iters: 1,
            })
        );
    }

    #[test]
    fn bracket_shrinks_and_keeps_sign_change() {
        let f = |x: f64| x.powi(3) - 2.0 * x - 5.0;

        let mut brackets = Vec::new();
        let observer = |event: &Event<f64>| {
            brackets.push(event.bracket.expect("ridder keeps a bracket"));
            None
        };

        let solution = solve(&f, 2.0, 3.0, &config(1e-12), observer).expect("should solve");
        assert!(solution.is_converged());

        let mut width = 1.0;
        for [xl, xh] in brackets {
            assert!((xh - xl).abs() <= width);
            assert!(f(xl) * f(xh) <= 0.0);
            width = (xh - xl).abs();
        }
    }
}
