//! Reference problems solved through the public API of every method.

use approx::assert_relative_eq;
use rstest::rstest;

use rootfinder_solvers::equation::{
    Config, Error, Method, Solution, Status, bisection, brent, newton_raphson, ridder, secant,
};

fn t1(x: f64) -> f64 {
    x.abs() - (-x).exp()
}

fn t3(x: f64) -> f64 {
    x * x - x.atan()
}

fn t4(x: f64) -> f64 {
    (x - 2.0).powi(3) + 0.01 * (x - 2.0)
}

fn config(eps: f64) -> Config<f64> {
    Config::new(eps).expect("valid eps")
}

/// Runs a bracketing method on `[a, b]`.
fn bracketed(
    method: Method,
    f: &dyn Fn(f64) -> f64,
    [a, b]: [f64; 2],
    config: &Config<f64>,
) -> Result<Solution<f64>, Error<f64>> {
    match method {
        Method::Bisection => bisection::solve_unobserved(f, [a, b], config),
        Method::Ridder => ridder::solve_unobserved(f, a, b, config),
        Method::Brent => brent::solve_unobserved(f, [a, b], config),
        open => panic!("{open} is not a bracketing method"),
    }
}

#[test]
fn bisection_finds_square_root_of_two() {
    let f = |x: f64| x * x - 2.0;

    let root = bisection::solve_unobserved(&f, [0.0, 2.0], &config(1e-6))
        .and_then(Solution::into_root)
        .expect("should converge");

    assert!((root - 1.414_214).abs() < 1e-5);
}

#[test]
fn open_methods_agree_on_exponential_fixed_point() {
    let config = config(1e-7);

    let by_secant = secant::solve_unobserved(&t1, 0.0, 2.0, &config).expect("no preconditions");
    let by_newton = newton_raphson::solve_unobserved(&t1, 1.0, &config).expect("slope is positive");

    assert!(by_secant.is_converged());
    assert!(by_newton.is_converged());
    assert_relative_eq!(by_secant.x, 0.567_143, epsilon = 1e-6);
    assert_relative_eq!(by_secant.x, by_newton.x, epsilon = 1e-6);
}

#[rstest]
#[case(Method::Bisection)]
#[case(Method::Ridder)]
#[case(Method::Brent)]
fn bracketing_methods_find_root_on_endpoint(#[case] method: Method) {
    let solution = bracketed(method, &t3, [0.0, 0.5], &config(1e-6)).expect("valid bracket");

    assert!(solution.is_converged(), "{method}: {solution:?}");
    assert!(solution.x.abs() < 1e-6, "{method}: {solution:?}");
}

#[rstest]
#[case(Method::Bisection)]
#[case(Method::Ridder)]
#[case(Method::Brent)]
fn identically_zero_function_is_accepted(#[case] method: Method) {
    let f = |x: f64| x - x;

    let solution = bracketed(method, &f, [0.0, 2.0], &config(1e-6))
        .expect("a zero residual is not a missing sign change");

    assert!(solution.is_converged());
    assert_relative_eq!(solution.residual, 0.0);
    match method {
        Method::Bisection => assert_eq!(solution.iters, 1),
        Method::Ridder => {
            assert_eq!(solution.iters, 0);
            assert_relative_eq!(solution.x, 0.0);
        }
        _ => {}
    }
}

#[test]
fn newton_raphson_converges_on_nearly_flat_root() {
    let solution = newton_raphson::solve_unobserved(&t4, 1.0, &config(1e-8)).expect("should solve");

    assert_eq!(solution.status, Status::Converged);
    assert!((solution.x - 2.0).abs() < 1e-5);
}

#[rstest]
#[case(Method::Bisection)]
#[case(Method::Brent)]
fn reversed_interval_is_rejected(#[case] method: Method) {
    let result = bracketed(method, &t1, [2.0, 0.0], &config(1e-6));

    assert_eq!(
        result,
        Err(Error::InvalidInterval {
            lower: 2.0,
            upper: 0.0,
        })
    );
}

#[rstest]
#[case(Method::Bisection)]
#[case(Method::Ridder)]
#[case(Method::Brent)]
fn bracketing_methods_agree(#[case] method: Method, #[values(1e-4, 1e-8)] eps: f64) {
    let f = |x: f64| x.exp() - 3.0;

    let solution = bracketed(method, &f, [0.0, 4.0], &config(eps)).expect("valid bracket");

    assert!(solution.is_converged());
    assert_relative_eq!(solution.x, 3.0_f64.ln(), epsilon = 1e-3);
}

#[rstest]
#[case(Method::Bisection)]
#[case(Method::Ridder)]
#[case(Method::Brent)]
fn single_precision_is_supported(#[case] method: Method) {
    let f = |x: f32| x * x - 2.0;
    let config = Config::new(1e-4_f32).expect("valid eps");

    let solution = match method {
        Method::Bisection => bisection::solve_unobserved(&f, [0.0, 2.0], &config),
        Method::Ridder => ridder::solve_unobserved(&f, 0.0, 2.0, &config),
        _ => brent::solve_unobserved(&f, [0.0, 2.0], &config),
    }
    .expect("valid bracket");

    assert!(solution.is_converged());
    assert_relative_eq!(solution.x, 2.0_f32.sqrt(), epsilon = 1e-3);
}

#[test]
fn unconverged_solutions_carry_nan_sentinel() {
    let config = config(1e-12).with_max_iters(1);

    let solution = bisection::solve_unobserved(&t1, [0.0, 2.0], &config).expect("valid bracket");

    assert_eq!(solution.status, Status::MaxIters);
    assert!(solution.value().is_nan());
    assert_eq!(
        solution.into_root(),
        Err(Error::MaxIterationsExceeded {
            method: Method::Bisection,
            iters: 1,
        })
    );
}
