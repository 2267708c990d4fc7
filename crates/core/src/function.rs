/// A scalar function whose zero is being sought.
///
/// Solvers treat the function as a pure black box: they only observe the
/// returned values and may call it any number of times.
///
/// Any closure or function pointer of the form `Fn(T) -> T` is a `Function`,
/// so most callers never implement this trait directly. Implement it to wrap
/// another function, for example to count evaluations.
pub trait Function<T> {
    /// Evaluates the function at `x`.
    fn eval(&self, x: T) -> T;
}

impl<T, F> Function<T> for F
where
    F: Fn(T) -> T + ?Sized,
{
    fn eval(&self, x: T) -> T {
        self(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    struct Shifted<F> {
        inner: F,
        offset: f64,
    }

    impl<F: Function<f64>> Function<f64> for Shifted<F> {
        fn eval(&self, x: f64) -> f64 {
            self.inner.eval(x) - self.offset
        }
    }

    fn square(x: f64) -> f64 {
        x * x
    }

    #[test]
    fn closures_are_functions() {
        let f = |x: f64| 2.0 * x + 1.0;
        assert_relative_eq!(f.eval(3.0), 7.0);
    }

    #[test]
    fn function_pointers_are_functions() {
        let f: fn(f64) -> f64 = square;
        assert_relative_eq!(f.eval(-4.0), 16.0);
    }

    #[test]
    fn trait_objects_are_functions() {
        let f: &dyn Fn(f64) -> f64 = &|x| x - 1.0;
        assert_relative_eq!(f.eval(1.5), 0.5);
    }

    #[test]
    fn wrappers_compose() {
        let f = Shifted {
            inner: square,
            offset: 2.0,
        };
        assert_relative_eq!(f.eval(2.0), 2.0);
    }
}
