use std::cell::Cell;

use rootfinder_core::Function;

/// Wraps a function and counts how many times it is evaluated.
///
/// The wrapped values are passed through unchanged, so a counter can stand in
/// for the function in any solver call. The count uses interior mutability
/// because solvers only borrow the function immutably.
///
/// # Example
///
/// ```
/// use rootfinder_bench::CallCounter;
/// use rootfinder_core::Function;
///
/// let counter = CallCounter::new(|x: f64| x * x);
/// assert_eq!(counter.eval(3.0), 9.0);
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Debug)]
pub struct CallCounter<F> {
    inner: F,
    calls: Cell<usize>,
}

impl<F> CallCounter<F> {
    /// Creates a counter around `inner` starting at zero.
    pub fn new(inner: F) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    /// Returns the number of evaluations since creation or the last reset.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.get()
    }

    /// Sets the count back to zero.
    pub fn reset(&self) {
        self.calls.set(0);
    }

    /// Unwraps the counted function.
    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<T, F> Function<T> for CallCounter<F>
where
    F: Function<T>,
{
    fn eval(&self, x: T) -> T {
        self.calls.set(self.calls.get() + 1);
        self.inner.eval(x)
    }
}
