use rootfinder_core::Real;

/// Approximate error between successive estimates.
///
/// Away from zero this is the relative change in percent,
/// `|current - previous| / |current| * 100`. Once the estimate is within
/// `eps` of zero the relative change is undefined, so such steps leave the
/// previous error in place.
///
/// No step has been measured initially, so the error starts at infinity.
/// Solvers that land exactly on a root call [`reset`](Self::reset) instead.
#[derive(Debug, Clone, Copy)]
pub(super) struct RelativeStep<T> {
    eps: T,
    error: T,
}

impl<T: Real> RelativeStep<T> {
    pub(super) fn new(eps: T) -> Self {
        Self {
            eps,
            error: T::infinity(),
        }
    }

    /// Records a step from `previous` to `current`.
    pub(super) fn update(&mut self, current: T, previous: T) {
        if current.abs() > self.eps {
            self.error = (current - previous).abs() / current.abs() * T::from_f64(100.0);
        }
    }

    /// Forces the error to zero, for steps that landed exactly on a root.
    pub(super) fn reset(&mut self) {
        self.error = T::zero();
    }

    /// Returns true if the error is strictly below `threshold`.
    pub(super) fn is_below(&self, threshold: T) -> bool {
        self.error < threshold
    }

    pub(super) fn error(&self) -> T {
        self.error
    }
}
