use rootfinder_core::Real;
use thiserror::Error;

/// Errors that can occur when building a [`Tolerances`] sequence.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ToleranceError<T> {
    /// The shrink factor is not strictly between zero and one.
    #[error("invalid factor {factor}: it must lie strictly between 0 and 1")]
    Factor { factor: T },

    /// A bound is non-positive or not finite.
    #[error("invalid bound {value}: tolerances must be finite and strictly positive")]
    Bound { value: T },

    /// The sequence would be empty.
    #[error("start tolerance {start} must exceed end tolerance {end}")]
    Empty { start: T, end: T },
}

/// A geometric sequence of tolerances `start, start·factor, …` above `end`.
///
/// ```
/// use rootfinder_bench::Tolerances;
///
/// let eps: Vec<f64> = Tolerances::new(1.0, 0.01, 0.5)?.collect();
/// assert_eq!(eps.len(), 7);
/// # Ok::<(), rootfinder_bench::ToleranceError<f64>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances<T> {
    next: T,
    end: T,
    factor: T,
}

impl<T: Real> Tolerances<T> {
    /// Creates the sequence, validating its bounds and factor.
    ///
    /// # Errors
    ///
    /// Returns a [`ToleranceError`] if `factor` is outside `(0, 1)`, if either
    /// bound is non-positive or not finite, or if `end >= start`.
    pub fn new(start: T, end: T, factor: T) -> Result<Self, ToleranceError<T>> {
        if !(factor > T::zero() && factor < T::one()) {
            return Err(ToleranceError::Factor { factor });
        }
        for value in [start, end] {
            if !value.is_finite() || value <= T::zero() {
                return Err(ToleranceError::Bound { value });
            }
        }
        if end >= start {
            return Err(ToleranceError::Empty { start, end });
        }

        Ok(Self {
            next: start,
            end,
            factor,
        })
    }
}

impl<T: Real> Iterator for Tolerances<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.next > self.end {
            let eps = self.next;
            self.next = eps * self.factor;
            Some(eps)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn shrinks_geometrically_until_end() {
        let eps: Vec<f64> = Tolerances::new(0.1, 1e-4, 0.125)
            .expect("valid sequence")
            .collect();

        assert_eq!(eps.len(), 4);
        assert_relative_eq!(eps[0], 0.1);
        assert_relative_eq!(eps[3], 0.1 * 0.125_f64.powi(3));
        assert!(eps.iter().all(|&e| e > 1e-4));
    }

    #[test]
    fn rejects_factors_outside_unit_interval() {
        for factor in [0.0, 1.0, 1.5, -0.5, f64::NAN] {
            let result = Tolerances::new(0.1, 1e-3, factor);
            assert!(
                matches!(result, Err(ToleranceError::Factor { .. })),
                "factor {factor} was accepted"
            );
        }
    }

    #[test]
    fn rejects_bad_bounds() {
        assert_eq!(
            Tolerances::new(0.1, 0.0, 0.5),
            Err(ToleranceError::Bound { value: 0.0 })
        );
        assert!(matches!(
            Tolerances::new(f64::INFINITY, 1e-3, 0.5),
            Err(ToleranceError::Bound { .. })
        ));
        assert_eq!(
            Tolerances::new(1e-3, 0.1, 0.5),
            Err(ToleranceError::Empty {
                start: 1e-3,
                end: 0.1
            })
        );
    }

    #[test]
    fn error_messages_name_the_problem() {
        let error = ToleranceError::Factor { factor: 2.0 };
        assert_eq!(
            error.to_string(),
            "invalid factor 2: it must lie strictly between 0 and 1"
        );
    }
}
