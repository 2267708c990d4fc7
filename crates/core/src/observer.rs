/// Watches a root finder as it iterates.
///
/// A solver calls [`observe`](Observer::observe) once per new estimate, after
/// the function has been evaluated there. An observer can record the event,
/// for a trace or a plot, and may answer with an action such as asking the
/// solver to stop and return the current estimate. Returning `None` leaves
/// the iteration untouched.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. Pass `()` to run a
/// solver unobserved.
pub trait Observer<E, A> {
    /// Handles one event, optionally requesting an action from the solver.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Never acts.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
