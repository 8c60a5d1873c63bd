use core::time::Duration;

use log::{debug, trace};

use crate::bind::{Callable, MemberCallable};
use crate::error::Error;

/// A deferred call: a callable bound together with a fixed prefix of
/// arguments and a descriptive execution interval.
///
/// `Extra` is the tuple of arguments supplied at execute time and `Output`
/// is the callable's result type; both default to `()`. Bound arguments are
/// captured eagerly when the binding is made and cloned into each
/// invocation, ahead of the execute-time arguments. Rebinding fully
/// replaces the previous binding; argument lists are never merged.
///
/// The interval is metadata only. It is stored for the application to
/// inspect and is never consulted by [`execute`](Alarm::execute); no
/// background wait is ever started. Scheduling, if desired, is layered on
/// top by the caller.
///
/// The `'a` lifetime bounds everything the binding borrows. Bindings that
/// capture only owned values leave the alarm `'static`; binding a reference
/// makes the borrow checker enforce that the referent outlives every
/// `execute` call.
///
/// ```
/// use alarm::Alarm;
/// use core::time::Duration;
///
/// fn scale(factor: f64, value: f64) -> f64 {
///     factor * value
/// }
///
/// let mut alarm = Alarm::with_function(Duration::from_millis(3000), scale, (2.0,));
/// assert_eq!(alarm.execute((21.0,)), Ok(42.0));
/// ```
pub struct Alarm<'a, Extra = (), Output = ()> {
    interval: Duration,
    callable: Option<Box<dyn FnMut(Extra) -> Output + 'a>>,
}

impl<'a, Extra, Output> Alarm<'a, Extra, Output> {
    /// Create an alarm with a zero interval and no binding.
    pub fn new() -> Self {
        Self {
            interval: Duration::ZERO,
            callable: None,
        }
    }

    /// Create an alarm with an interval and an initial function binding.
    pub fn with_function<F, B>(interval: Duration, callable: F, bound: B) -> Self
    where
        B: Clone + 'a,
        F: Callable<B, Extra, Output = Output> + 'a,
    {
        let mut alarm = Self::new();
        alarm.set_interval(interval);
        alarm.set_function(callable, bound);
        alarm
    }

    /// Store an interval for later inspection by the application.
    ///
    /// Purely descriptive: nothing reads it to delay, gate, or trigger
    /// execution.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    /// The stored interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True if a callable is currently bound.
    pub fn is_bound(&self) -> bool {
        self.callable.is_some()
    }

    /// Bind a callable together with a tuple of arguments captured now.
    ///
    /// On every invocation the bound tuple is cloned and passed ahead of
    /// the execute-time arguments. Any previous binding is replaced
    /// entirely.
    pub fn set_function<F, B>(&mut self, mut callable: F, bound: B)
    where
        B: Clone + 'a,
        F: Callable<B, Extra, Output = Output> + 'a,
    {
        if self.callable.is_some() {
            debug!("replacing existing binding");
        }

        self.callable = Some(Box::new(move |extra| callable.invoke(bound.clone(), extra)));
    }

    /// Bind a method together with its receiver, captured by value.
    ///
    /// The receiver is moved into the alarm and lent to the callable on
    /// every invocation. To capture the receiver by reference instead, pass
    /// `&receiver` as the first bound argument to
    /// [`set_function`](Alarm::set_function): the alarm then borrows the
    /// receiver for `'a` and the caller must keep it alive.
    pub fn set_member_function<F, R, B>(&mut self, mut callable: F, receiver: R, bound: B)
    where
        R: 'a,
        B: Clone + 'a,
        F: MemberCallable<R, B, Extra, Output = Output> + 'a,
    {
        if self.callable.is_some() {
            debug!("replacing existing binding");
        }

        self.callable = Some(Box::new(move |extra| {
            callable.invoke(&receiver, bound.clone(), extra)
        }));
    }

    /// Invoke the most recently bound callable with the bound arguments
    /// followed by `extra`, in that order, and return its result.
    ///
    /// Fails with [`Error::Unbound`] if no binding has been set.
    pub fn execute(&mut self, extra: Extra) -> Result<Output, Error> {
        match self.callable.as_mut() {
            Some(callable) => {
                trace!("executing bound callable");
                Ok(callable(extra))
            }
            None => Err(Error::Unbound),
        }
    }
}

impl<'a, Extra, Output> Default for Alarm<'a, Extra, Output> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    struct Accumulator {
        base: i32,
    }

    impl Accumulator {
        fn add(&self, x: i32, y: i32) -> i32 {
            self.base + x + y
        }
    }

    fn sum2(a: i32, b: i32) -> i32 {
        a + b
    }

    #[test]
    fn execute_without_binding_fails() {
        let mut alarm: Alarm = Alarm::new();

        assert!(!alarm.is_bound());
        assert_eq!(alarm.execute(()), Err(Error::Unbound));
    }

    #[test]
    fn bound_then_extra_argument_order() {
        let order = Rc::new(RefCell::new(Vec::new()));

        let recorder = {
            let order = order.clone();
            move |a: i32, b: i32, c: i32, d: i32| {
                order.borrow_mut().extend([a, b, c, d]);
            }
        };

        let mut alarm: Alarm<(i32, i32)> = Alarm::new();
        alarm.set_function(recorder, (1, 2));
        alarm.execute((3, 4)).unwrap();

        assert_eq!(*order.borrow(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn rebinding_replaces_entirely() {
        let first_calls = Rc::new(RefCell::new(0));

        let first = {
            let calls = first_calls.clone();
            move |x: i32| {
                *calls.borrow_mut() += 1;
                x
            }
        };

        let mut alarm: Alarm<(i32,), i32> = Alarm::new();
        alarm.set_function(first, ());
        alarm.set_function(|offset: i32, x: i32| offset + x, (100,));

        assert_eq!(alarm.execute((7,)), Ok(107));
        assert_eq!(*first_calls.borrow(), 0);
    }

    #[test]
    fn repeated_execution_reuses_bound_arguments() {
        let mut alarm: Alarm<(i32,), i32> = Alarm::new();
        alarm.set_function(sum2, (40,));

        assert_eq!(alarm.execute((2,)), Ok(42));
        assert_eq!(alarm.execute((10,)), Ok(50));
    }

    #[test]
    fn member_function_with_owned_receiver() {
        let mut alarm: Alarm<(i32,), i32> = Alarm::new();
        alarm.set_member_function(Accumulator::add, Accumulator { base: 10 }, (20,));

        assert_eq!(alarm.execute((12,)), Ok(42));
    }

    #[test]
    fn member_function_with_borrowed_receiver() {
        let accumulator = Accumulator { base: 10 };

        let mut alarm: Alarm<(i32,), i32> = Alarm::new();
        alarm.set_function(Accumulator::add, (&accumulator, 20));

        assert_eq!(alarm.execute((12,)), Ok(42));
        assert_eq!(alarm.execute((2,)), Ok(32));
    }

    #[test]
    fn zero_arity_binding() {
        let mut alarm: Alarm<(), i32> = Alarm::new();
        alarm.set_function(|| 42, ());

        assert_eq!(alarm.execute(()), Ok(42));
    }

    #[test]
    fn all_arguments_bound() {
        let mut alarm: Alarm<(), i32> = Alarm::new();
        alarm.set_function(sum2, (20, 22));

        assert_eq!(alarm.execute(()), Ok(42));
    }

    #[test]
    fn interval_is_metadata_only() {
        let mut alarm: Alarm<(), i32> = Alarm::new();
        alarm.set_interval(Duration::from_secs(3600));
        alarm.set_function(|| 1, ());

        assert_eq!(alarm.interval(), Duration::from_secs(3600));
        // executes immediately, the interval is never enforced
        assert_eq!(alarm.execute(()), Ok(1));
    }

    #[test]
    fn constructor_binds_and_stores_interval() {
        let mut alarm = Alarm::with_function(Duration::from_millis(3000), sum2, (10,));

        assert_eq!(alarm.interval(), Duration::from_millis(3000));
        assert!(alarm.is_bound());
        assert_eq!(alarm.execute((5,)), Ok(15));
    }

    #[test]
    fn rebind_member_to_free_function() {
        let mut alarm: Alarm<(i32,), i32> = Alarm::new();
        alarm.set_member_function(Accumulator::add, Accumulator { base: 0 }, (1,));
        alarm.set_function(sum2, (100,));

        assert_eq!(alarm.execute((1,)), Ok(101));
    }
}
