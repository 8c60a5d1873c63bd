//! This crate provides a deferred-call binder: an [`Alarm`] associates a
//! callable with a fixed prefix of arguments captured at binding time and a
//! purely descriptive execution interval, to be invoked later with
//! additional trailing arguments.
//!
//! This is not a scheduler. Nothing runs in the background, the interval is
//! never consulted to gate or trigger execution, and there is no
//! cancellation or rescheduling. [`Alarm::execute`] is the only trigger; a
//! caller that wants timed firing layers its own loop on top, for example
//! by polling a stopwatch until the elapsed time reaches the configured
//! interval.
//!
//! ```
//! use alarm::Alarm;
//! use core::time::Duration;
//!
//! fn report(id: u32, ready: bool) -> bool {
//!     ready && id > 0
//! }
//!
//! let mut alarm: Alarm<(bool,), bool> = Alarm::new();
//! alarm.set_interval(Duration::from_secs(3));
//! alarm.set_function(report, (7,));
//!
//! // invoked as report(7, true): bound arguments first, then extras
//! assert_eq!(alarm.execute((true,)), Ok(true));
//! ```

mod alarm;
mod bind;
mod error;

pub use bind::{Callable, MemberCallable};
pub use error::Error;

pub use self::alarm::Alarm;
