//! Polling waits.
//!
//! - [`engine`] - [`WaitUntil`] and [`WaitWhile`], which poll a
//!   [`WaitCondition`](crate::condition::WaitCondition) on the calling thread
//! - [`period`] - Named time periods, wait defaults and the settle sleep
//!
//! A wait calls the condition's `test` repeatedly, sleeping the poll interval
//! between calls, until it resolves or the timeout has elapsed. The timeout is
//! measured from the start of the wait and never fires before it has passed.

pub mod engine;
pub mod period;

pub use engine::{WaitUntil, WaitWhile};
pub use period::{TimePeriod, WaitDefaults, sleep};
