//! Polling loop shared by [`WaitUntil`] and [`WaitWhile`].

use std::thread;
use std::time::{Duration, Instant};

use super::period::{MIN_INTERVAL, WaitDefaults};
use crate::condition::WaitCondition;
use crate::core::{Error, Result};

/// Which outcome of `test()` ends the wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Until,
    While,
}

impl Mode {
    const fn label(self) -> &'static str {
        match self {
            Self::Until => "until",
            Self::While => "while",
        }
    }

    const fn is_done(self, test: bool) -> bool {
        match self {
            Self::Until => test,
            Self::While => !test,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Budget {
    timeout: Option<Duration>,
    interval: Option<Duration>,
    defaults: WaitDefaults,
    fail_on_timeout: bool,
}

impl Budget {
    fn new() -> Self {
        Self {
            timeout: None,
            interval: None,
            defaults: WaitDefaults::default(),
            fail_on_timeout: true,
        }
    }

    fn timeout(&self) -> Duration { self.timeout.unwrap_or(self.defaults.timeout) }

    fn interval(&self) -> Duration {
        self.interval.unwrap_or(self.defaults.interval).max(MIN_INTERVAL)
    }
}

/// Polls `condition` until the mode's target outcome or the deadline.
///
/// Returns `Ok(true)` when the wait resolved, `Ok(false)` on a tolerated
/// timeout.
fn poll<C: WaitCondition>(condition: &mut C, mode: Mode, budget: &Budget) -> Result<bool> {
    let timeout = budget.timeout();
    let interval = budget.interval();
    let start = Instant::now();

    tracing::debug!(
        condition = %condition.description(),
        ?timeout,
        ?interval,
        "waiting {}",
        mode.label()
    );

    loop {
        if mode.is_done(condition.test()?) {
            tracing::debug!(
                condition = %condition.description(),
                elapsed = ?start.elapsed(),
                "wait {} finished",
                mode.label()
            );
            return Ok(true);
        }

        let elapsed = start.elapsed();
        if elapsed >= timeout {
            let description = format!("{} {}", mode.label(), condition.description());
            if budget.fail_on_timeout {
                return Err(Error::timeout(description, timeout));
            }
            tracing::warn!(condition = %description, ?timeout, "wait timed out");
            return Ok(false);
        }

        thread::sleep(interval.min(timeout - elapsed));
    }
}

macro_rules! wait_builder {
    ($(#[$meta:meta])* $name:ident, $mode:expr) => {
        $(#[$meta])*
        #[must_use = "a wait does nothing until `run` is called"]
        pub struct $name<C> {
            condition: C,
            budget: Budget,
        }

        impl<C: WaitCondition> $name<C> {
            /// Creates a wait on `condition` with the default budget.
            pub fn new(condition: C) -> Self { Self { condition, budget: Budget::new() } }

            /// Sets the overall time budget.
            pub fn timeout(mut self, timeout: impl Into<Duration>) -> Self {
                self.budget.timeout = Some(timeout.into());
                self
            }

            /// Sets the delay between two polls. Values below 1ms are raised to
            /// 1ms.
            pub fn interval(mut self, interval: impl Into<Duration>) -> Self {
                self.budget.interval = Some(interval.into());
                self
            }

            /// Replaces the defaults used for an unset timeout or interval.
            pub fn defaults(mut self, defaults: WaitDefaults) -> Self {
                self.budget.defaults = defaults;
                self
            }

            /// Chooses whether running out of time is an error (the default)
            /// or an `Ok(None)` result.
            pub fn fail_on_timeout(mut self, fail: bool) -> Self {
                self.budget.fail_on_timeout = fail;
                self
            }

            /// Polls the condition on the calling thread.
            ///
            /// Returns the condition's captured result once the wait has
            /// resolved, or `None` after a tolerated timeout.
            ///
            /// # Errors
            ///
            /// Returns [`Error::Timeout`] when the budget runs out and the wait
            /// fails on timeout, or any error raised by the condition's test.
            pub fn run(mut self) -> Result<Option<C::Output>> {
                if poll(&mut self.condition, $mode, &self.budget)? {
                    Ok(self.condition.take_result())
                } else {
                    Ok(None)
                }
            }
        }

        impl<C: WaitCondition> std::fmt::Debug for $name<C> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("condition", &self.condition.description())
                    .field("timeout", &self.budget.timeout())
                    .field("interval", &self.budget.interval())
                    .field("fail_on_timeout", &self.budget.fail_on_timeout)
                    .finish()
            }
        }
    };
}

wait_builder!(
    /// Waits until a condition is fulfilled.
    WaitUntil,
    Mode::Until
);

wait_builder!(
    /// Waits while a condition is fulfilled.
    WaitWhile,
    Mode::While
);
