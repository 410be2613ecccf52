//! Wait conditions.
//!
//! A [`WaitCondition`] is a polled predicate that may capture a result once it
//! is fulfilled. Conditions are created for one wait, mutated only by their own
//! [`WaitCondition::test`], and thrown away afterwards.
//!
//! - [`shell`] - Shell appearance and disappearance
//! - [`item`] - Expandable item state
//! - [`from_fn`] - Ad-hoc predicates

pub mod item;
pub mod shell;


pub use item::ItemIsExpanded;
pub use shell::{
    NewShellOpenedOrClosed, ShellDetection, ShellIsAvailable, ShellIsClosed, detect_new_shell,
};

use crate::core::Result;

/// A condition polled by [`WaitUntil`](crate::wait::WaitUntil) and
/// [`WaitWhile`](crate::wait::WaitWhile).
pub trait WaitCondition {
    /// Value captured when the condition is fulfilled.
    type Output;

    /// Evaluates the condition once.
    ///
    /// Called repeatedly; each call performs a bounded number of UI round
    /// trips.
    ///
    /// # Errors
    ///
    /// An error aborts the wait and is returned to its caller.
    fn test(&mut self) -> Result<bool>;

    /// Human-readable description used in logs and timeout errors.
    fn description(&self) -> String;

    /// Hands out the captured result of the last fulfilled test, if any.
    fn take_result(&mut self) -> Option<Self::Output> { None }
}

/// Condition backed by a closure.
pub struct Predicate<F> {
    description: String,
    test: F,
}

/// Wraps `test` into a condition named `description`.
pub fn from_fn<F>(description: impl Into<String>, test: F) -> Predicate<F>
where
    F: FnMut() -> Result<bool>,
{
    Predicate {
        description: description.into(),
        test,
    }
}

impl<F> WaitCondition for Predicate<F>
where
    F: FnMut() -> Result<bool>,
{
    type Output = ();

    fn test(&mut self) -> Result<bool> { (self.test)() }

    fn description(&self) -> String { self.description.clone() }

    fn take_result(&mut self) -> Option<Self::Output> { Some(()) }
}

impl<F> std::fmt::Debug for Predicate<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predicate").field("description", &self.description).finish_non_exhaustive()
    }
}
