//! Synchronous execution of work on the UI thread.
//!
//! [`SyncExecutor`] is the single gateway through which test threads touch
//! widgets. Each call marshals an operation to the display's UI thread, blocks
//! until it has run, and hands back its result. Called from the UI thread
//! itself, the operation runs inline instead, so nested calls never deadlock.
//!
//! Failures keep their identity across the thread hop:
//!
//! - a panic inside the operation is re-raised on the caller with its original
//!   payload
//! - an operation returning `Result<T, E>` through [`SyncExecutor::try_run`]
//!   yields the same `E` value to the caller
//! - a display that has been disposed reports [`Error::DisplayDisposed`]

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::pin::Pin;
use std::task::{Context, Poll};
use std::thread;

use tokio::sync::oneshot;

use crate::core::{Error, Result};
use crate::toolkit::{Display, Ui};

/// Runs operations on a display's UI thread and waits for their results.
#[derive(Debug, Clone)]
pub struct SyncExecutor {
    display: Display,
}

impl SyncExecutor {
    /// Creates an executor for `display`.
    #[must_use]
    pub const fn new(display: Display) -> Self { Self { display } }

    /// The display this executor drives.
    #[must_use]
    pub const fn display(&self) -> &Display { &self.display }

    /// Runs `op` on the UI thread and returns its value.
    ///
    /// Runs inline when the caller already is the UI thread. A panic inside
    /// `op` resumes on the calling thread with the original payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DisplayDisposed`] if the display is gone before `op`
    /// could run, or [`Error::InvalidThreadAccess`] if the UI thread has no
    /// widget tree installed.
    pub fn run<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&Ui) -> T + Send + 'static,
        T: Send + 'static,
    {
        if self.display.is_ui_thread() {
            let ui = Ui::require()?;
            return Ok(op(&ui));
        }
        self.submit(op)?.wait()
    }

    /// Runs a fallible `op` on the UI thread, handing its error back unchanged.
    ///
    /// # Errors
    ///
    /// Returns the operation's own error, or the executor failure converted
    /// into `E`.
    pub fn try_run<T, E, F>(&self, op: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&Ui) -> std::result::Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: From<Error> + Send + 'static,
    {
        self.run(op).map_err(E::from)?
    }

    /// Queues `op` on the UI thread and returns a future for its result.
    ///
    /// Unlike [`SyncExecutor::run`] this never runs inline. Blocking on the
    /// returned future from the UI thread deadlocks.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DisplayDisposed`] if the display no longer accepts work.
    pub fn submit<T, F>(&self, op: F) -> Result<UiFuture<T>>
    where
        F: FnOnce(&Ui) -> T + Send + 'static,
        T: Send + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        self.display.post(move |ui| {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| op(ui)));
            // The caller may have stopped waiting.
            let _ = sender.send(outcome);
        })?;
        Ok(UiFuture { receiver })
    }

    /// Queues `op` on the UI thread without waiting for it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DisplayDisposed`] if the display no longer accepts work.
    pub fn run_later(&self, op: impl FnOnce(&Ui) + Send + 'static) -> Result<()> {
        self.display.post(op)
    }
}

/// Pending result of an operation queued with [`SyncExecutor::submit`].
///
/// Resolves to the operation's value, re-raises its panic, or reports
/// [`Error::DisplayDisposed`] if the operation was dropped unrun.
#[derive(Debug)]
#[must_use = "the operation's result is lost unless the future is awaited"]
pub struct UiFuture<T> {
    receiver: oneshot::Receiver<thread::Result<T>>,
}

impl<T> UiFuture<T> {
    /// Blocks the current thread until the operation has finished.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DisplayDisposed`] if the operation never ran.
    pub fn wait(self) -> Result<T> { futures::executor::block_on(self) }
}

impl<T> Future for UiFuture<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.receiver).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(Ok(value))) => Poll::Ready(Ok(value)),
            Poll::Ready(Ok(Err(payload))) => panic::resume_unwind(payload),
            Poll::Ready(Err(_)) => Poll::Ready(Err(Error::DisplayDisposed)),
        }
    }
}
