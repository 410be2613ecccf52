//! The display: owner of the toolkit's single UI thread.
//!
//! A [`Display`] spawns one named thread that installs the widget tree and
//! then runs queued jobs in submission order until the display is disposed.
//! It is the only place widget state is ever touched.
//!
//! The display offers the raw primitives the automation core builds on:
//! [`Display::post`] to enqueue work, [`Display::is_ui_thread`] to detect
//! re-entry from the UI thread itself, and [`Display::timestamp`] as the event
//! time source. Blocking round trips live in [`crate::exec`].
//!
//! # Thread Safety
//!
//! `Display` is a cheap, cloneable handle (`Send + Sync`). Dropping the last
//! handle asks the UI thread to exit; [`Display::dispose`] does the same and
//! also waits for it.
//!
//! Listeners registered on widgets live on the UI thread. A listener that
//! captures a `Display` (or a [`SyncExecutor`](crate::exec::SyncExecutor))
//! keeps the last handle alive from inside the thread it would stop, so such
//! a display only exits through [`Display::dispose`]. Always dispose a display
//! explicitly when done with it.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle, ThreadId};
use std::time::Instant;

use parking_lot::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::ui::Ui;
use crate::core::constants::UI_THREAD_NAME;
use crate::core::{Error, Result};

/// A unit of work executed on the UI thread.
pub type Job = Box<dyn FnOnce(&Ui) + Send + 'static>;

enum Message {
    Run(Job),
    Shutdown,
}

struct DisplayInner {
    queue: UnboundedSender<Message>,
    ui_thread: ThreadId,
    thread_name: String,
    epoch: Instant,
    disposed: AtomicBool,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Drop for DisplayInner {
    fn drop(&mut self) {
        // The UI thread may already be gone; nothing left to tell it then.
        let _ = self.queue.send(Message::Shutdown);
    }
}

/// Handle to a toolkit display and its UI thread.
#[derive(Clone)]
pub struct Display {
    inner: Arc<DisplayInner>,
}

impl Display {
    /// Starts a display whose UI thread uses the default name.
    ///
    /// # Errors
    ///
    /// Returns an error if the UI thread cannot be spawned.
    pub fn spawn() -> Result<Self> { Self::spawn_named(UI_THREAD_NAME) }

    /// Starts a display whose UI thread is called `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the UI thread cannot be spawned.
    pub fn spawn_named(name: &str) -> Result<Self> {
        let (queue, receiver) = mpsc::unbounded_channel();
        let epoch = Instant::now();

        let handle = thread::Builder::new()
            .name(name.to_string())
            .spawn(move || run_event_loop(receiver, epoch))?;

        tracing::debug!(thread = name, "display started");

        Ok(Self {
            inner: Arc::new(DisplayInner {
                queue,
                ui_thread: handle.thread().id(),
                thread_name: name.to_string(),
                epoch,
                disposed: AtomicBool::new(false),
                handle: Mutex::new(Some(handle)),
            }),
        })
    }

    /// Returns true if the calling thread is this display's UI thread.
    #[must_use]
    pub fn is_ui_thread(&self) -> bool { thread::current().id() == self.inner.ui_thread }

    /// Name of the UI thread.
    #[must_use]
    pub fn thread_name(&self) -> &str { &self.inner.thread_name }

    /// Milliseconds since the display started, wrapping at `u32::MAX`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn timestamp(&self) -> u32 { self.inner.epoch.elapsed().as_millis() as u32 }

    /// Returns true once the display has been disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool { self.inner.disposed.load(Ordering::Acquire) }

    /// Appends a job to the UI thread's queue without waiting for it.
    ///
    /// Jobs run one at a time, in the order they were posted. A panic inside a
    /// posted job is logged and does not stop the UI thread.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DisplayDisposed`] if the display no longer accepts work.
    pub fn post(&self, job: impl FnOnce(&Ui) + Send + 'static) -> Result<()> {
        if self.is_disposed() {
            return Err(Error::DisplayDisposed);
        }
        self.inner
            .queue
            .send(Message::Run(Box::new(job)))
            .map_err(|_| Error::DisplayDisposed)
    }

    /// Stops the UI thread after the jobs already queued have run.
    ///
    /// Blocks until the thread has exited unless called from the UI thread
    /// itself. Calling it more than once is a no-op. This is the only way to
    /// stop a display whose listeners hold handles to it.
    pub fn dispose(&self) {
        if self.inner.disposed.swap(true, Ordering::AcqRel) {
            return;
        }

        tracing::debug!(thread = %self.inner.thread_name, "disposing display");
        let _ = self.inner.queue.send(Message::Shutdown);

        if self.is_ui_thread() {
            return;
        }
        if let Some(handle) = self.inner.handle.lock().take()
            && handle.join().is_err()
        {
            tracing::error!(thread = %self.inner.thread_name, "UI thread terminated abnormally");
        }
    }
}

impl std::fmt::Debug for Display {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Display")
            .field("thread", &self.inner.thread_name)
            .field("disposed", &self.is_disposed())
            .finish_non_exhaustive()
    }
}

/// Body of the UI thread.
fn run_event_loop(mut receiver: UnboundedReceiver<Message>, epoch: Instant) {
    let ui = Ui::install(epoch);

    while let Some(message) = receiver.blocking_recv() {
        match message {
            Message::Run(job) => {
                if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| job(&ui))) {
                    tracing::error!(reason = panic_message(&*payload), "UI job panicked");
                }
            }
            Message::Shutdown => break,
        }
    }

    // Jobs still queued are dropped here, which releases any caller waiting
    // on their results.
    receiver.close();
    drop(receiver);
    drop(ui);
    Ui::uninstall();
    tracing::debug!("UI thread exited");
}

/// Best-effort extraction of a panic message.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("<non-string panic payload>")
}
