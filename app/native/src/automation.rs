//! The automation context handed to test code.
//!
//! [`Automation`] bundles one display with the handlers built on it and the
//! loaded configuration. It is created explicitly and passed around; there is
//! no process-wide instance.

use crate::condition::{NewShellOpenedOrClosed, ShellIsAvailable, WaitCondition};
use crate::config::UibotConfig;
use crate::core::{Error, Result};
use crate::exec::SyncExecutor;
use crate::handler::{ExpandHandler, WidgetHandler};
use crate::lookup::{ShellLookup, TitleMatcher};
use crate::synth::EventSynthesizer;
use crate::toolkit::{Display, Expandable, Shell};
use crate::wait::{WaitDefaults, WaitUntil, WaitWhile};

/// Entry point for driving a display from test code.
#[derive(Debug, Clone)]
pub struct Automation {
    config: UibotConfig,
    exec: SyncExecutor,
    events: EventSynthesizer,
    shells: ShellLookup,
    expand: ExpandHandler,
    widgets: WidgetHandler,
}

impl Automation {
    /// Wraps an existing display.
    #[must_use]
    pub fn new(display: Display, config: UibotConfig) -> Self {
        let exec = SyncExecutor::new(display);
        Self {
            config,
            events: EventSynthesizer::new(exec.clone()),
            shells: ShellLookup::new(exec.clone()),
            expand: ExpandHandler::new(exec.clone()),
            widgets: WidgetHandler::new(exec.clone()),
            exec,
        }
    }

    /// Starts a display named after the configured UI thread name and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the UI thread cannot be spawned.
    pub fn launch(config: UibotConfig) -> Result<Self> {
        let display = Display::spawn_named(&config.ui_thread_name)?;
        tracing::info!(thread = %config.ui_thread_name, "automation started");
        Ok(Self::new(display, config))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub const fn config(&self) -> &UibotConfig { &self.config }

    #[must_use]
    pub const fn display(&self) -> &Display { self.exec.display() }

    #[must_use]
    pub const fn exec(&self) -> &SyncExecutor { &self.exec }

    #[must_use]
    pub const fn events(&self) -> &EventSynthesizer { &self.events }

    #[must_use]
    pub const fn shells(&self) -> &ShellLookup { &self.shells }

    #[must_use]
    pub const fn expand_handler(&self) -> &ExpandHandler { &self.expand }

    #[must_use]
    pub const fn widgets(&self) -> &WidgetHandler { &self.widgets }

    /// Wait budget derived from the configuration.
    #[must_use]
    pub fn wait_defaults(&self) -> WaitDefaults { WaitDefaults::from(&self.config.wait) }

    // ========================================================================
    // Waits
    // ========================================================================

    /// Starts building a wait until `condition` holds, using the configured
    /// defaults.
    pub fn wait_until<C: WaitCondition>(&self, condition: C) -> WaitUntil<C> {
        WaitUntil::new(condition).defaults(self.wait_defaults())
    }

    /// Starts building a wait while `condition` holds, using the configured
    /// defaults.
    pub fn wait_while<C: WaitCondition>(&self, condition: C) -> WaitWhile<C> {
        WaitWhile::new(condition).defaults(self.wait_defaults())
    }

    /// Runs `action`, then waits until it has opened a single new shell or
    /// closed `reference`.
    ///
    /// The shell list is captured before `action` runs. Returns the new shell,
    /// or `None` if `reference` was closed.
    ///
    /// # Errors
    ///
    /// Returns the action's error, or [`Error::Timeout`] if neither happens in
    /// time.
    pub fn wait_for_new_shell(
        &self,
        reference: Shell,
        action: impl FnOnce() -> Result<()>,
    ) -> Result<Option<Shell>> {
        let condition = NewShellOpenedOrClosed::capture(self.shells.clone(), reference)?;
        action()?;
        let shell = self.wait_until(condition).run()?;
        match shell {
            Some(shell) => tracing::info!("{shell} has been opened"),
            None => tracing::info!("{reference} has been closed"),
        }
        Ok(shell)
    }

    /// Waits until a shell with a matching title is open and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Timeout`] if no such shell opens in time.
    pub fn wait_for_shell(&self, matcher: TitleMatcher) -> Result<Shell> {
        let description = matcher.to_string();
        self.wait_until(ShellIsAvailable::new(self.shells.clone(), matcher))
            .run()?
            .ok_or_else(|| Error::other(format!("shell {description} is not available")))
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Expands `item`, settling for the configured delay.
    ///
    /// # Errors
    ///
    /// Returns an error if the item or its container is disposed.
    pub fn expand<I: Expandable>(&self, item: I) -> Result<()> {
        self.expand.expand(item, self.config.expand.settle())
    }

    /// Collapses `item`.
    ///
    /// # Errors
    ///
    /// Returns an error if the item or its container is disposed.
    pub fn collapse<I: Expandable>(&self, item: I) -> Result<()> { self.expand.collapse(item) }

    /// Disposes the display and waits for its UI thread to exit.
    ///
    /// Must be called once the automation is no longer needed. Listeners that
    /// captured a handle to the display keep it alive otherwise.
    pub fn shutdown(&self) {
        self.display().dispose();
        tracing::info!("automation stopped");
    }
}
