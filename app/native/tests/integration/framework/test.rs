//! Main Test struct for integration tests.
//!
//! Provides a clean API for setting up and tearing down a display.

use std::time::Duration;

use uibot_lib::automation::Automation;
use uibot_lib::config::{ExpandConfig, UibotConfig, WaitConfig};
use uibot_lib::toolkit::{Expandable, Shell, Ui};

use super::Workbench;

/// Main test orchestrator.
///
/// Owns an [`Automation`] on a UI thread named after the test. The display is
/// disposed on drop, so a failing test never leaks its UI thread.
pub struct Test {
    automation: Automation,
    cleaned_up: bool,
}

impl Test {
    /// Launches a display with a fast polling configuration.
    ///
    /// # Panics
    ///
    /// Panics if the UI thread cannot be spawned.
    pub fn new(name: &str) -> Self { Self::with_config(name, Self::fast_config(name)) }

    /// Launches a display with the given configuration.
    pub fn with_config(name: &str, config: UibotConfig) -> Self {
        let automation = Automation::launch(config)
            .unwrap_or_else(|err| panic!("failed to launch display for {name}: {err}"));
        Self { automation, cleaned_up: false }
    }

    /// Configuration with a 2s wait budget and a 10ms poll interval.
    pub fn fast_config(name: &str) -> UibotConfig {
        UibotConfig {
            wait: WaitConfig {
                timeout_ms: 2_000,
                poll_interval_ms: 10,
            },
            expand: ExpandConfig { settle_ms: 0 },
            ui_thread_name: format!("ui-{name}"),
        }
    }

    pub fn automation(&self) -> &Automation { &self.automation }

    /// Runs `op` on the UI thread and returns its value.
    pub fn on_ui<T, F>(&self, op: F) -> T
    where
        T: Send + 'static,
        F: FnOnce(&Ui) -> T + Send + 'static,
    {
        self.automation.exec().run(op).expect("display is running")
    }

    /// Opens a shell with the given title.
    pub fn open_shell(&self, title: &str) -> Shell {
        let title = title.to_string();
        self.on_ui(move |ui| ui.open_shell(&title))
    }

    /// Builds a workbench shell holding an expand bar with one item per label.
    pub fn workbench(&self, labels: &[&str]) -> Workbench {
        let labels = labels.iter().map(|label| (*label).to_string()).collect::<Vec<_>>();
        self.on_ui(move |ui| Workbench::build(ui, &labels))
    }

    /// Returns the item's expanded state.
    pub fn expanded<I: Expandable>(&self, item: I) -> bool {
        self.automation.expand_handler().is_expanded(item).expect("item is alive")
    }

    /// Opens a shell from a helper thread after `delay`.
    pub fn open_shell_later(&self, title: &str, delay: Duration) {
        let exec = self.automation.exec().clone();
        let title = title.to_string();
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            exec.run(move |ui| {
                ui.open_shell(&title);
            })
            .expect("display is running");
        });
    }

    /// Closes a shell from a helper thread after `delay`.
    pub fn close_shell_later(&self, shell: Shell, delay: Duration) {
        let exec = self.automation.exec().clone();
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            exec.try_run(move |ui| ui.close_shell(shell)).expect("shell is open");
        });
    }

    /// Disposes the display. Called automatically on drop.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        self.automation.shutdown();
    }
}

impl Drop for Test {
    fn drop(&mut self) { self.cleanup(); }
}
