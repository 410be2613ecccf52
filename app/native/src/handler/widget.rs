//! Generic widget operations: text, tool tip, enablement and selection.

use crate::core::Result;
use crate::exec::SyncExecutor;
use crate::synth::EventSynthesizer;
use crate::toolkit::Widget;

/// Reads and drives state every widget has.
#[derive(Debug, Clone)]
pub struct WidgetHandler {
    exec: SyncExecutor,
    synth: EventSynthesizer,
}

impl WidgetHandler {
    #[must_use]
    pub fn new(exec: SyncExecutor) -> Self {
        Self {
            synth: EventSynthesizer::new(exec.clone()),
            exec,
        }
    }

    /// Returns true if the widget no longer exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the display is gone.
    pub fn is_disposed(&self, widget: impl Widget) -> Result<bool> {
        self.exec.run(move |ui| ui.is_disposed(widget.id()))
    }

    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn text(&self, widget: impl Widget) -> Result<String> {
        self.exec.try_run(move |ui| ui.text(widget.id()))
    }

    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn set_text(&self, widget: impl Widget, text: &str) -> Result<()> {
        let text = text.to_string();
        self.exec.try_run(move |ui| ui.set_text(widget.id(), &text))
    }

    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn tooltip_text(&self, widget: impl Widget) -> Result<Option<String>> {
        self.exec.try_run(move |ui| ui.tooltip_text(widget.id()))
    }

    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn is_enabled(&self, widget: impl Widget) -> Result<bool> {
        self.exec.try_run(move |ui| ui.is_enabled(widget.id()))
    }

    /// Enables or disables `widget`.
    ///
    /// Does nothing when the widget already is in the requested state. No
    /// event is sent, as the toolkit sends none for programmatic changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn set_enabled(&self, widget: impl Widget, enabled: bool) -> Result<()> {
        let state = if enabled { "enabled" } else { "disabled" };
        let (label, current) = self
            .exec
            .try_run(move |ui| -> Result<(String, bool)> {
                Ok((ui.label(widget.id())?, ui.is_enabled(widget.id())?))
            })?;
        tracing::debug!("Set {label} {state}");
        if current == enabled {
            tracing::debug!("{label} is already {state}. No action performed");
            return Ok(());
        }

        self.exec.try_run(move |ui| ui.set_enabled(widget.id(), enabled))?;
        tracing::info!("{label} has been {state}");
        Ok(())
    }

    /// Clicks `widget` by sending it a `Selection` event.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn select(&self, widget: impl Widget) -> Result<()> {
        let label = self.exec.try_run(move |ui| ui.label(widget.id()))?;
        tracing::debug!("Select {label}");
        self.synth.select(widget)?;
        tracing::info!("{label} has been selected");
        Ok(())
    }
}
