//! Expand and collapse of expandable items.
//!
//! Works for any [`Expandable`] item (expand bar items and tree items). The
//! two transitions are deliberately asymmetric, matching the toolkit's own
//! event contract:
//!
//! - expanding notifies the container's `Expand` listeners first and only
//!   then marks the item expanded, so listeners see the item still collapsed
//! - collapsing marks the item collapsed first and notifies the container's
//!   `Collapse` listeners afterwards
//!
//! Both transitions are no-ops when the item is already in the target state:
//! no event is sent and nothing is mutated. The explicit container variants
//! [`ExpandHandler::expand_in`] and [`ExpandHandler::collapse_in`] skip that
//! check and always notify.

use std::time::Duration;

use crate::core::Result;
use crate::exec::SyncExecutor;
use crate::synth::EventSynthesizer;
use crate::toolkit::{EventType, Expandable, Widget, WidgetId};
use crate::wait;

/// Drives expand/collapse transitions and reads expandable item state.
#[derive(Debug, Clone)]
pub struct ExpandHandler {
    exec: SyncExecutor,
    synth: EventSynthesizer,
}

impl ExpandHandler {
    #[must_use]
    pub fn new(exec: SyncExecutor) -> Self {
        Self {
            synth: EventSynthesizer::new(exec.clone()),
            exec,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Returns whether `item` is expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is disposed.
    pub fn is_expanded<I: Expandable>(&self, item: I) -> Result<bool> {
        self.exec.try_run(move |ui| ui.expanded(item.id()))
    }

    /// Returns the container that receives `item`'s expand and collapse
    /// notifications.
    ///
    /// # Errors
    ///
    /// Returns an error if the item or its container is disposed.
    pub fn parent<I: Expandable>(&self, item: I) -> Result<WidgetId> {
        self.exec.try_run(move |ui| item.container(ui))
    }

    /// Returns the tool tip of `item`'s container; items have none of their
    /// own.
    ///
    /// # Errors
    ///
    /// Returns an error if the item or its container is disposed.
    pub fn tooltip_text<I: Expandable>(&self, item: I) -> Result<Option<String>> {
        self.exec.try_run(move |ui| ui.tooltip_text(item.container(ui)?))
    }

    /// Returns the label of `item`.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is disposed.
    pub fn text<I: Expandable>(&self, item: I) -> Result<String> {
        self.exec.try_run(move |ui| ui.text(item.id()))
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Expands `item`, then blocks for `settle` to let the UI react.
    ///
    /// # Errors
    ///
    /// Returns an error if the item or its container is disposed.
    pub fn expand<I: Expandable>(&self, item: I, settle: impl Into<Duration>) -> Result<()> {
        let (label, expanded) = self.state(item)?;
        tracing::debug!("Expand {label}");
        if expanded {
            tracing::debug!("{label} is already expanded. No action performed");
            return Ok(());
        }

        self.synth.notify_item(EventType::Expand, item)?;
        self.exec.try_run(move |ui| ui.set_expanded(item.id(), true))?;
        wait::sleep(settle);
        tracing::info!("{label} has been expanded");
        Ok(())
    }

    /// Collapses `item`.
    ///
    /// # Errors
    ///
    /// Returns an error if the item or its container is disposed.
    pub fn collapse<I: Expandable>(&self, item: I) -> Result<()> {
        let (label, expanded) = self.state(item)?;
        tracing::debug!("Collapse {label}");
        if !expanded {
            tracing::debug!("{label} is already collapsed. No action performed");
            return Ok(());
        }

        self.exec.try_run(move |ui| ui.set_expanded(item.id(), false))?;
        self.synth.notify_item(EventType::Collapse, item)?;
        tracing::info!("{label} has been collapsed");
        Ok(())
    }

    /// Expands `item`, notifying `container` instead of the item's own
    /// container.
    ///
    /// Notifies and marks the item expanded even if it already is.
    ///
    /// # Errors
    ///
    /// Returns an error if the item or `container` is disposed.
    pub fn expand_in<I: Expandable>(&self, item: I, container: impl Widget) -> Result<()> {
        let (label, _) = self.state(item)?;
        tracing::debug!("Expand {label}");
        self.synth.notify(self.synth.event_for_item(EventType::Expand, item, container.id()))?;
        self.exec.try_run(move |ui| ui.set_expanded(item.id(), true))?;
        tracing::info!("{label} has been expanded");
        Ok(())
    }

    /// Collapses `item`, notifying `container` instead of the item's own
    /// container.
    ///
    /// Marks the item collapsed and notifies even if it already is collapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the item or `container` is disposed.
    pub fn collapse_in<I: Expandable>(&self, item: I, container: impl Widget) -> Result<()> {
        let (label, _) = self.state(item)?;
        tracing::debug!("Collapse {label}");
        self.exec.try_run(move |ui| ui.set_expanded(item.id(), false))?;
        self.synth.notify(self.synth.event_for_item(EventType::Collapse, item, container.id()))?;
        tracing::info!("{label} has been collapsed");
        Ok(())
    }

    /// Reads the item's log label and expanded state in one round trip.
    fn state<I: Expandable>(&self, item: I) -> Result<(String, bool)> {
        self.exec.try_run(move |ui| Ok((ui.label(item.id())?, ui.expanded(item.id())?)))
    }
}
