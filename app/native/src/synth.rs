//! Event synthesis.
//!
//! Builds toolkit events for user-like gestures and delivers them to the
//! listeners of the widget that would receive them for real input. Expand and
//! collapse events are about an item but are delivered to its container
//! (expand bar or tree), so the target widget and the event's item differ.

use crate::core::Result;
use crate::exec::SyncExecutor;
use crate::toolkit::{Event, EventType, Expandable, Widget, WidgetId, detail};

/// Builds and dispatches synthesized events on the UI thread.
#[derive(Debug, Clone)]
pub struct EventSynthesizer {
    exec: SyncExecutor,
}

impl EventSynthesizer {
    #[must_use]
    pub const fn new(exec: SyncExecutor) -> Self { Self { exec } }

    /// Builds an event stamped with the display's current time.
    #[must_use]
    pub fn create_event(
        &self,
        kind: EventType,
        detail: u32,
        item: Option<WidgetId>,
        widget: WidgetId,
    ) -> Event {
        Event {
            kind,
            detail,
            time: self.exec.display().timestamp(),
            item,
            widget,
        }
    }

    /// Builds an expand/collapse style event about `item`, targeted at
    /// `container`.
    #[must_use]
    pub fn event_for_item<I: Expandable>(
        &self,
        kind: EventType,
        item: I,
        container: WidgetId,
    ) -> Event {
        self.create_event(kind, detail::NONE, Some(item.id()), container)
    }

    /// Delivers `event` to the listeners of `event.widget` on the UI thread.
    ///
    /// # Errors
    ///
    /// Returns an error if the target widget is disposed or the display is
    /// gone.
    pub fn notify(&self, event: Event) -> Result<()> {
        tracing::debug!(
            kind = %event.kind,
            widget = %event.widget,
            item = ?event.item,
            "dispatching event"
        );
        self.exec.try_run(move |ui| ui.notify_listeners(event.widget, &event))
    }

    /// Notifies the container of `item` with an event of `kind`.
    ///
    /// The container is resolved on the UI thread in the same round trip as
    /// the dispatch.
    ///
    /// # Errors
    ///
    /// Returns an error if the item or its container is disposed.
    pub fn notify_item<I: Expandable>(&self, kind: EventType, item: I) -> Result<()> {
        let time = self.exec.display().timestamp();
        tracing::debug!(%kind, ?item, "dispatching event to container");
        self.exec.try_run(move |ui| {
            let container = item.container(ui)?;
            let event = Event {
                kind,
                detail: detail::NONE,
                time,
                item: Some(item.id()),
                widget: container,
            };
            ui.notify_listeners(container, &event)
        })
    }

    /// Sends a `Selection` event to the widget itself, as a click would.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn select(&self, widget: impl Widget) -> Result<()> {
        self.notify(self.create_event(EventType::Selection, detail::NONE, None, widget.id()))
    }

    /// Sends an event with an application-defined type code to `widget`.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn custom(&self, code: u32, detail: u32, widget: impl Widget) -> Result<()> {
        self.notify(self.create_event(EventType::from_code(code), detail, None, widget.id()))
    }
}
