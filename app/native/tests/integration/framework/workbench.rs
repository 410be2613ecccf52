//! A shell with an expand bar, built on the UI thread.

use std::sync::Arc;

use parking_lot::Mutex;
use uibot_lib::toolkit::{EventType, ExpandBar, ExpandItem, Shell, Ui, Widget};

/// Events seen by a listener: the event type, the item and whether the item
/// was expanded when the listener ran.
pub type EventLog = Arc<Mutex<Vec<(EventType, ExpandItem, bool)>>>;

/// Widgets of a test workbench.
#[derive(Debug, Clone)]
pub struct Workbench {
    pub shell: Shell,
    pub bar: ExpandBar,
    pub items: Vec<ExpandItem>,
    pub events: EventLog,
}

impl Workbench {
    /// Builds the workbench and registers expand and collapse listeners on the
    /// bar that record into [`Workbench::events`].
    pub fn build(ui: &Ui, labels: &[String]) -> Self {
        let shell = ui.open_shell("Workbench");
        let bar = ui.create_expand_bar(shell).expect("shell is open");
        let items = labels
            .iter()
            .map(|label| ui.create_expand_item(bar, label).expect("bar is alive"))
            .collect::<Vec<_>>();

        let events: EventLog = Arc::default();
        for kind in [EventType::Expand, EventType::Collapse] {
            let events = Arc::clone(&events);
            let items = items.clone();
            ui.add_listener(bar, kind, move |ui, event| {
                let Some(item) = items.iter().copied().find(|item| Some(item.id()) == event.item)
                else {
                    return;
                };
                let expanded = ui.expanded(item).expect("item is alive");
                events.lock().push((event.kind, item, expanded));
            })
            .expect("bar is alive");
        }

        Self {
            shell,
            bar,
            items,
            events,
        }
    }

    /// Returns a copy of the recorded events.
    pub fn recorded(&self) -> Vec<(EventType, ExpandItem, bool)> { self.events.lock().clone() }
}
