//! Widget tree storage.
//!
//! The tree lives on the UI thread only; it is reached through [`Ui`] and is
//! never shared with other threads.

use std::collections::HashMap;
use std::rc::Rc;

use super::event::{Event, EventType};
use super::ui::Ui;
use super::widget::{WidgetId, WidgetKind};
use crate::core::{Error, Result};

/// Listener callback registered on a widget.
pub type Listener = Rc<dyn Fn(&Ui, &Event)>;

/// State of a single widget.
pub(crate) struct WidgetData {
    pub kind: WidgetKind,
    pub parent: Option<WidgetId>,
    pub children: Vec<WidgetId>,
    pub text: String,
    pub tooltip: Option<String>,
    pub enabled: bool,
    pub expanded: bool,
    listeners: HashMap<EventType, Vec<Listener>>,
}

impl WidgetData {
    fn new(kind: WidgetKind, parent: Option<WidgetId>, text: String) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
            text,
            tooltip: None,
            enabled: true,
            expanded: false,
            listeners: HashMap::new(),
        }
    }
}

/// All live widgets of one display.
#[derive(Default)]
pub(crate) struct WidgetTree {
    next_id: u64,
    widgets: HashMap<WidgetId, WidgetData>,
    /// Open shells in the order they were opened.
    shells: Vec<WidgetId>,
    active_shell: Option<WidgetId>,
}

impl WidgetTree {
    /// Creates a widget and links it under `parent`.
    pub fn create(
        &mut self,
        kind: WidgetKind,
        parent: Option<WidgetId>,
        text: impl Into<String>,
    ) -> Result<WidgetId> {
        if let Some(parent) = parent {
            self.get(parent)?;
        }
        Ok(self.insert(kind, parent, text.into()))
    }

    /// Creates a top-level shell and makes it the active one.
    pub fn create_shell(&mut self, title: &str) -> WidgetId {
        self.insert(WidgetKind::Shell, None, title.to_string())
    }

    fn insert(&mut self, kind: WidgetKind, parent: Option<WidgetId>, text: String) -> WidgetId {
        self.next_id += 1;
        let id = WidgetId::from_raw(self.next_id);
        self.widgets.insert(id, WidgetData::new(kind, parent, text));

        if let Some(data) = parent.and_then(|parent| self.widgets.get_mut(&parent)) {
            data.children.push(id);
        }
        if kind == WidgetKind::Shell {
            self.shells.push(id);
            self.active_shell = Some(id);
        }

        id
    }

    pub fn get(&self, id: WidgetId) -> Result<&WidgetData> {
        self.widgets.get(&id).ok_or(Error::WidgetDisposed(id))
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Result<&mut WidgetData> {
        self.widgets.get_mut(&id).ok_or(Error::WidgetDisposed(id))
    }

    pub fn contains(&self, id: WidgetId) -> bool { self.widgets.contains_key(&id) }

    /// Disposes a widget and all of its descendants.
    ///
    /// Returns the disposed ids, parent first.
    pub fn dispose(&mut self, id: WidgetId) -> Result<Vec<WidgetId>> {
        let parent = self.get(id)?.parent;
        if let Some(parent) = parent
            && let Ok(data) = self.get_mut(parent)
        {
            data.children.retain(|child| *child != id);
        }

        let mut disposed = Vec::new();
        let mut pending = vec![id];
        while let Some(next) = pending.pop() {
            if let Some(data) = self.widgets.remove(&next) {
                pending.extend(data.children.iter().rev());
                disposed.push(next);
            }
        }

        self.shells.retain(|shell| self.widgets.contains_key(shell));
        if self.active_shell.is_some_and(|active| !self.widgets.contains_key(&active)) {
            self.active_shell = self.shells.last().copied();
        }

        Ok(disposed)
    }

    pub fn shells(&self) -> &[WidgetId] { &self.shells }

    pub const fn active_shell(&self) -> Option<WidgetId> { self.active_shell }

    pub fn activate(&mut self, shell: WidgetId) -> Result<()> {
        if self.get(shell)?.kind != WidgetKind::Shell {
            return Err(Error::invalid_args(format!("{shell} is not a shell")));
        }
        self.active_shell = Some(shell);
        Ok(())
    }

    pub fn add_listener(
        &mut self,
        id: WidgetId,
        kind: EventType,
        listener: Listener,
    ) -> Result<()> {
        self.get_mut(id)?.listeners.entry(kind).or_default().push(listener);
        Ok(())
    }

    /// Returns a copy of the listener list so callers can invoke listeners
    /// without holding a borrow of the tree.
    pub fn listeners(&self, id: WidgetId, kind: EventType) -> Result<Vec<Listener>> {
        Ok(self.get(id)?.listeners.get(&kind).cloned().unwrap_or_default())
    }

    /// Walks up from `id` to the nearest ancestor of the given kind.
    pub fn ancestor_of_kind(&self, id: WidgetId, kind: WidgetKind) -> Result<WidgetId> {
        let mut current = self.get(id)?.parent;
        while let Some(candidate) = current {
            let data = self.get(candidate)?;
            if data.kind == kind {
                return Ok(candidate);
            }
            current = data.parent;
        }
        Err(Error::other(format!("{id} has no {kind} ancestor")))
    }
}
