//! The UI-thread token and widget accessors.
//!
//! [`Ui`] exists only on a display's UI thread: it is installed when the
//! thread starts and cannot be sent to another thread. Every widget read or
//! mutation goes through it, which is what confines the widget tree to the UI
//! thread.
//!
//! Accessors borrow the tree only for the duration of the access itself, so
//! listeners invoked from [`Ui::notify_listeners`] may freely read and mutate
//! widgets (including the one that fired the event).

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use super::event::{Event, EventType};
use super::tree::{Listener, WidgetTree};
use super::widget::{
    Button, ExpandBar, ExpandItem, Shell, Tree, TreeItem, Widget, WidgetId, WidgetKind,
};
use crate::core::{Error, Result};

thread_local! {
    static CURRENT: RefCell<Option<Ui>> = const { RefCell::new(None) };
}

/// Access to the widget tree of the display owning the current thread.
#[derive(Clone)]
pub struct Ui {
    tree: Rc<RefCell<WidgetTree>>,
    epoch: Instant,
}

impl Ui {
    /// Installs a fresh, empty widget tree on the current thread.
    pub(crate) fn install(epoch: Instant) -> Self {
        let ui = Self {
            tree: Rc::new(RefCell::new(WidgetTree::default())),
            epoch,
        };
        CURRENT.with(|current| *current.borrow_mut() = Some(ui.clone()));
        ui
    }

    /// Removes the widget tree from the current thread.
    pub(crate) fn uninstall() { CURRENT.with(|current| current.borrow_mut().take()); }

    /// Returns the token of the current thread, if it is a UI thread.
    #[must_use]
    pub fn current() -> Option<Self> { CURRENT.with(|current| current.borrow().clone()) }

    /// Returns the token of the current thread or an invalid-thread error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidThreadAccess`] when called off the UI thread.
    pub fn require() -> Result<Self> {
        Self::current().ok_or_else(|| {
            Error::thread_access(format!(
                "thread '{}' is not a UI thread",
                std::thread::current().name().unwrap_or("<unnamed>")
            ))
        })
    }

    /// Display timestamp in milliseconds, wrapping like the toolkit's own
    /// event times.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn timestamp(&self) -> u32 { self.epoch.elapsed().as_millis() as u32 }

    fn read<R>(&self, f: impl FnOnce(&WidgetTree) -> Result<R>) -> Result<R> {
        f(&self.tree.borrow())
    }

    fn write<R>(&self, f: impl FnOnce(&mut WidgetTree) -> Result<R>) -> Result<R> {
        f(&mut self.tree.borrow_mut())
    }

    // ========================================================================
    // Widget creation and disposal
    // ========================================================================

    /// Opens a new top-level shell and makes it the active one.
    pub fn open_shell(&self, title: &str) -> Shell {
        Shell::new(self.tree.borrow_mut().create_shell(title))
    }

    /// Closes a shell: notifies its `Close` listeners, then disposes it and
    /// everything it contains.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell is already disposed.
    pub fn close_shell(&self, shell: Shell) -> Result<()> {
        let event = Event {
            kind: EventType::Close,
            detail: super::event::detail::NONE,
            time: self.timestamp(),
            item: None,
            widget: shell.id(),
        };
        self.notify_listeners(shell.id(), &event)?;
        self.write(|tree| tree.dispose(shell.id()))?;
        Ok(())
    }

    /// Creates an expand bar inside a shell.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell is disposed.
    pub fn create_expand_bar(&self, parent: Shell) -> Result<ExpandBar> {
        self.write(|tree| tree.create(WidgetKind::ExpandBar, Some(parent.id()), ""))
            .map(ExpandBar::new)
    }

    /// Creates a collapsed item at the end of an expand bar.
    ///
    /// # Errors
    ///
    /// Returns an error if the bar is disposed.
    pub fn create_expand_item(&self, bar: ExpandBar, text: &str) -> Result<ExpandItem> {
        self.write(|tree| tree.create(WidgetKind::ExpandItem, Some(bar.id()), text))
            .map(ExpandItem::new)
    }

    /// Creates a tree inside a shell.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell is disposed.
    pub fn create_tree(&self, parent: Shell) -> Result<Tree> {
        self.write(|tree| tree.create(WidgetKind::Tree, Some(parent.id()), "")).map(Tree::new)
    }

    /// Creates a collapsed tree item, either at the root of `tree` or under
    /// `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree or parent item is disposed.
    pub fn create_tree_item(
        &self,
        tree: Tree,
        parent: Option<TreeItem>,
        text: &str,
    ) -> Result<TreeItem> {
        let parent_id = parent.map_or_else(|| tree.id(), |item| item.id());
        self.write(|widgets| widgets.create(WidgetKind::TreeItem, Some(parent_id), text))
            .map(TreeItem::new)
    }

    /// Creates a push button inside a shell.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell is disposed.
    pub fn create_button(&self, parent: Shell, text: &str) -> Result<Button> {
        self.write(|tree| tree.create(WidgetKind::Button, Some(parent.id()), text))
            .map(Button::new)
    }

    /// Returns true if the widget no longer exists.
    #[must_use]
    pub fn is_disposed(&self, widget: impl Into<WidgetId>) -> bool {
        !self.tree.borrow().contains(widget.into())
    }

    // ========================================================================
    // Widget state
    // ========================================================================

    /// Returns the family of a widget.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn kind(&self, widget: impl Into<WidgetId>) -> Result<WidgetKind> {
        let id = widget.into();
        self.read(|tree| Ok(tree.get(id)?.kind))
    }

    /// Returns the widget's text (title for shells, label for items).
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn text(&self, widget: impl Into<WidgetId>) -> Result<String> {
        let id = widget.into();
        self.read(|tree| Ok(tree.get(id)?.text.clone()))
    }

    /// Returns a readable name for log lines: the widget's kind and text, such
    /// as `Expand Bar Item General`.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn label(&self, widget: impl Into<WidgetId>) -> Result<String> {
        let id = widget.into();
        self.read(|tree| {
            let widget = tree.get(id)?;
            Ok(format!("{} {}", widget.kind, widget.text))
        })
    }

    /// Replaces the widget's text.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn set_text(&self, widget: impl Into<WidgetId>, text: &str) -> Result<()> {
        let id = widget.into();
        self.write(|tree| {
            text.clone_into(&mut tree.get_mut(id)?.text);
            Ok(())
        })
    }

    /// Returns the widget's tool tip text.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn tooltip_text(&self, widget: impl Into<WidgetId>) -> Result<Option<String>> {
        let id = widget.into();
        self.read(|tree| Ok(tree.get(id)?.tooltip.clone()))
    }

    /// Replaces the widget's tool tip text.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn set_tooltip_text(
        &self,
        widget: impl Into<WidgetId>,
        tooltip: Option<&str>,
    ) -> Result<()> {
        let id = widget.into();
        self.write(|tree| {
            tree.get_mut(id)?.tooltip = tooltip.map(str::to_string);
            Ok(())
        })
    }

    /// Returns whether the widget is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn is_enabled(&self, widget: impl Into<WidgetId>) -> Result<bool> {
        let id = widget.into();
        self.read(|tree| Ok(tree.get(id)?.enabled))
    }

    /// Enables or disables the widget. Emits no event.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn set_enabled(&self, widget: impl Into<WidgetId>, enabled: bool) -> Result<()> {
        let id = widget.into();
        self.write(|tree| {
            tree.get_mut(id)?.enabled = enabled;
            Ok(())
        })
    }

    /// Returns whether an item is expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is disposed.
    pub fn expanded(&self, widget: impl Into<WidgetId>) -> Result<bool> {
        let id = widget.into();
        self.read(|tree| Ok(tree.get(id)?.expanded))
    }

    /// Sets the expanded state of an item. Like the toolkit's own setter,
    /// this emits no event.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is disposed.
    pub fn set_expanded(&self, widget: impl Into<WidgetId>, expanded: bool) -> Result<()> {
        let id = widget.into();
        self.write(|tree| {
            tree.get_mut(id)?.expanded = expanded;
            Ok(())
        })
    }

    /// Returns the direct parent of a widget (`None` for shells).
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn parent(&self, widget: impl Into<WidgetId>) -> Result<Option<WidgetId>> {
        let id = widget.into();
        self.read(|tree| Ok(tree.get(id)?.parent))
    }

    /// Returns the expand bar owning an expand item.
    ///
    /// # Errors
    ///
    /// Returns an error if the item or its bar is disposed.
    pub fn expand_item_parent(&self, item: ExpandItem) -> Result<ExpandBar> {
        self.read(|tree| tree.ancestor_of_kind(item.id(), WidgetKind::ExpandBar))
            .map(ExpandBar::new)
    }

    /// Returns the tree owning a tree item, however deeply it is nested.
    ///
    /// # Errors
    ///
    /// Returns an error if the item or its tree is disposed.
    pub fn owning_tree(&self, item: TreeItem) -> Result<Tree> {
        self.read(|tree| tree.ancestor_of_kind(item.id(), WidgetKind::Tree)).map(Tree::new)
    }

    // ========================================================================
    // Shells
    // ========================================================================

    /// Returns the open shells in the order they were opened.
    #[must_use]
    pub fn shells(&self) -> Vec<Shell> {
        self.tree.borrow().shells().iter().copied().map(Shell::new).collect()
    }

    /// Returns the active shell, if any shell is open.
    #[must_use]
    pub fn active_shell(&self) -> Option<Shell> {
        self.tree.borrow().active_shell().map(Shell::new)
    }

    /// Makes `shell` the active shell.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell is disposed.
    pub fn activate(&self, shell: Shell) -> Result<()> {
        self.write(|tree| tree.activate(shell.id()))
    }

    // ========================================================================
    // Listeners
    // ========================================================================

    /// Registers a listener for events of `kind` on `widget`.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn add_listener(
        &self,
        widget: impl Into<WidgetId>,
        kind: EventType,
        listener: impl Fn(&Self, &Event) + 'static,
    ) -> Result<()> {
        let id = widget.into();
        let listener: Listener = Rc::new(listener);
        self.write(|tree| tree.add_listener(id, kind, listener))
    }

    /// Delivers `event` to every listener registered on `widget` for the
    /// event's type, in registration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the widget is disposed.
    pub fn notify_listeners(&self, widget: impl Into<WidgetId>, event: &Event) -> Result<()> {
        let id = widget.into();
        let listeners = self.read(|tree| tree.listeners(id, event.kind))?;
        for listener in listeners {
            listener(self, event);
        }
        Ok(())
    }
}

impl std::fmt::Debug for Ui {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ui").field("shells", &self.shells()).finish_non_exhaustive()
    }
}
