//! Widget handles.
//!
//! A widget handle is an opaque, copyable identity into the live widget tree.
//! Handles never own the widget: the toolkit disposes widgets on its own
//! schedule, and any access through a stale handle reports
//! [`Error::WidgetDisposed`](crate::core::Error::WidgetDisposed).
//! Identifiers are never reused, so identity comparison of handles is stable
//! across the lifetime of a display.

use std::fmt;

use super::ui::Ui;
use crate::core::Result;

/// Raw identity of a widget in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self { Self(raw) }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn raw(self) -> u64 { self.0 }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "#{}", self.0) }
}

/// The family a widget belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Top-level window.
    Shell,
    /// Container of collapsible expand items.
    ExpandBar,
    /// A collapsible section of an expand bar.
    ExpandItem,
    /// Hierarchical list of tree items.
    Tree,
    /// A node of a tree.
    TreeItem,
    /// Push button.
    Button,
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Shell => "Shell",
            Self::ExpandBar => "Expand Bar",
            Self::ExpandItem => "Expand Bar Item",
            Self::Tree => "Tree",
            Self::TreeItem => "Tree Item",
            Self::Button => "Button",
        };
        f.write_str(name)
    }
}

/// Common behaviour of every typed widget handle.
pub trait Widget: Copy + Send + Sync + fmt::Debug + fmt::Display + 'static {
    /// The family of this handle.
    const KIND: WidgetKind;

    /// Returns the raw identity of the widget.
    fn id(&self) -> WidgetId;
}

/// Widgets with a two-state expanded/collapsed presentation.
///
/// Expand and collapse notifications for such items are delivered to their
/// container rather than to the item itself.
pub trait Expandable: Widget {
    /// Resolves the container whose listeners observe this item's
    /// expand/collapse notifications.
    ///
    /// # Errors
    ///
    /// Returns an error if the item or its container is disposed.
    fn container(&self, ui: &Ui) -> Result<WidgetId>;
}

macro_rules! widget_handle {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(WidgetId);

        impl $name {
            pub(crate) const fn new(id: WidgetId) -> Self { Self(id) }
        }

        impl Widget for $name {
            const KIND: WidgetKind = WidgetKind::$kind;

            fn id(&self) -> WidgetId { self.0 }
        }

        impl From<$name> for WidgetId {
            fn from(widget: $name) -> Self { widget.0 }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", WidgetKind::$kind, self.0)
            }
        }
    };
}

widget_handle!(
    /// Handle to a top-level window.
    Shell => Shell
);
widget_handle!(
    /// Handle to an expand bar.
    ExpandBar => ExpandBar
);
widget_handle!(
    /// Handle to an item of an expand bar.
    ExpandItem => ExpandItem
);
widget_handle!(
    /// Handle to a tree.
    Tree => Tree
);
widget_handle!(
    /// Handle to a tree item.
    TreeItem => TreeItem
);
widget_handle!(
    /// Handle to a push button.
    Button => Button
);

impl Expandable for ExpandItem {
    fn container(&self, ui: &Ui) -> Result<WidgetId> {
        ui.expand_item_parent(*self).map(Into::into)
    }
}

impl Expandable for TreeItem {
    fn container(&self, ui: &Ui) -> Result<WidgetId> { ui.owning_tree(*self).map(Into::into) }
}
