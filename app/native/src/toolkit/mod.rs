//! In-process widget toolkit driven by a single UI thread.
//!
//! - [`display`] - The display and its UI thread event loop
//! - [`ui`] - The UI-thread token through which widgets are read and mutated
//! - [`widget`] - Typed widget handles
//! - [`event`] - Event records and type codes
//!
//! Widget state never leaves the UI thread. Other threads hold only handles
//! and reach the state by posting work to the [`Display`].

pub mod display;
pub mod event;
mod tree;
pub mod ui;
pub mod widget;

pub use display::{Display, Job};
pub use event::{Event, EventType, detail};
pub use tree::Listener;
pub use ui::Ui;
pub use widget::{
    Button, ExpandBar, ExpandItem, Expandable, Shell, Tree, TreeItem, Widget, WidgetId, WidgetKind,
};
