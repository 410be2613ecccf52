//! Widget handlers.
//!
//! Handlers are the operations test code calls. Each one reads or mutates
//! widgets through the [`SyncExecutor`](crate::exec::SyncExecutor) and, where
//! real input would, synthesizes the matching events.
//!
//! - [`expand`] - Expand and collapse of expand bar items and tree items
//! - [`widget`] - Text, tool tip, enablement and selection of any widget

pub mod expand;
pub mod widget;

pub use expand::ExpandHandler;
pub use widget::WidgetHandler;
