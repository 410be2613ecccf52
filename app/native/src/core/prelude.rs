//! Common re-exports for convenience.
//!
//! # Usage
//!
//! ```ignore
//! use uibot_lib::core::prelude::*;
//! ```

pub use super::constants::{APP_NAME, APP_VERSION};
pub use super::error::{Error, Result};
pub use crate::automation::Automation;
pub use crate::condition::WaitCondition;
pub use crate::toolkit::{
    Display, Event, EventType, ExpandBar, ExpandItem, Shell, Ui, Widget, WidgetId,
};
pub use crate::wait::{TimePeriod, WaitUntil, WaitWhile};
