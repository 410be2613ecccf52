//! Toolkit event records.
//!
//! Event type codes and detail values match the ones the toolkit itself uses
//! for real input, so listeners cannot tell a synthesized event from a
//! genuine one.

use std::fmt;

use super::widget::WidgetId;

/// Event detail values.
pub mod detail {
    /// No detail.
    pub const NONE: u32 = 0;
}

/// Type of a toolkit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    KeyDown,
    KeyUp,
    MouseDown,
    MouseUp,
    Dispose,
    Selection,
    DefaultSelection,
    /// An item is about to be expanded.
    Expand,
    /// An item has been collapsed.
    Collapse,
    Close,
    Modify,
    Activate,
    /// Application-defined type code.
    Custom(u32),
}

impl EventType {
    /// Returns the numeric type code of this event type.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Self::KeyDown => 1,
            Self::KeyUp => 2,
            Self::MouseDown => 3,
            Self::MouseUp => 4,
            Self::Dispose => 12,
            Self::Selection => 13,
            Self::DefaultSelection => 14,
            Self::Expand => 17,
            Self::Collapse => 18,
            Self::Close => 21,
            Self::Modify => 24,
            Self::Activate => 26,
            Self::Custom(code) => code,
        }
    }

    /// Maps a numeric type code back to an event type.
    ///
    /// Unknown codes become [`EventType::Custom`].
    #[must_use]
    pub const fn from_code(code: u32) -> Self {
        match code {
            1 => Self::KeyDown,
            2 => Self::KeyUp,
            3 => Self::MouseDown,
            4 => Self::MouseUp,
            12 => Self::Dispose,
            13 => Self::Selection,
            14 => Self::DefaultSelection,
            17 => Self::Expand,
            18 => Self::Collapse,
            21 => Self::Close,
            24 => Self::Modify,
            26 => Self::Activate,
            other => Self::Custom(other),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(code) => write!(f, "Custom({code})"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// An event delivered to listeners.
///
/// Built fresh for every dispatch and handed to listeners by reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    /// Event type.
    pub kind: EventType,
    /// Type-specific detail code.
    pub detail: u32,
    /// Display timestamp in milliseconds.
    pub time: u32,
    /// The item the event is about, if any.
    pub item: Option<WidgetId>,
    /// The widget whose listeners receive the event.
    pub widget: WidgetId,
}
