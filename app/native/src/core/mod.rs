//! Core infrastructure for uibot.
//!
//! - [`error`] - Unified error types
//! - [`constants`] - Application constants and timing defaults
//! - [`prelude`] - Common re-exports for convenience

pub mod constants;
pub mod error;
pub mod prelude;

pub use error::{Error, Result};
