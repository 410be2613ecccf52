//! Widget lookup.
//!
//! - [`shell`] - Open shells, snapshots of them and title matching

pub mod shell;

pub use shell::{ShellLookup, ShellSnapshot, TitleMatcher};
