//! uibot - UI-thread synchronization and wait conditions for GUI test automation.
//!
//! Test code runs on its own threads while every widget lives on the single UI
//! thread of a [`Display`](toolkit::Display). This crate marshals work onto
//! that thread, synthesizes the events a user would cause, drives expandable
//! items through their state machine and waits for conditions with a bounded
//! time budget.
//!
//! - [`toolkit`] - In-process widget toolkit with its UI thread
//! - [`exec`] - Synchronous execution on the UI thread
//! - [`synth`] - Event synthesis
//! - [`handler`] - Widget and expandable item handlers
//! - [`lookup`] - Shell enumeration and title matching
//! - [`wait`] - The wait engine
//! - [`condition`] - Conditions for the wait engine
//! - [`automation`] - The context bundling all of the above
//! - [`config`] - JSONC configuration
//! - [`cli`] - Command-line interface

pub mod automation;
pub mod cli;
pub mod condition;
pub mod config;
pub mod core;
pub mod exec;
pub mod handler;
pub mod logging;
pub mod lookup;
pub mod synth;
pub mod toolkit;
pub mod wait;

pub use crate::core::prelude;
