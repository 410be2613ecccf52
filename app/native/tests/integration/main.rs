//! Integration tests for uibot.
//!
//! Every test launches its own display on a dedicated UI thread and drives it
//! from the test thread, the way an automated GUI test would.
//!
//! ## Running Integration Tests
//!
//! ```bash
//! # Run all integration tests
//! cargo test -p uibot --test integration
//!
//! # Run specific test module
//! cargo test -p uibot --test integration wait__new_shell
//!
//! # Run with logs
//! RUST_LOG=uibot_lib=debug cargo test -p uibot --test integration -- --nocapture
//! ```
//!
//! ## Test Organization
//!
//! Tests follow the naming convention `<module>__<test_name>` to allow filtering by module:
//! - `sync__*` - Execution on the UI thread
//! - `expand__*` - Expandable item state machine
//! - `wait__*` - Wait engine and shell conditions

// Allow double-underscore naming for test modules (e.g., wait__new_shell)
#![allow(non_snake_case)]
// Relax clippy lints for integration tests - these are test utilities, not production code
#![allow(
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::redundant_clone,
    clippy::wildcard_imports
)]

mod common;
mod framework;

// Suite-level setup - runs before any test
#[ctor::ctor]
fn init_suite() { framework::init_suite(); }

mod sync__round_trip;

mod expand__state_machine;

mod wait__new_shell;
mod wait__timeout;
