//! Common test utilities and framework re-exports.
//!
//! This module re-exports the test framework for convenient use in test files.

#![allow(dead_code)]

use std::time::Duration;

pub use uibot_lib::prelude::*;

pub use crate::framework::*;

/// Wait timeout used by tests that expect a wait to resolve.
pub const RESOLVE_TIMEOUT: Duration = Duration::from_secs(2);

/// Wait timeout used by tests that expect a wait to time out.
pub const SHORT_TIMEOUT: Duration = Duration::from_millis(200);

/// Delay before a helper thread acts on the display.
pub const ACTION_DELAY: Duration = Duration::from_millis(50);

/// Asserts that a result is a wait timeout whose message names `$condition`.
#[macro_export]
macro_rules! assert_timeout {
    ($result:expr, $condition:expr) => {{
        match $result {
            Err(err) if err.is_timeout() => {
                let message = err.to_string();
                assert!(
                    message.contains($condition),
                    "timeout message {message:?} does not mention {:?}",
                    $condition
                );
            }
            Err(err) => panic!("expected a timeout, got error: {err}"),
            Ok(value) => panic!("expected a timeout, got {value:?}"),
        }
    }};
}
