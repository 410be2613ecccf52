//! Integration tests for wait budgets and timeouts.
//!
//! ## Test Coverage
//! - Timeout errors carry the condition description
//! - Tolerated timeouts return no result
//! - Configured defaults apply to waits without an explicit budget
//! - Errors raised by a condition abort the wait

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use uibot_lib::condition::from_fn;

use crate::assert_timeout;
use crate::common::*;

#[test]
fn test_timeout_error_names_the_condition() {
    let test = Test::new("timeout_message");

    let result = test
        .automation()
        .wait_until(from_fn("the build turns green", || Ok(false)))
        .timeout(SHORT_TIMEOUT)
        .run();
    assert_timeout!(result, "until the build turns green");

    let result = test
        .automation()
        .wait_while(from_fn("the spinner spins", || Ok(true)))
        .timeout(SHORT_TIMEOUT)
        .run();
    assert_timeout!(result, "while the spinner spins");
}

#[test]
fn test_tolerated_timeout_returns_none() {
    let test = Test::new("timeout_tolerated");

    let start = Instant::now();
    let result = test
        .automation()
        .wait_until(from_fn("never", || Ok(false)))
        .timeout(SHORT_TIMEOUT)
        .fail_on_timeout(false)
        .run()
        .unwrap();

    assert_eq!(result, None);
    assert!(start.elapsed() >= SHORT_TIMEOUT);
}

#[test]
fn test_configured_budget_applies() {
    let mut config = Test::fast_config("timeout_config");
    config.wait.timeout_ms = 150;
    let test = Test::with_config("timeout_config", config);

    let start = Instant::now();
    let result = test.automation().wait_until(from_fn("never", || Ok(false))).run();
    let elapsed = start.elapsed();

    assert!(result.unwrap_err().is_timeout());
    assert!(elapsed >= Duration::from_millis(150));
    assert!(elapsed < Duration::from_secs(2));
}

#[test]
fn test_condition_set_elsewhere_resolves_the_wait() {
    let test = Test::new("timeout_resolves");
    let flag = Arc::new(AtomicBool::new(false));

    let setter = Arc::clone(&flag);
    std::thread::spawn(move || {
        std::thread::sleep(ACTION_DELAY);
        setter.store(true, Ordering::SeqCst);
    });

    let result = test
        .automation()
        .wait_until(from_fn("the flag is set", move || Ok(flag.load(Ordering::SeqCst))))
        .timeout(RESOLVE_TIMEOUT)
        .run();
    assert_eq!(result.unwrap(), Some(()));
}

#[test]
fn test_condition_error_aborts_the_wait() {
    let mut test = Test::new("timeout_error");
    let shell = test.open_shell("Main");
    let lookup = test.automation().shells().clone();
    test.cleanup();

    let start = Instant::now();
    let result = WaitUntil::new(from_fn("main has a title", move || {
        lookup.title(shell).map(|title| !title.is_empty())
    }))
    .timeout(RESOLVE_TIMEOUT)
    .run();

    assert!(matches!(result, Err(Error::DisplayDisposed)));
    assert!(start.elapsed() < RESOLVE_TIMEOUT);
}
