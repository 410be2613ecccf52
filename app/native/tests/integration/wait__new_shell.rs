//! Integration tests for new shell detection.
//!
//! ## Test Coverage
//! - A single new shell resolves the wait with that shell
//! - Closing the reference resolves the wait without a shell
//! - Two new shells keep the wait pending until it times out
//! - A pending wait resolves once only one new shell remains
//! - Waiting for a shell by title

use uibot_lib::condition::{NewShellOpenedOrClosed, ShellIsClosed};
use uibot_lib::lookup::TitleMatcher;

use crate::assert_timeout;
use crate::common::*;

#[test]
fn test_dialog_opened_by_action_is_returned() {
    let test = Test::new("new_shell_dialog");
    let main = test.open_shell("Main");

    let dialog = test
        .automation()
        .wait_for_new_shell(main, || {
            test.open_shell_later("Preferences", ACTION_DELAY);
            Ok(())
        })
        .unwrap()
        .expect("a dialog opened");

    assert_eq!(test.automation().shells().title(dialog).unwrap(), "Preferences");
    assert_eq!(test.automation().shells().active_shell().unwrap(), Some(dialog));
}

#[test]
fn test_closing_reference_resolves_without_shell() {
    let test = Test::new("new_shell_closed");
    let main = test.open_shell("Main");
    let dialog = test.open_shell("Confirm");

    let result = test.automation().wait_for_new_shell(dialog, || {
        test.close_shell_later(dialog, ACTION_DELAY);
        Ok(())
    });

    assert_eq!(result.unwrap(), None);
    assert_eq!(test.automation().shells().shells().unwrap(), vec![main]);
}

#[test]
fn test_two_new_shells_are_ambiguous() {
    let test = Test::new("new_shell_ambiguous");
    let main = test.open_shell("Main");

    let condition = NewShellOpenedOrClosed::capture(test.automation().shells().clone(), main)
        .unwrap();
    test.open_shell("First");
    test.open_shell("Second");

    let result = test.automation().wait_until(condition).timeout(SHORT_TIMEOUT).run();
    assert_timeout!(result, "a new shell is opened or");
}

#[test]
fn test_ambiguous_wait_resolves_when_narrowed_to_one() {
    let test = Test::new("new_shell_narrowed");
    let main = test.open_shell("Main");
    test.open_shell("Outline");

    let condition = NewShellOpenedOrClosed::capture(test.automation().shells().clone(), main)
        .unwrap();
    let kept = test.open_shell("Kept");
    let dropped = test.open_shell("Dropped");
    test.close_shell_later(dropped, ACTION_DELAY);

    let start = std::time::Instant::now();
    let result = test.automation().wait_until(condition).timeout(RESOLVE_TIMEOUT).run();
    assert_eq!(result.unwrap(), Some(kept));
    assert!(start.elapsed() >= ACTION_DELAY);
}

#[test]
fn test_shells_open_before_capture_are_not_new() {
    let test = Test::new("new_shell_preexisting");
    let main = test.open_shell("Main");
    test.open_shell("Already open");

    let result = test.automation().wait_for_new_shell(main, || Ok(()));
    assert!(result.unwrap_err().is_timeout());
}

#[test]
fn test_wait_for_shell_by_title() {
    let test = Test::new("new_shell_title");
    test.open_shell("Main");
    test.open_shell_later("Save Resource", ACTION_DELAY);

    let matcher = TitleMatcher::regex("^Save .*$").unwrap();
    let shell = test.automation().wait_for_shell(matcher).unwrap();
    assert_eq!(test.automation().shells().title(shell).unwrap(), "Save Resource");
}

#[test]
fn test_wait_until_shell_is_closed() {
    let test = Test::new("new_shell_while");
    let dialog = test.open_shell("Progress");
    test.close_shell_later(dialog, ACTION_DELAY);

    let closed = ShellIsClosed::new(test.automation().shells().clone(), dialog);
    test.automation().wait_until(closed).timeout(RESOLVE_TIMEOUT).run().unwrap();
    assert!(test.automation().widgets().is_disposed(dialog).unwrap());
}
