//! Integration tests for synchronous execution on the UI thread.
//!
//! ## Test Coverage
//! - Values computed on the UI thread reach the caller
//! - Reads see the UI state at the moment they run, not when they were queued
//! - Calls from many threads are serialized
//! - Panics on the UI thread resurface on the caller
//! - Calls after disposal fail with `DisplayDisposed`

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, mpsc};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::common::*;

#[test]
fn test_value_round_trips_from_ui_thread() {
    let test = Test::new("sync_value");
    let shell = test.open_shell("Main");

    let (title, thread) = test.on_ui(move |ui| {
        let title = ui.text(shell).unwrap();
        (title, std::thread::current().name().map(str::to_string))
    });

    assert_eq!(title, "Main");
    assert_eq!(thread.as_deref(), Some("ui-sync_value"));
}

#[test]
fn test_read_sees_state_when_it_runs_on_ui_thread() {
    let test = Test::new("sync_ordering");
    let item = test.workbench(&["General"]).items[0];
    let exec = test.automation().exec().clone();

    let (release, blocked) = mpsc::channel::<()>();
    exec.run_later(move |_| {
        let _ = blocked.recv();
    })
    .unwrap();
    let before = exec.submit(move |ui| ui.expanded(item).unwrap()).unwrap();
    exec.run_later(move |ui| ui.set_expanded(item, true).unwrap()).unwrap();
    release.send(()).unwrap();

    assert!(!before.wait().unwrap());
    assert!(exec.run(move |ui| ui.expanded(item).unwrap()).unwrap());
}

#[test]
fn test_calls_from_many_threads_are_serialized() {
    let test = Test::new("sync_many");
    let counter = Arc::new(AtomicUsize::new(0));
    let in_flight = Arc::new(AtomicUsize::new(0));

    let handles = (0..8)
        .map(|_| {
            let exec = test.automation().exec().clone();
            let counter = Arc::clone(&counter);
            let in_flight = Arc::clone(&in_flight);
            std::thread::spawn(move || {
                for _ in 0..25 {
                    let counter = Arc::clone(&counter);
                    let in_flight = Arc::clone(&in_flight);
                    exec.run(move |_| {
                        assert_eq!(in_flight.fetch_add(1, Ordering::SeqCst), 0);
                        counter.fetch_add(1, Ordering::SeqCst);
                        in_flight.fetch_sub(1, Ordering::SeqCst);
                    })
                    .unwrap();
                }
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(counter.load(Ordering::SeqCst), 200);
}

#[test]
fn test_panic_on_ui_thread_reaches_caller_and_display_survives() {
    let test = Test::new("sync_panic");
    let exec = test.automation().exec().clone();

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        exec.run(|_| -> u32 { panic!("listener failed") })
    }));
    let payload = result.unwrap_err();
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"listener failed"));

    let shell = test.open_shell("Still alive");
    assert_eq!(test.automation().shells().title(shell).unwrap(), "Still alive");
}

#[test]
fn test_call_after_shutdown_is_display_disposed() {
    let mut test = Test::new("sync_disposed");
    let exec = test.automation().exec().clone();
    test.cleanup();

    let err = exec.run(|ui| ui.shells()).unwrap_err();
    assert!(matches!(err, Error::DisplayDisposed));
}

#[test]
fn test_synthesized_selection_runs_listeners() {
    let test = Test::new("sync_select");
    let shell = test.open_shell("Main");
    let clicks = Arc::new(AtomicUsize::new(0));

    let sink = Arc::clone(&clicks);
    let button = test.on_ui(move |ui| {
        let button = ui.create_button(shell, "OK").unwrap();
        ui.add_listener(button, EventType::Selection, move |_, _| {
            sink.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
        button
    });

    test.automation().widgets().select(button).unwrap();
    test.automation().events().select(button).unwrap();
    assert_eq!(clicks.load(Ordering::SeqCst), 2);
}
