//! Integration tests for the expandable item state machine.
//!
//! ## Test Coverage
//! - Expand notifies before the state changes
//! - Collapse notifies after the state changes
//! - Repeated transitions are no-ops without events
//! - Explicit container variants notify on every call
//! - Tree items follow the same rules

use std::time::{Duration, Instant};

use uibot_lib::condition::ItemIsExpanded;

use crate::common::*;

#[test]
fn test_expand_notifies_before_mutation() {
    let test = Test::new("expand_order");
    let bench = test.workbench(&["General"]);
    let item = bench.items[0];

    test.automation().expand(item).unwrap();

    assert!(test.expanded(item));
    assert_eq!(bench.recorded(), vec![(EventType::Expand, item, false)]);
}

#[test]
fn test_collapse_notifies_after_mutation() {
    let test = Test::new("collapse_order");
    let bench = test.workbench(&["General"]);
    let item = bench.items[0];

    test.automation().expand(item).unwrap();
    test.automation().collapse(item).unwrap();

    assert!(!test.expanded(item));
    assert_eq!(
        bench.recorded(),
        vec![(EventType::Expand, item, false), (EventType::Collapse, item, false)]
    );
}

#[test]
fn test_repeated_transitions_are_noops() {
    let test = Test::new("expand_noop");
    let bench = test.workbench(&["General", "Advanced"]);
    let (first, second) = (bench.items[0], bench.items[1]);

    test.automation().collapse(first).unwrap();
    assert!(bench.recorded().is_empty());

    test.automation().expand(first).unwrap();
    test.automation().expand(first).unwrap();
    test.automation().expand(second).unwrap();
    test.automation().collapse(second).unwrap();
    test.automation().collapse(second).unwrap();

    assert_eq!(
        bench.recorded(),
        vec![
            (EventType::Expand, first, false),
            (EventType::Expand, second, false),
            (EventType::Collapse, second, false),
        ]
    );
}

#[test]
fn test_explicit_container_variants_notify_every_call() {
    let test = Test::new("expand_explicit");
    let bench = test.workbench(&["General"]);
    let item = bench.items[0];
    let handler = test.automation().expand_handler();

    handler.expand_in(item, bench.bar).unwrap();
    handler.expand_in(item, bench.bar).unwrap();
    assert!(test.expanded(item));
    handler.collapse_in(item, bench.bar).unwrap();
    handler.collapse_in(item, bench.bar).unwrap();
    assert!(!test.expanded(item));

    assert_eq!(
        bench.recorded(),
        vec![
            (EventType::Expand, item, false),
            (EventType::Expand, item, true),
            (EventType::Collapse, item, false),
            (EventType::Collapse, item, false),
        ]
    );
}

#[test]
fn test_queries_read_item_and_container() {
    let test = Test::new("expand_queries");
    let bench = test.workbench(&["General"]);
    let item = bench.items[0];
    let bar = bench.bar;
    test.on_ui(move |ui| ui.set_tooltip_text(bar, Some("Sections")).unwrap());

    let handler = test.automation().expand_handler();
    assert_eq!(handler.text(item).unwrap(), "General");
    assert_eq!(handler.parent(item).unwrap(), bar.id());
    assert_eq!(handler.tooltip_text(item).unwrap().as_deref(), Some("Sections"));
    assert!(!handler.is_expanded(item).unwrap());
}

#[test]
fn test_expand_settles_after_mutation() {
    let test = Test::new("expand_settle");
    let bench = test.workbench(&["General"]);
    let item = bench.items[0];

    let start = Instant::now();
    test.automation().expand_handler().expand(item, Duration::from_millis(100)).unwrap();
    assert!(start.elapsed() >= Duration::from_millis(100));
    assert!(test.expanded(item));

    let start = Instant::now();
    test.automation().expand_handler().expand(item, Duration::from_millis(500)).unwrap();
    assert!(start.elapsed() < Duration::from_millis(500));
}

#[test]
fn test_tree_items_follow_the_same_rules() {
    let test = Test::new("expand_tree");
    let shell = test.open_shell("Explorer");
    let (tree, root) = test.on_ui(move |ui| {
        let tree = ui.create_tree(shell).unwrap();
        let root = ui.create_tree_item(tree, None, "src").unwrap();
        ui.create_tree_item(tree, Some(root), "lib.rs").unwrap();
        (tree, root)
    });

    test.automation().expand(root).unwrap();
    assert!(test.expanded(root));
    assert_eq!(test.automation().expand_handler().parent(root).unwrap(), tree.id());
    test.automation().collapse(root).unwrap();
    assert!(!test.expanded(root));
}

#[test]
fn test_wait_for_item_expanded_elsewhere() {
    let test = Test::new("expand_wait");
    let bench = test.workbench(&["General"]);
    let item = bench.items[0];

    let exec = test.automation().exec().clone();
    std::thread::spawn(move || {
        std::thread::sleep(ACTION_DELAY);
        exec.try_run(move |ui| ui.set_expanded(item, true)).unwrap();
    });

    let condition = ItemIsExpanded::new(test.automation().expand_handler().clone(), item);
    let expanded = test.automation().wait_until(condition).timeout(RESOLVE_TIMEOUT).run();
    assert_eq!(expanded.unwrap(), Some(item));
}

#[test]
fn test_disposed_item_is_an_error() {
    let test = Test::new("expand_disposed");
    let bench = test.workbench(&["General"]);
    let (item, shell) = (bench.items[0], bench.shell);
    test.on_ui(move |ui| ui.close_shell(shell).unwrap());

    let err = test.automation().expand(item).unwrap_err();
    assert!(matches!(err, Error::WidgetDisposed(_)));
}
