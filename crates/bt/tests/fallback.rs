mod common;

use bt::{BtError, Fallback, TreeManager};
use common::*;

#[test]
fn empty_fallback_always_succeeds() {
    let mut tree = TreeManager::new();
    tree.make_node(Fallback::new("fallback", vec![])).unwrap();

    for _ in 0..3 {
        assert_eq!(tree.tick().unwrap(), Success);
    }
}

#[test]
fn child_from_another_tree_is_rejected() {
    let log = tick_log();
    let mut other = TreeManager::new();
    let foreign = other.make_node(Scripted::always("a", &log, Success)).unwrap();

    let mut tree = TreeManager::new();
    let a = tree.make_node(Scripted::always("a", &log, Success)).unwrap();
    let err = tree
        .make_node(Fallback::new("fallback", vec![a, foreign]))
        .unwrap_err();

    assert!(matches!(err, BtError::InvalidChild { child, .. } if child == foreign));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.node_id("fallback"), None);
}

#[test]
fn running_child_is_ticked_again() {
    let log = tick_log();
    let mut tree = TreeManager::new();
    let a = tree.make_node(Scripted::new("a", &log, [Running, Running], Success)).unwrap();
    let b = tree.make_node(Scripted::always("b", &log, Success)).unwrap();
    tree.make_node(Fallback::new("fallback", vec![a, b])).unwrap();

    assert_eq!(tree.tick().unwrap(), Running);
    assert_eq!(tree.tick().unwrap(), Running);
    assert_eq!(ticked(&log), vec!["a", "a"]);
}

#[test]
fn succeeds_as_soon_as_a_child_succeeds() {
    let log = tick_log();
    let mut tree = TreeManager::new();
    let a = tree.make_node(Scripted::new("a", &log, [Running, Success], Failure)).unwrap();
    let b = tree.make_node(Scripted::always("b", &log, Success)).unwrap();
    tree.make_node(Fallback::new("fallback", vec![a, b])).unwrap();

    assert_eq!(tree.tick().unwrap(), Running);
    assert_eq!(tree.tick().unwrap(), Success);
    assert_eq!(ticked(&log), vec!["a", "a"]);
}

#[test]
fn failure_moves_on_to_next_child() {
    let log = tick_log();
    let mut tree = TreeManager::new();
    let a = tree.make_node(Scripted::new("a", &log, [Failure], Success)).unwrap();
    let b = tree.make_node(Scripted::new("b", &log, [Success], Failure)).unwrap();
    tree.make_node(Fallback::new("fallback", vec![a, b])).unwrap();

    assert_eq!(tree.tick().unwrap(), Running);
    assert_eq!(tree.tick().unwrap(), Success);
    assert_eq!(ticked(&log), vec!["a", "b"]);
}

#[test]
fn fails_when_every_child_failed() {
    let log = tick_log();
    let mut tree = TreeManager::new();
    let a = tree.make_node(Scripted::new("a", &log, [Failure], Success)).unwrap();
    let b = tree.make_node(Scripted::new("b", &log, [Failure], Success)).unwrap();
    tree.make_node(Fallback::new("fallback", vec![a, b])).unwrap();

    assert_eq!(tree.tick().unwrap(), Running);
    assert_eq!(tree.tick().unwrap(), Failure);
}

#[test]
fn failed_child_is_not_retried_within_an_activation() {
    let log = tick_log();
    let mut tree = TreeManager::new();
    let a = tree.make_node(Scripted::new("a", &log, [Failure], Success)).unwrap();
    let b = tree.make_node(Scripted::always("b", &log, Running)).unwrap();
    tree.make_node(Fallback::new("fallback", vec![a, b])).unwrap();

    for _ in 0..3 {
        assert_eq!(tree.tick().unwrap(), Running);
    }
    assert_eq!(ticked(&log), vec!["a", "b", "b"]);
}

#[test]
fn tick_after_failure_starts_a_new_activation() {
    let log = tick_log();
    let mut tree = TreeManager::new();
    let a = tree.make_node(Scripted::new("a", &log, [Failure, Success], Success)).unwrap();
    let b = tree.make_node(Scripted::always("b", &log, Failure)).unwrap();
    tree.make_node(Fallback::new("fallback", vec![a, b])).unwrap();

    assert_eq!(tree.tick().unwrap(), Running);
    assert_eq!(tree.tick().unwrap(), Failure);
    assert_eq!(tree.tick().unwrap(), Success);
    assert_eq!(ticked(&log), vec!["a", "b", "a"]);
}
