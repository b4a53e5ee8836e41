/// Tests for recursive materialization and per-subtree failure isolation.
///
/// A node that fails construction is recorded by name and skipped together
/// with its whole subtree; siblings and the rest of the import continue.
use crate::materializer::{ImportFailures, Materializer};
use serde_json::json;
use sketchport_document::DocumentStore;
use sketchport_portable::{Frame, PortableNode};

fn store() -> DocumentStore {
    DocumentStore::new("materializer-tests")
}

fn shape(name: &str, width: f64) -> PortableNode {
    PortableNode::new("shapeGroup")
        .with_name(name)
        .with_frame(Frame::new(0.0, 0.0, width, 30.0))
}

fn group(name: &str) -> PortableNode {
    PortableNode::new("group")
        .with_name(name)
        .with_frame(Frame::new(0.0, 0.0, 200.0, 200.0))
}

/// Text without content fails construction
fn broken_text(name: &str) -> PortableNode {
    PortableNode::new("text")
        .with_name(name)
        .with_frame(Frame::new(0.0, 0.0, 10.0, 10.0))
}

#[test]
fn test_materializes_nested_tree() {
    let mut store = store();
    let mut failures = ImportFailures::new();
    let tree = group("Outer")
        .with_child(shape("First", 10.0))
        .with_child(group("Inner").with_child(shape("Deep", 5.0)));

    let layer = Materializer::standard()
        .materialize(&mut store, &tree, &mut failures)
        .expect("tree should materialize");

    assert!(failures.is_empty());
    assert_eq!(layer.name, "Outer");
    assert_eq!(layer.subtree_len(), 4);

    // Children keep original order
    assert_eq!(layer.children()[0].name, "First");
    assert_eq!(layer.children()[1].name, "Inner");
    assert_eq!(layer.children()[1].children()[0].name, "Deep");
}

#[test]
fn test_failure_isolation_skips_subtree() {
    let mut store = store();
    let mut failures = ImportFailures::new();
    let tree = group("Root")
        .with_child(shape("Before", 10.0))
        .with_child(broken_text("Bad").with_child(shape("Orphan", 5.0)))
        .with_child(shape("After", 10.0));

    let layer = Materializer::standard()
        .materialize(&mut store, &tree, &mut failures)
        .expect("root should materialize");

    // The failing node and its descendant are gone; siblings survive
    assert_eq!(layer.children().len(), 2);
    assert_eq!(layer.children()[0].name, "Before");
    assert_eq!(layer.children()[1].name, "After");

    // Only the failing node itself is reported; its subtree was never
    // attempted
    assert_eq!(failures.names(), ["Bad"]);
}

#[test]
fn test_root_failure_returns_none() {
    let mut store = store();
    let mut failures = ImportFailures::new();
    let tree = broken_text("Bad").with_child(shape("Child", 10.0));

    let result = Materializer::standard().materialize(&mut store, &tree, &mut failures);

    assert!(result.is_none());
    assert_eq!(failures.names(), ["Bad"]);
}

#[test]
fn test_failures_accumulate_in_preorder() {
    let mut store = store();
    let mut failures = ImportFailures::new();
    let tree = group("Root")
        .with_child(broken_text("First").with_child(broken_text("Never")))
        .with_child(shape("Fine", 10.0))
        .with_child(broken_text("Second"));

    Materializer::standard()
        .materialize(&mut store, &tree, &mut failures)
        .expect("root should materialize");

    assert_eq!(failures.names(), ["First", "Second"]);
}

#[test]
fn test_caller_tree_is_never_mutated() {
    let mut store = store();
    let mut failures = ImportFailures::new();
    let tree = group("Root").with_child(
        shape("Styled", 10.0).with_field(
            "style",
            json!({"fills": [{"fillType": 4}]}),
        ),
    );
    let before = tree.clone();

    Materializer::standard()
        .materialize(&mut store, &tree, &mut failures)
        .expect("tree should materialize");

    // Fixups and identity assignment happened on a copy
    assert_eq!(tree, before);
}

#[test]
fn test_layers_get_fresh_identities() {
    let mut store = store();
    let mut failures = ImportFailures::new();
    let mut node = shape("Rect", 10.0);
    node.object_id = Some("portable-id".to_string());
    let tree = group("Root").with_child(node);

    let layer = Materializer::standard()
        .materialize(&mut store, &tree, &mut failures)
        .expect("tree should materialize");

    let child = &layer.children()[0];
    assert_ne!(child.id, "portable-id");
    assert_ne!(child.id, layer.id);
}
