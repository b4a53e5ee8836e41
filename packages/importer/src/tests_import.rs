/// Tests for the import orchestrator: batch classification, placement,
/// summary messaging, and the end-to-end partial-failure contract.
use crate::import::{import_files, ImportOptions, PLACEMENT_GAP};
use sketchport_document::{DocumentStore, HostContext, LayerContainer, NativeLayer};
use sketchport_portable::{Frame, PortableFile, PortableNode};
use std::cell::RefCell;

/// Host double that records every notification
#[derive(Debug, Default)]
struct RecordingHost {
    messages: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
    zooms: RefCell<usize>,
}

impl HostContext for RecordingHost {
    fn message(&self, text: &str) {
        self.messages.borrow_mut().push(text.to_string());
    }

    fn alert(&self, _title: &str, body: &str) {
        self.alerts.borrow_mut().push(body.to_string());
    }

    fn zoom_to_fit(&self) {
        *self.zooms.borrow_mut() += 1;
    }
}

fn store() -> DocumentStore {
    DocumentStore::new("import-tests")
}

fn shape(name: &str, width: f64) -> PortableNode {
    PortableNode::new("shapeGroup")
        .with_name(name)
        .with_frame(Frame::new(0.0, 0.0, width, 30.0))
}

/// Text without content fails construction
fn broken_text(name: &str) -> PortableNode {
    PortableNode::new("text")
        .with_name(name)
        .with_frame(Frame::new(0.0, 0.0, 10.0, 10.0))
}

fn page_file(layers: Vec<PortableNode>) -> PortableFile {
    PortableFile {
        class: "page".to_string(),
        name: None,
        assets: Default::default(),
        layer_text_styles: Default::default(),
        layer_styles: Default::default(),
        layers,
    }
}

fn document_file() -> PortableFile {
    serde_json::from_value(serde_json::json!({
        "_class": "document",
        "assets": {"colors": [{"red": 1.0, "green": 0.0, "blue": 0.0, "alpha": 1.0}]},
    }))
    .unwrap()
}

#[test]
fn test_placement_on_empty_page() {
    let mut store = store();
    let host = RecordingHost::default();
    let files = [page_file(vec![
        shape("A", 50.0),
        shape("B", 30.0),
        shape("C", 20.0),
    ])];

    let summary = import_files(&mut store, &host, &files, &ImportOptions::default()).unwrap();

    assert_eq!(summary.imported_layers, 3);
    let page = store.current_page();
    let xs: Vec<f64> = page.layers().iter().map(|l| l.frame.x).collect();
    assert_eq!(xs, [100.0, 250.0, 380.0]);
    assert!(page.layers().iter().all(|l| l.frame.y == 0.0));
}

#[test]
fn test_placement_after_existing_content() {
    let mut store = store();
    let host = RecordingHost::default();
    store.current_page_mut().attach(NativeLayer::new(
        "existing",
        "shapeGroup",
        "Existing",
        Frame::new(10.0, 7.0, 40.0, 40.0),
    ));

    import_files(
        &mut store,
        &host,
        &[page_file(vec![shape("New", 25.0)])],
        &ImportOptions::default(),
    )
    .unwrap();

    let page = store.current_page();
    let placed = &page.layers()[1];
    // Anchored 100 units right of the widest existing right edge, at its y
    assert_eq!(placed.frame.x, 50.0 + PLACEMENT_GAP);
    assert_eq!(placed.frame.y, 7.0);
}

#[test]
fn test_placement_tie_breaks_to_first_layer() {
    let mut store = store();
    let host = RecordingHost::default();
    // Both existing layers end at x = 50; the first one anchors y
    store.current_page_mut().attach(NativeLayer::new(
        "first",
        "shapeGroup",
        "First",
        Frame::new(0.0, 5.0, 50.0, 10.0),
    ));
    store.current_page_mut().attach(NativeLayer::new(
        "second",
        "shapeGroup",
        "Second",
        Frame::new(30.0, 9.0, 20.0, 10.0),
    ));

    import_files(
        &mut store,
        &host,
        &[page_file(vec![shape("New", 25.0)])],
        &ImportOptions::default(),
    )
    .unwrap();

    assert_eq!(store.current_page().layers()[2].frame.y, 5.0);
}

#[test]
fn test_placement_cursor_is_monotonic_across_failures() {
    let mut store = store();
    let host = RecordingHost::default();
    let files = [page_file(vec![
        shape("A", 50.0),
        broken_text("Bad"),
        shape("B", 20.0),
    ])];

    let summary = import_files(&mut store, &host, &files, &ImportOptions::default()).unwrap();

    assert_eq!(summary.imported_layers, 2);
    assert_eq!(summary.failures.names(), ["Bad"]);
    let xs: Vec<f64> = store
        .current_page()
        .layers()
        .iter()
        .map(|l| l.frame.x)
        .collect();
    assert_eq!(xs, [100.0, 250.0]);
}

#[test]
fn test_success_notification() {
    let mut store = store();
    let host = RecordingHost::default();

    import_files(
        &mut store,
        &host,
        &[page_file(vec![shape("A", 10.0)])],
        &ImportOptions::default(),
    )
    .unwrap();

    let messages = host.messages.borrow();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Import successful"));
    assert!(host.alerts.borrow().is_empty());
    assert_eq!(*host.zooms.borrow(), 1);
}

#[test]
fn test_singular_failure_alert() {
    let mut store = store();
    let host = RecordingHost::default();

    import_files(
        &mut store,
        &host,
        &[page_file(vec![shape("A", 10.0), broken_text("Bad")])],
        &ImportOptions::default(),
    )
    .unwrap();

    let alerts = host.alerts.borrow();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0], "One layer couldn't be imported and was skipped.");
    assert!(host.messages.borrow().is_empty());
}

#[test]
fn test_plural_failure_alert_cites_count() {
    let mut store = store();
    let host = RecordingHost::default();

    import_files(
        &mut store,
        &host,
        &[page_file(vec![
            broken_text("Bad 1"),
            shape("A", 10.0),
            broken_text("Bad 2"),
            broken_text("Bad 3"),
        ])],
        &ImportOptions::default(),
    )
    .unwrap();

    let alerts = host.alerts.borrow();
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0], "3 layers couldn't be imported and were skipped.");
}

#[test]
fn test_document_only_batch_merges_without_notifying() {
    let mut store = store();
    let host = RecordingHost::default();

    let summary = import_files(
        &mut store,
        &host,
        &[document_file()],
        &ImportOptions::default(),
    )
    .unwrap();

    let counts = summary.merged.expect("document file merged");
    assert_eq!(counts.colors, 1);
    assert_eq!(summary.imported_layers, 0);

    // Page-content notifications only fire for page-level imports
    assert!(host.messages.borrow().is_empty());
    assert!(host.alerts.borrow().is_empty());
    assert_eq!(*host.zooms.borrow(), 0);
}

#[test]
fn test_replace_shared_assets_option() {
    let mut store = store();
    let host = RecordingHost::default();
    store.add_color(sketchport_document::SharedColor::new(0.0, 0.0, 0.0, 1.0));

    import_files(
        &mut store,
        &host,
        &[document_file()],
        &ImportOptions {
            replace_shared_assets: true,
        },
    )
    .unwrap();

    assert_eq!(store.colors().len(), 1);
    assert_eq!(store.colors()[0].red, 1.0);
}

#[test]
fn test_last_seen_page_file_wins() {
    let mut store = store();
    let host = RecordingHost::default();
    let files = [
        page_file(vec![shape("From First", 10.0)]),
        page_file(vec![shape("From Second", 10.0)]),
    ];

    import_files(&mut store, &host, &files, &ImportOptions::default()).unwrap();

    let page = store.current_page();
    assert_eq!(page.layer_count(), 1);
    assert_eq!(page.layers()[0].name, "From Second");
}
