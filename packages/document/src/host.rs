//! Host UI primitives consumed as opaque calls: transient messages,
//! blocking alerts, and the viewport-fit trigger.

/// What the import engine needs from the surrounding host application
pub trait HostContext {
    /// Show a transient, non-blocking message
    fn message(&self, text: &str);

    /// Show a blocking alert with literal text
    fn alert(&self, title: &str, body: &str);

    /// Fit the viewport to the document content
    fn zoom_to_fit(&self);
}

/// Host that swallows everything. Useful for embedding and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl HostContext for NullHost {
    fn message(&self, _text: &str) {}

    fn alert(&self, _title: &str, _body: &str) {}

    fn zoom_to_fit(&self) {}
}
