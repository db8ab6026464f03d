//! Where finished documents go.
//!
//! The generator only produces the HTML string. Showing or printing it is
//! the job of a `DocumentSink`: the backend turns it into an HTTP response,
//! the frontend into a print window, tests capture it.

pub trait DocumentSink {
    fn render(&mut self, html: String);
}

/// Keeps every document it receives.
#[derive(Debug, Default, Clone)]
pub struct CapturingSink {
    documents: Vec<String>,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn documents(&self) -> &[String] {
        &self.documents
    }

    pub fn last(&self) -> Option<&str> {
        self.documents.last().map(String::as_str)
    }
}

impl DocumentSink for CapturingSink {
    fn render(&mut self, html: String) {
        self.documents.push(html);
    }
}
