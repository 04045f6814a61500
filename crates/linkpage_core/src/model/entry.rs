//! Link entry model.

use serde::Serialize;

/// One link under a subarea: free-text description plus opaque URL.
///
/// The URL is never validated or normalized; it is carried verbatim and only
/// escaped at render time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    pub description: String,
    pub url: String,
}

impl Entry {
    pub fn new(description: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            url: url.into(),
        }
    }
}
