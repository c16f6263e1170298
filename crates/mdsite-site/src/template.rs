//! Page template loading and placeholder substitution.

use std::path::Path;

use crate::SiteError;

/// Title placeholder, replaced with the document's first h1 text.
const TITLE_PLACEHOLDER: &str = "{{ Title }}";
/// Content placeholder, replaced with the rendered HTML body.
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// An HTML page template with literal `{{ Title }}` and `{{ Content }}`
/// placeholders.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    /// Load a template from a file.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Io`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let source = std::fs::read_to_string(path)?;
        Ok(Self { source })
    }

    /// Create a template from an in-memory string.
    #[must_use]
    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Substitute title and content into the template.
    ///
    /// Plain string replacement of every occurrence of the placeholders;
    /// no escaping is applied.
    #[must_use]
    pub fn apply(&self, title: &str, content: &str) -> String {
        self.source
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content)
    }
}
