//! Single-page generation.

use std::path::Path;

use mdsite_renderer::{extract_title, markdown_to_html};

use crate::SiteError;
use crate::template::Template;

/// Generate one HTML page from a markdown file and a template.
///
/// Reads the source, converts it to HTML, extracts the title from the
/// first `# ` heading, substitutes both into the template, and writes the
/// result to `dest`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`SiteError::Convert`] if conversion or title extraction fails,
/// or [`SiteError::Io`] on read/write failure.
pub fn generate_page(source: &Path, template: &Template, dest: &Path) -> Result<(), SiteError> {
    tracing::info!(
        source = %source.display(),
        dest = %dest.display(),
        "Generating page"
    );

    let markdown = std::fs::read_to_string(source)?;

    let html = markdown_to_html(&markdown).map_err(|err| SiteError::Convert {
        path: source.to_path_buf(),
        source: err,
    })?;
    let title = extract_title(&markdown).map_err(|err| SiteError::Convert {
        path: source.to_path_buf(),
        source: err,
    })?;

    let page = template.apply(&title, &html);

    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(dest, page)?;

    Ok(())
}
