//! Site generation for mdsite.
//!
//! The page builder sits around the conversion core: it loads the page
//! template, walks the content tree, converts each markdown file with
//! [`mdsite_renderer`], substitutes title and content into the template,
//! and mirrors the static-asset directory into the output.

mod assets;
mod generator;
mod page;
mod template;

use std::path::PathBuf;

use mdsite_renderer::ConvertError;

pub use assets::copy_dir_recursive;
pub use generator::{BuildSummary, SitePaths, build_site, generate_pages};
pub use page::generate_page;
pub use template::Template;

/// Site generation error.
///
/// Page generation is fail-fast: the first failing document aborts the
/// build. One document is processed per conversion call, so a failure
/// never corrupts state for other documents.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The content directory does not exist.
    #[error("Content directory not found: {}", .0.display())]
    ContentDirNotFound(PathBuf),

    /// I/O error.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Markdown conversion failed for a source file.
    #[error("Failed to convert {}: {source}", path.display())]
    Convert {
        /// Source file that failed.
        path: PathBuf,
        /// Underlying conversion error.
        #[source]
        source: ConvertError,
    },
}
