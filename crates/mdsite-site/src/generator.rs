//! Whole-site build orchestration.

use std::fs;
use std::path::{Path, PathBuf};

use crate::SiteError;
use crate::assets::copy_dir_recursive;
use crate::page::generate_page;
use crate::template::Template;

/// Filesystem layout of a site build.
#[derive(Debug, Clone)]
pub struct SitePaths {
    /// Source directory for markdown content.
    pub content_dir: PathBuf,
    /// Page template file.
    pub template: PathBuf,
    /// Static assets directory, copied verbatim into the output.
    pub static_dir: PathBuf,
    /// Output directory for the generated site.
    pub output_dir: PathBuf,
}

/// Counts reported by a completed build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    /// Pages generated from markdown sources.
    pub pages: usize,
    /// Static files copied into the output.
    pub assets: usize,
}

/// Build the whole site.
///
/// Removes any existing output directory, recreates it, copies static
/// assets (a missing static directory is skipped with a warning), then
/// generates pages recursively over the content tree. The first failing
/// page aborts the build.
///
/// # Errors
///
/// Returns [`SiteError::ContentDirNotFound`] if the content directory does
/// not exist, or the first page/asset error encountered.
pub fn build_site(paths: &SitePaths) -> Result<BuildSummary, SiteError> {
    if !paths.content_dir.exists() {
        return Err(SiteError::ContentDirNotFound(paths.content_dir.clone()));
    }

    let template = Template::load(&paths.template)?;

    if paths.output_dir.exists() {
        fs::remove_dir_all(&paths.output_dir)?;
        tracing::info!(dir = %paths.output_dir.display(), "Removed existing output directory");
    }
    fs::create_dir_all(&paths.output_dir)?;

    let assets = copy_dir_recursive(&paths.static_dir, &paths.output_dir)?;
    let pages = generate_pages(&paths.content_dir, &template, &paths.output_dir)?;

    tracing::info!(pages, assets, "Site generation complete");
    Ok(BuildSummary { pages, assets })
}

/// Recursively generate pages for every `.md` file under `content_dir`.
///
/// Each markdown file maps to the same relative path in `dest_dir` with an
/// `.html` extension; subdirectories are recursed into and non-markdown
/// files are ignored. Entries are processed in sorted order so builds are
/// deterministic. Returns the number of pages generated.
pub fn generate_pages(
    content_dir: &Path,
    template: &Template,
    dest_dir: &Path,
) -> Result<usize, SiteError> {
    let mut entries: Vec<_> = fs::read_dir(content_dir)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(std::fs::DirEntry::file_name);

    let mut pages = 0;
    for entry in entries {
        let path = entry.path();
        if path.is_dir() {
            pages += generate_pages(&path, template, &dest_dir.join(entry.file_name()))?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            let dest = dest_dir.join(entry.file_name()).with_extension("html");
            generate_page(&path, template, &dest)?;
            pages += 1;
        }
    }

    Ok(pages)
}
