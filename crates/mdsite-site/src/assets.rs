//! Static-asset copying.

use std::fs;
use std::path::Path;

use crate::SiteError;

/// Recursively mirror a directory tree into `dest`.
///
/// Returns the number of files copied. A missing source directory is
/// logged and skipped rather than treated as an error, since a site
/// without static assets is valid.
///
/// # Errors
///
/// Returns [`SiteError::Io`] on any read, create, or copy failure.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<usize, SiteError> {
    if !src.exists() {
        tracing::warn!(src = %src.display(), "Source directory does not exist, skipping");
        return Ok(0);
    }

    if !dest.exists() {
        fs::create_dir_all(dest)?;
        tracing::debug!(dest = %dest.display(), "Created directory");
    }

    let mut entries: Vec<_> = fs::read_dir(src)?.collect::<Result<Vec<_>, _>>()?;
    // Sorted traversal keeps builds reproducible across platforms.
    entries.sort_by_key(std::fs::DirEntry::file_name);

    let mut copied = 0;
    for entry in entries {
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());
        if src_path.is_dir() {
            copied += copy_dir_recursive(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path)?;
            tracing::debug!(
                src = %src_path.display(),
                dest = %dest_path.display(),
                "Copied file"
            );
            copied += 1;
        }
    }

    Ok(copied)
}
