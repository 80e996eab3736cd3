// directory walker - finds candidate source files under a root

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::utils::matches_extension;

/// lazily yield every file under `root` (any depth) whose name ends with `extension`.
///
/// symlinks are not descended into. anything that isn't a directory is a
/// candidate, so a symlink to a file is yielded and so is a dangling one
/// (reading it fails later). traversal errors come through as `Err` items
/// so the caller decides whether to stop.
pub fn walk<'a>(root: &Path, extension: &'a str) -> impl Iterator<Item = Result<PathBuf>> + 'a {
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => {
                let wanted = !entry.path().is_dir() && matches_extension(entry.path(), extension);
                wanted.then(|| Ok(entry.into_path()))
            }
            Err(e) => {
                let location = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "<unknown>".to_string());
                Some(Err(anyhow!(e).context(format!("failed to walk {location}"))))
            }
        })
}
