use crate::error::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const SKIPPED_DIRS: &[&str] = &[".git", "node_modules", "vendor"];

/// Find every git repository at or below `root`, in walk order.
///
/// A repository is a directory holding a `.git` directory. Nested
/// repositories are reported too.
pub fn find_repositories(root: &Path) -> Result<Vec<PathBuf>> {
    let root = root.canonicalize()?;
    let mut found = Vec::new();

    let walker = WalkBuilder::new(&root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            let name = entry.file_name().to_string_lossy();
            !SKIPPED_DIRS.contains(&&*name)
        })
        .build();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|t| t.is_dir()) {
            continue;
        }
        if entry.path().join(".git").is_dir() {
            debug!(repo = %entry.path().display(), "found repository");
            found.push(entry.path().to_path_buf());
        }
    }

    Ok(found)
}
