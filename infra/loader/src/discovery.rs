use crate::error::{LoaderError, LoaderErrorExt};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Lists every file under `root` whose extension is `extension`, sorted by path.
///
/// Symlinked files are listed; symlinked directories are not descended into.
/// The first unreadable entry aborts the walk.
pub(crate) fn discover(root: &Path, extension: &str) -> Result<Vec<PathBuf>, LoaderError> {
    let mut found = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.context(format!("Failed to walk source root: {}", root.display()))?;
        if is_unit(&entry, extension) {
            found.push(entry.into_path());
        }
    }

    found.sort();
    debug!(root = %root.display(), count = found.len(), "Discovered source units");
    Ok(found)
}

fn is_unit(entry: &DirEntry, extension: &str) -> bool {
    let path = entry.path();
    !entry.file_type().is_dir()
        && path.extension().and_then(OsStr::to_str) == Some(extension)
        && path.is_file()
}
