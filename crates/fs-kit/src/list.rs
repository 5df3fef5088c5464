//! Directory listing, flat and recursive

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{Error, Result};

/// List the immediate child names of the directory at `path`.
///
/// Names only, not full paths, files and subdirectories alike. The order is
/// unspecified and callers must not depend on it.
pub fn read_dir(path: impl AsRef<Path>) -> Result<Vec<String>> {
    const OP: &str = "read_dir";
    let path = path.as_ref();

    let mut names = Vec::new();
    for entry in fs::read_dir(path).map_err(|e| Error::io(OP, path, e))? {
        let entry = entry.map_err(|e| Error::io(OP, path, e))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

/// List every regular file in the tree rooted at `path`.
///
/// Returned paths are `path` joined with the relative descent components.
/// Directories themselves are excluded; only the files they transitively
/// contain appear. The order is unspecified. Any error during the descent
/// fails the whole call and accumulated results are discarded.
pub fn read_dir_recursive(path: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    const OP: &str = "read_dir_recursive";
    let root = path.as_ref();

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| walk_error(OP, root, e))?;
        if entry.file_type().is_dir() {
            continue;
        }
        files.push(entry.into_path());
    }
    Ok(files)
}

fn walk_error(op: &'static str, root: &Path, err: walkdir::Error) -> Error {
    let path = err.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
    match err.into_io_error() {
        Some(source) => Error::io(op, path, source),
        None => Error::Io {
            op,
            path,
            source: std::io::Error::other("filesystem loop detected"),
        },
    }
}
