//! Idempotent existence checks and node creation

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::options::{ANCESTOR_DIR_MODE, DEFAULT_DIR_MODE, DEFAULT_FILE_MODE};
use crate::{CreateOptions, Error, Result};

/// Check whether any node (file or directory) exists at `path`.
///
/// A missing node is `Ok(false)`, not an error; only a failing existence
/// check itself (permission denied on an ancestor, for example) is reported
/// as an error.
pub fn exists(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io("exists", path, e)),
    }
}

/// Guarantee a regular file exists at `path`, creating it empty if missing.
///
/// Missing ancestor directories are created as well. An existing file is
/// left untouched, content and mode included.
pub fn ensure_file(path: impl AsRef<Path>) -> Result<()> {
    ensure_file_with(path, CreateOptions::new())
}

/// `ensure_file` with explicit creation options (default mode `0o644`).
///
/// Fails with [`Error::IsADirectory`] when `path` names a directory.
pub fn ensure_file_with(path: impl AsRef<Path>, options: CreateOptions) -> Result<()> {
    const OP: &str = "ensure_file";
    let path = path.as_ref();

    match fs::metadata(path) {
        Ok(meta) => {
            if meta.is_dir() {
                return Err(Error::IsADirectory {
                    op: OP,
                    path: path.to_path_buf(),
                });
            }
            return Ok(());
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(OP, path, e)),
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_with(parent, CreateOptions::new().mode(ANCESTOR_DIR_MODE))?;
    }

    tracing::debug!("creating file {}", path.display());

    let mut open = fs::OpenOptions::new();
    open.write(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        open.mode(options.mode_or(DEFAULT_FILE_MODE));
    }
    #[cfg(not(unix))]
    let _ = options;

    open.open(path).map_err(|e| Error::io(OP, path, e))?;
    Ok(())
}

/// Guarantee a directory exists at `path`, creating it and any missing
/// ancestors if needed.
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    ensure_dir_with(path, CreateOptions::new())
}

/// `ensure_dir` with explicit creation options (default mode `0o755`).
///
/// The options apply to `path` itself; implicitly created ancestors always
/// use `0o755`. Fails with [`Error::NotADirectory`] when `path` names a
/// regular file. Two concurrent callers may race past the existence check,
/// in which case the loser surfaces the OS already-exists error.
pub fn ensure_dir_with(path: impl AsRef<Path>, options: CreateOptions) -> Result<()> {
    const OP: &str = "ensure_dir";
    let path = path.as_ref();

    match fs::metadata(path) {
        Ok(meta) => {
            if !meta.is_dir() {
                return Err(Error::NotADirectory {
                    op: OP,
                    path: path.to_path_buf(),
                });
            }
            return Ok(());
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(OP, path, e)),
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_with(parent, CreateOptions::new().mode(ANCESTOR_DIR_MODE))?;
    }

    tracing::debug!("creating directory {}", path.display());

    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(options.mode_or(DEFAULT_DIR_MODE));
    }
    #[cfg(not(unix))]
    let _ = options;

    builder.create(path).map_err(|e| Error::io(OP, path, e))?;
    Ok(())
}
