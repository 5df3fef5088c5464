//! Write helpers: bytes, text, and JSON documents

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::options::DEFAULT_FILE_MODE;
use crate::{CreateOptions, Error, Result};

/// Write `content` to the file at `path`, creating or truncating it.
///
/// Prior content is fully replaced; there is no append mode. The parent
/// directory must already exist, and a newly created file gets the host's
/// default creation mode.
pub fn write_bytes(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    const OP: &str = "write_bytes";
    let path = path.as_ref();

    tracing::trace!("writing {} bytes to {}", content.len(), path.display());

    let mut file = File::create(path).map_err(|e| Error::io(OP, path, e))?;
    file.write_all(content).map_err(|e| Error::io(OP, path, e))?;
    Ok(())
}

/// `write_bytes` with explicit creation options (default mode `0o644`).
///
/// The mode is applied when the file is created; an existing file keeps its
/// mode, matching POSIX open-with-mode semantics.
pub fn write_bytes_with(
    path: impl AsRef<Path>,
    content: &[u8],
    options: CreateOptions,
) -> Result<()> {
    const OP: &str = "write_bytes";
    let path = path.as_ref();

    tracing::trace!("writing {} bytes to {}", content.len(), path.display());

    let mut open = OpenOptions::new();
    open.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        open.mode(options.mode_or(DEFAULT_FILE_MODE));
    }
    #[cfg(not(unix))]
    let _ = options;

    let mut file = open.open(path).map_err(|e| Error::io(OP, path, e))?;
    file.write_all(content).map_err(|e| Error::io(OP, path, e))?;
    Ok(())
}

/// Write `content` to the file at `path` as text.
pub fn write_text(path: impl AsRef<Path>, content: &str) -> Result<()> {
    write_bytes(path, content.as_bytes())
}

/// `write_text` with explicit creation options.
pub fn write_text_with(path: impl AsRef<Path>, content: &str, options: CreateOptions) -> Result<()> {
    write_bytes_with(path, content.as_bytes(), options)
}

/// Serialize `value` as compact JSON and write it to the file at `path`.
pub fn write_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    const OP: &str = "write_json";
    let path = path.as_ref();
    let content = serde_json::to_vec(value).map_err(|e| Error::json(OP, path, e))?;
    write_bytes(path, &content)
}

/// `write_json` with explicit creation options.
pub fn write_json_with<T: Serialize>(
    path: impl AsRef<Path>,
    value: &T,
    options: CreateOptions,
) -> Result<()> {
    const OP: &str = "write_json";
    let path = path.as_ref();
    let content = serde_json::to_vec(value).map_err(|e| Error::json(OP, path, e))?;
    write_bytes_with(path, &content, options)
}
