//! Read helpers: sizes, bytes, text, and JSON documents

use std::fs::{self, File};
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// Byte length of the file at `path`, as reported by metadata.
///
/// The content is not read.
pub fn file_size(path: impl AsRef<Path>) -> Result<u64> {
    const OP: &str = "file_size";
    let path = path.as_ref();
    let meta = fs::metadata(path).map_err(|e| Error::io(OP, path, e))?;
    Ok(meta.len())
}

/// Read the full content of the file at `path`.
///
/// The size is queried from metadata first and a buffer of exactly that
/// length is allocated, then filled by repeated buffered reads until it is
/// full or the stream ends. A file that grows after the size query is cut
/// off at the queried length; one that shrinks leaves the buffer tail
/// zero-filled. Not a consistent snapshot of a concurrently modified file.
pub fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    const OP: &str = "read_bytes";
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| Error::io(OP, path, e))?;
    let size = file_size(path)? as usize;

    let mut reader = BufReader::new(file);
    let mut content = vec![0u8; size];
    let mut total = 0;
    while total < size {
        match reader.read(&mut content[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(Error::io(OP, path, e)),
        }
    }
    Ok(content)
}

/// Read the file at `path` as text.
///
/// The raw bytes are decoded as UTF-8 lossily; invalid sequences are
/// replaced rather than rejected.
pub fn read_text(path: impl AsRef<Path>) -> Result<String> {
    let content = read_bytes(path)?;
    Ok(String::from_utf8_lossy(&content).into_owned())
}

/// Read the file at `path` and decode its content as a JSON document.
pub fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    const OP: &str = "read_json";
    let path = path.as_ref();
    let content = read_bytes(path)?;
    serde_json::from_slice(&content).map_err(|e| Error::json(OP, path, e))
}
