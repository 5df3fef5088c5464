//! Convenience wrappers around basic filesystem operations
//!
//! Ensures files and directories exist, reads and writes text, bytes, and
//! JSON-encoded values, and lists directory contents flat or recursively.
//! Every operation is a direct, blocking pass-through to the host filesystem
//! with light error wrapping; the library keeps no state between calls.

pub mod ensure;
pub mod error;
pub mod list;
pub mod options;
pub mod read;
pub mod write;

pub use ensure::{ensure_dir, ensure_dir_with, ensure_file, ensure_file_with, exists};
pub use error::{Error, Result};
pub use list::{read_dir, read_dir_recursive};
pub use options::{CreateOptions, DEFAULT_DIR_MODE, DEFAULT_FILE_MODE};
pub use read::{file_size, read_bytes, read_json, read_text};
pub use write::{
    write_bytes, write_bytes_with, write_json, write_json_with, write_text, write_text_with,
};
