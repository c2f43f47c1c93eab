//! Shared utilities for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Write `content` to a temporary route file that lives as long as the handle.
pub fn route_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
