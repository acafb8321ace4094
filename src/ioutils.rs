//! A set of helpers for working with the file system.

use std::path::Path;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Writes text to `dest_path`, creating missing parent directories.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Copies a file byte-for-byte, creating missing parent directories.
/// Permission bits travel with the copy.
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source_path: P, dest_path: Q) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(source_path.as_ref(), dest_path).map(|_| ()).map_err(Error::IoError)
}

/// Applies the permission bits of `source_path` to `dest_path`.
pub fn copy_permissions<P: AsRef<Path>, Q: AsRef<Path>>(source_path: P, dest_path: Q) -> Result<()> {
    let permissions = std::fs::metadata(source_path.as_ref())?.permissions();
    std::fs::set_permissions(dest_path.as_ref(), permissions).map_err(Error::IoError)
}

/// Reads a file as text. Returns `None` when the content is not valid UTF-8.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let bytes = std::fs::read(path.as_ref())?;
    Ok(String::from_utf8(bytes).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_file_creates_parents() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("a/b/c.txt");

        write_file("content", &target).unwrap();
        assert_eq!(std::fs::read_to_string(target).unwrap(), "content");
    }

    #[test]
    fn test_read_text_rejects_binary() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blob.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00, 0x81]).unwrap();

        assert_eq!(read_text(&path).unwrap(), None);
    }
}
