// In: src/storage.rs

//! Thin file-system collaborator for the codec: whole-file byte reads and
//! writes. Deliberately free of any codec logic.

use std::fs;
use std::path::Path;

use crate::error::RunpackError;

/// Reads an entire file into a byte buffer.
pub fn read_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>, RunpackError> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    log::debug!("read {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Writes a byte buffer to a file, replacing any existing contents.
pub fn write_bytes(path: impl AsRef<Path>, data: &[u8]) -> Result<(), RunpackError> {
    let path = path.as_ref();
    fs::write(path, data)?;
    log::debug!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("runpack-test-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let path = temp_path("roundtrip.bin");
        let data = vec![0xDE, 0xAD, 0xBE, 0xEF];
        write_bytes(&path, &data).unwrap();
        assert_eq!(read_bytes(&path).unwrap(), data);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let result = read_bytes(temp_path("does-not-exist.bin"));
        assert!(matches!(result, Err(RunpackError::Io(_))));
    }
}
