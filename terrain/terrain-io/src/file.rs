//! Whole-file text reads and writes.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{IoError, IoResult};

/// Read a UTF-8 text file, mapping a missing file to [`IoError::FileNotFound`].
pub(crate) fn read_text(path: &Path) -> IoResult<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })
}

/// Write `contents` to `path` in one call.
///
/// Callers build the complete output before calling this, so a failed
/// conversion never leaves a half-written file behind.
pub(crate) fn write_text(path: &Path, contents: &str) -> IoResult<()> {
    fs::write(path, contents)?;
    Ok(())
}
