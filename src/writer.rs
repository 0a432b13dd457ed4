//! Atomic file writer
//!
//! Tempfile + rename so downstream consumers never observe a half-written
//! manifest or completion marker.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::MatrixResult;

/// Write content to a file atomically.
///
/// The temp file is created in the destination's parent directory so the
/// final rename stays on one filesystem.
pub fn atomic_write(path: &Path, content: &[u8]) -> MatrixResult<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let mut file = NamedTempFile::new_in(parent)?;
    file.write_all(content)?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
