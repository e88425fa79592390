use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{ConvertError, Result};
use crate::model::record::WordRootRecord;

/// Writes `records` to `path` as one pretty-printed JSON array, creating the
/// parent directory if needed.
pub fn write_records(records: &[WordRootRecord], path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir).map_err(|e| write_error(dir, e))?;
            info!(dir = %dir.display(), "created output directory");
        }
    }

    let json = serde_json::to_string_pretty(records).map_err(|e| write_error(path, e))?;

    write_atomic(path, json.as_bytes()).map_err(|e| write_error(path, e))
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let tmp = tmp_path(path);

    if let Err(e) = fs::write(&tmp, bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    // Rename replaces the target on unix. Platforms that refuse to rename onto
    // an existing file get one retry after the old file is removed.
    let renamed = fs::rename(&tmp, path).or_else(|e| {
        if path.is_file() {
            fs::remove_file(path)?;
            fs::rename(&tmp, path)
        } else {
            Err(e)
        }
    });

    if renamed.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    renamed
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut p = path.to_path_buf();
    let file_name = match path.file_name().and_then(|s| s.to_str()) {
        Some(n) => n.to_string(),
        None => "wordroot".to_string(),
    };
    p.set_file_name(format!("{file_name}.tmp"));
    p
}

fn write_error(path: &Path, err: impl std::fmt::Display) -> ConvertError {
    ConvertError::Write {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}
