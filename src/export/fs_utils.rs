// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, warning};
use std::path::Path;

/// Overwrite guard for every file the console writes.
///
/// A missing target, or `force`, passes straight through. An existing
/// target is only replaced after a yes on stdin.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    if !confirm("Overwrite?")? {
        return Err(AppError::Export(format!(
            "cancelled: {} was kept",
            path.display()
        )));
    }
    info("Existing file will be overwritten.");
    Ok(())
}
