/// Unix permission bits for generated package files.
///
/// On platforms without Unix modes the target must still exist, but the
/// mode change itself is skipped.
use crate::error::{Result, ScanError};
use std::path::Path;

/// Set the permission bits of `path` to `mode` (e.g. `0o744`).
#[cfg(unix)]
pub fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .map_err(|e| ScanError::io("cannot change permissions of", path, e))?;
    tracing::debug!("Set mode {mode:o} on {}", path.display());
    Ok(())
}

/// Set the permission bits of `path` to `mode` (e.g. `0o744`).
#[cfg(not(unix))]
pub fn set_mode(path: &Path, mode: u32) -> Result<()> {
    std::fs::metadata(path).map_err(|e| ScanError::io("cannot change permissions of", path, e))?;
    tracing::debug!(
        "Skipping mode {mode:o} on {}: no Unix permissions on this platform",
        path.display()
    );
    Ok(())
}
