use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest input file accepted (snapshots and config files), 64 MB
pub const MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Fails if `path` exists and is a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A path that does not exist passes.
pub fn reject_symlink(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(metadata) if metadata.is_symlink() => anyhow::bail!(
            "Security: {} is a symbolic link. Symbolic links are not followed.",
            path.display()
        ),
        _ => Ok(()),
    }
}

/// Reads a regular file to a string after rejecting symlinks, directories
/// and files larger than [`MAX_FILE_SIZE`]
///
/// `description` names the file in error messages (e.g. "data file").
pub fn read_regular_file(path: &Path, description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Symbolic links are not followed.",
            path.display()
        );
    }
    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }
    if metadata.len() > MAX_FILE_SIZE {
        anyhow::bail!(
            "{} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            MAX_FILE_SIZE
        );
    }

    fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", description, e))
}
