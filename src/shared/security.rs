use crate::shared::error::ShelfError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a persisted token file (64 KiB)
///
/// Access tokens are a few hundred bytes; anything larger is not ours.
pub const MAX_TOKEN_FILE_SIZE: u64 = 64 * 1024;

/// Validates that an existing path is not a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A path that does not exist yet is accepted.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            anyhow::bail!(
                "Failed to read metadata for {} operation on {}: {}",
                operation,
                path.display(),
                e
            )
        }
    };

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates an identifier before it is placed in a URL path
///
/// Book ids, author ids and md5 hashes come from user input or server
/// payloads. They must not be able to escape their path segment.
///
/// # Arguments
/// * `component` - The raw value
/// * `component_type` - Human readable name for error messages (e.g. "Book id")
pub fn validate_path_component(component: &str, component_type: &str) -> Result<()> {
    let reason = if component.trim().is_empty() {
        Some("must not be empty")
    } else if component.contains('/') || component.contains('\\') {
        Some("contains path separators which are not allowed")
    } else if component.contains("..") {
        Some("contains '..' which is not allowed")
    } else if component.contains('#') || component.contains('?') || component.contains('@') {
        Some("contains URL-unsafe characters")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ShelfError::SecurityError {
            component: format!("{} '{}'", component_type, component),
            reason: reason.to_string(),
        }
        .into()),
        None => Ok(()),
    }
}
