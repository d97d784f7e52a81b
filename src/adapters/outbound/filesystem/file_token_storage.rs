use crate::ports::outbound::TokenStorage;
use crate::shared::error::ShelfError;
use crate::shared::security::{validate_not_symlink, MAX_TOKEN_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// FileTokenStorage adapter keeping the access token in a single file
///
/// The file holds the raw token and nothing else. Writes go through a
/// temporary file in the same directory and are renamed into place, so a
/// crash never leaves half a token behind. On Unix the file is readable
/// by the owner only.
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, details: impl Into<String>) -> anyhow::Error {
        ShelfError::TokenStorage {
            path: self.path.clone(),
            details: details.into(),
        }
        .into()
    }

    fn unreadable(&self, details: impl Into<String>) -> anyhow::Error {
        ShelfError::UnreadableToken {
            path: self.path.clone(),
            details: details.into(),
        }
        .into()
    }
}

impl TokenStorage for FileTokenStorage {
    fn get(&self) -> Result<Option<String>> {
        validate_not_symlink(&self.path, "read")?;

        let metadata = match fs::metadata(&self.path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.storage_error(e.to_string())),
        };
        if !metadata.is_file() {
            return Err(self.storage_error("not a regular file"));
        }
        if metadata.len() > MAX_TOKEN_FILE_SIZE {
            return Err(self.unreadable(format!(
                "{} bytes exceeds the {} byte limit",
                metadata.len(),
                MAX_TOKEN_FILE_SIZE
            )));
        }

        let bytes = fs::read(&self.path).map_err(|e| self.storage_error(e.to_string()))?;
        let content = String::from_utf8(bytes).map_err(|e| self.unreadable(e.to_string()))?;
        let token = content.trim();
        Ok((!token.is_empty()).then(|| token.to_string()))
    }

    fn set(&self, token: &str) -> Result<()> {
        validate_not_symlink(&self.path, "write")?;

        let parent = match self.path.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(|e| {
            self.storage_error(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;

        let mut staged =
            tempfile::NamedTempFile::new_in(&parent).map_err(|e| self.storage_error(e.to_string()))?;
        staged
            .write_all(token.as_bytes())
            .map_err(|e| self.storage_error(e.to_string()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(staged.path(), fs::Permissions::from_mode(0o600))
                .map_err(|e| self.storage_error(e.to_string()))?;
        }

        staged
            .persist(&self.path)
            .map_err(|e| self.storage_error(e.error.to_string()))?;
        tracing::debug!(path = %self.path.display(), "token stored");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        validate_not_symlink(&self.path, "remove")?;

        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "token removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.storage_error(e.to_string())),
        }
    }
}
