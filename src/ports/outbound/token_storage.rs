use crate::shared::Result;
use std::sync::Arc;

/// TokenStorage port for the single persisted credential
///
/// Holds exactly one opaque token string under a fixed key. The session
/// store writes it; the API client reads it on every request to decide
/// whether to send an `Authorization` header.
pub trait TokenStorage: Send + Sync {
    /// Returns the stored token, or `None` when nothing is stored
    fn get(&self) -> Result<Option<String>>;

    /// Replaces the stored token
    fn set(&self, token: &str) -> Result<()>;

    /// Removes the stored token; clearing an empty store is not an error
    fn clear(&self) -> Result<()>;
}

impl<T: TokenStorage + ?Sized> TokenStorage for Arc<T> {
    fn get(&self) -> Result<Option<String>> {
        (**self).get()
    }

    fn set(&self, token: &str) -> Result<()> {
        (**self).set(token)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }
}
