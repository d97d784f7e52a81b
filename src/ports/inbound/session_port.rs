use crate::library::domain::Credential;
use crate::shared::Result;

/// SessionPort - the current user, as far as the client knows
///
/// `restore`, `login` and `logout` are the only mutators. Everything else
/// is derived from the installed credential without a server round-trip.
pub trait SessionPort {
    /// Loads the persisted token once at startup
    ///
    /// An undecodable or expired token is discarded and leaves the session
    /// unauthenticated.
    ///
    /// # Errors
    /// Only storage failures are returned; decode failures never are.
    fn restore(&mut self) -> Result<()>;

    /// Persists and installs a freshly issued token, then signals
    /// navigation to the dashboard
    fn login(&mut self, raw_token: &str) -> Result<()>;

    /// Forgets the token and signals navigation to the login view
    fn logout(&mut self) -> Result<()>;

    fn credential(&self) -> Option<&Credential>;

    fn is_authenticated(&self) -> bool {
        self.credential().is_some()
    }

    fn is_author(&self) -> bool {
        self.credential().is_some_and(Credential::is_author)
    }

    /// Returns the credential, or sends the user to the login view and
    /// fails with `ShelfError::AuthenticationRequired`
    fn require_authenticated(&self) -> Result<&Credential>;

    /// Like `require_authenticated`, additionally failing with
    /// `ShelfError::AuthorRoleRequired` for non-authors
    fn require_author(&self) -> Result<&Credential>;
}
