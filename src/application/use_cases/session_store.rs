use crate::library::domain::Credential;
use crate::library::services::TokenDecoder;
use crate::ports::inbound::SessionPort;
use crate::ports::outbound::{Clock, Navigator, TokenStorage, View};
use crate::shared::error::{is_unreadable_token, ShelfError};
use crate::shared::Result;

/// SessionStore - single source of truth for the current user
///
/// Owns the installed credential and keeps it in step with the persisted
/// token. Passed by reference to whatever needs to know who is logged in.
///
/// # Type Parameters
/// * `S` - TokenStorage implementation
/// * `N` - Navigator implementation
/// * `C` - Clock implementation
pub struct SessionStore<S, N, C> {
    storage: S,
    navigator: N,
    clock: C,
    current: Option<Credential>,
}

impl<S, N, C> SessionStore<S, N, C>
where
    S: TokenStorage,
    N: Navigator,
    C: Clock,
{
    /// Creates an unauthenticated store; call `restore` to load a saved token
    pub fn new(storage: S, navigator: N, clock: C) -> Self {
        Self {
            storage,
            navigator,
            clock,
            current: None,
        }
    }

    fn discard_stored_token(&mut self, reason: &str) -> Result<()> {
        tracing::debug!(reason, "discarding stored token");
        self.current = None;
        self.storage.clear()
    }
}

impl<S, N, C> SessionPort for SessionStore<S, N, C>
where
    S: TokenStorage,
    N: Navigator,
    C: Clock,
{
    fn restore(&mut self) -> Result<()> {
        let raw_token = match self.storage.get() {
            Ok(Some(raw_token)) => raw_token,
            Ok(None) => {
                self.current = None;
                return Ok(());
            }
            Err(e) if is_unreadable_token(&e) => return self.discard_stored_token(&e.to_string()),
            Err(e) => return Err(e),
        };

        match TokenDecoder::decode(&raw_token) {
            Ok(credential) if credential.is_expired_at(self.clock.now_epoch_millis()) => {
                self.discard_stored_token("expired")
            }
            Ok(credential) => {
                tracing::debug!(subject = credential.subject_name(), "session restored");
                self.current = Some(credential);
                Ok(())
            }
            Err(e) => self.discard_stored_token(&e.to_string()),
        }
    }

    fn login(&mut self, raw_token: &str) -> Result<()> {
        self.storage.set(raw_token)?;

        match TokenDecoder::decode(raw_token) {
            Ok(credential) => {
                tracing::info!(subject = credential.subject_name(), "logged in");
                self.current = Some(credential);
                self.navigator.navigate(View::Dashboard);
            }
            Err(e) => {
                // An unreadable token is as good as none
                self.discard_stored_token(&e.to_string())?;
                self.navigator.navigate(View::Login);
            }
        }
        Ok(())
    }

    fn logout(&mut self) -> Result<()> {
        self.storage.clear()?;
        if let Some(credential) = self.current.take() {
            tracing::info!(subject = credential.subject_name(), "logged out");
        }
        self.navigator.navigate(View::Login);
        Ok(())
    }

    fn credential(&self) -> Option<&Credential> {
        self.current.as_ref()
    }

    fn require_authenticated(&self) -> Result<&Credential> {
        match self.current.as_ref() {
            Some(credential) => Ok(credential),
            None => {
                self.navigator.navigate(View::Login);
                Err(ShelfError::AuthenticationRequired.into())
            }
        }
    }

    fn require_author(&self) -> Result<&Credential> {
        let credential = self.require_authenticated()?;
        if !credential.is_author() {
            return Err(ShelfError::AuthorRoleRequired.into());
        }
        Ok(credential)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use std::cell::RefCell;
    use std::sync::Mutex;

    const NOW_MILLIS: i64 = 1_700_000_000_000;

    #[derive(Default)]
    struct MemoryStorage {
        token: Mutex<Option<String>>,
        damaged: Mutex<bool>,
    }

    impl MemoryStorage {
        fn holding(token: &str) -> Self {
            Self {
                token: Mutex::new(Some(token.to_string())),
                ..Self::default()
            }
        }

        fn damaged() -> Self {
            Self {
                damaged: Mutex::new(true),
                ..Self::default()
            }
        }

        fn stored(&self) -> Option<String> {
            self.token.lock().unwrap().clone()
        }
    }

    impl TokenStorage for MemoryStorage {
        fn get(&self) -> Result<Option<String>> {
            if *self.damaged.lock().unwrap() {
                return Err(ShelfError::UnreadableToken {
                    path: "token".into(),
                    details: "invalid utf-8".to_string(),
                }
                .into());
            }
            Ok(self.token.lock().unwrap().clone())
        }

        fn set(&self, token: &str) -> Result<()> {
            *self.token.lock().unwrap() = Some(token.to_string());
            Ok(())
        }

        fn clear(&self) -> Result<()> {
            *self.token.lock().unwrap() = None;
            *self.damaged.lock().unwrap() = false;
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        views: RefCell<Vec<View>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, view: View) {
            self.views.borrow_mut().push(view);
        }
    }

    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn now_epoch_millis(&self) -> i64 {
            self.0
        }
    }

    fn token(sub: &str, roles: &[&str], exp: i64) -> String {
        let payload = serde_json::json!({ "sub": sub, "roles": roles, "exp": exp });
        format!(
            "header.{}.signature",
            URL_SAFE_NO_PAD.encode(payload.to_string())
        )
    }

    fn store(
        storage: MemoryStorage,
    ) -> SessionStore<MemoryStorage, RecordingNavigator, FixedClock> {
        SessionStore::new(storage, RecordingNavigator::default(), FixedClock(NOW_MILLIS))
    }

    #[test]
    fn test_restore_without_token_is_unauthenticated() {
        let mut session = store(MemoryStorage::default());
        session.restore().unwrap();
        assert!(!session.is_authenticated());
        assert!(!session.is_author());
    }

    #[test]
    fn test_restore_installs_valid_token() {
        let raw = token("ana", &["reader", "author"], NOW_MILLIS / 1000 + 3600);
        let mut session = store(MemoryStorage::holding(&raw));

        session.restore().unwrap();

        assert!(session.is_authenticated());
        assert!(session.is_author());
        assert_eq!(session.credential().unwrap().subject_name(), "ana");
        assert!(session.navigator.views.borrow().is_empty());
    }

    #[test]
    fn test_restore_discards_expired_token() {
        let raw = token("ana", &["reader"], NOW_MILLIS / 1000 - 1);
        let mut session = store(MemoryStorage::holding(&raw));

        session.restore().unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(session.storage.stored(), None);
    }

    #[test]
    fn test_restore_discards_token_expiring_exactly_now() {
        let raw = token("ana", &["reader"], NOW_MILLIS / 1000);
        let mut session = store(MemoryStorage::holding(&raw));

        session.restore().unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(session.storage.stored(), None);
    }

    #[test]
    fn test_restore_discards_garbage() {
        let mut session = store(MemoryStorage::holding("not-a-jwt"));
        session.restore().unwrap();
        assert!(!session.is_authenticated());
        assert_eq!(session.storage.stored(), None);
    }

    #[test]
    fn test_restore_discards_unreadable_storage() {
        let mut session = store(MemoryStorage::damaged());

        session.restore().unwrap();

        assert!(!session.is_authenticated());
        assert!(!*session.storage.damaged.lock().unwrap());
        assert_eq!(session.storage.get().unwrap(), None);
    }

    #[test]
    fn test_login_persists_installs_and_navigates_home() {
        let raw = token("bo", &["reader"], NOW_MILLIS / 1000 + 60);
        let mut session = store(MemoryStorage::default());

        session.login(&raw).unwrap();

        assert!(session.is_authenticated());
        assert!(!session.is_author());
        assert_eq!(session.storage.stored(), Some(raw));
        assert_eq!(*session.navigator.views.borrow(), vec![View::Dashboard]);
    }

    #[test]
    fn test_login_does_not_recheck_expiry() {
        let raw = token("bo", &["author"], 1);
        let mut session = store(MemoryStorage::default());

        session.login(&raw).unwrap();

        assert!(session.is_author());
    }

    #[test]
    fn test_login_with_undecodable_token_stays_logged_out() {
        let mut session = store(MemoryStorage::default());

        session.login("garbage").unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(session.storage.stored(), None);
        assert_eq!(*session.navigator.views.borrow(), vec![View::Login]);
    }

    #[test]
    fn test_logout_clears_everything() {
        let raw = token("ana", &["reader"], NOW_MILLIS / 1000 + 60);
        let mut session = store(MemoryStorage::holding(&raw));
        session.restore().unwrap();

        session.logout().unwrap();

        assert!(!session.is_authenticated());
        assert_eq!(session.storage.stored(), None);
        assert_eq!(*session.navigator.views.borrow(), vec![View::Login]);
    }

    #[test]
    fn test_require_authenticated_redirects_to_login() {
        let session = store(MemoryStorage::default());

        let err = session.require_authenticated().unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ShelfError>(),
            Some(ShelfError::AuthenticationRequired)
        ));
        assert_eq!(*session.navigator.views.borrow(), vec![View::Login]);
    }

    #[test]
    fn test_require_author_rejects_plain_reader() {
        let raw = token("bo", &["reader"], NOW_MILLIS / 1000 + 60);
        let mut session = store(MemoryStorage::holding(&raw));
        session.restore().unwrap();

        let err = session.require_author().unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ShelfError>(),
            Some(ShelfError::AuthorRoleRequired)
        ));
        assert!(session.navigator.views.borrow().is_empty());
    }
}
