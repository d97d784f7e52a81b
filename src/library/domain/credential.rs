use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Role name that unlocks publishing
pub const AUTHOR_ROLE: &str = "author";

/// Claims carried in the payload segment of an access token
///
/// Only the three claims the client acts on are kept; anything else the
/// issuer adds is ignored during decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "sub")]
    subject_name: String,
    #[serde(default)]
    roles: BTreeSet<String>,
    #[serde(rename = "exp")]
    expires_at_epoch_seconds: i64,
}

impl Claims {
    pub fn new(
        subject_name: impl Into<String>,
        roles: impl IntoIterator<Item = impl Into<String>>,
        expires_at_epoch_seconds: i64,
    ) -> Self {
        Self {
            subject_name: subject_name.into(),
            roles: roles.into_iter().map(Into::into).collect(),
            expires_at_epoch_seconds,
        }
    }

    pub fn subject_name(&self) -> &str {
        &self.subject_name
    }

    pub fn roles(&self) -> &BTreeSet<String> {
        &self.roles
    }

    pub fn expires_at_epoch_seconds(&self) -> i64 {
        self.expires_at_epoch_seconds
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// A token is expired once `exp * 1000 <= now` (milliseconds).
    pub fn is_expired_at(&self, now_epoch_millis: i64) -> bool {
        self.expires_at_epoch_seconds.saturating_mul(1000) <= now_epoch_millis
    }
}

/// Credential - the bearer token together with its decoded claims
///
/// No signature verification happens on the client. The API checks the
/// token on every request; the credential only drives what the client
/// offers to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    claims: Claims,
}

impl Credential {
    pub fn new(token: impl Into<String>, claims: Claims) -> Self {
        Self {
            token: token.into(),
            claims,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    pub fn subject_name(&self) -> &str {
        self.claims.subject_name()
    }

    pub fn is_author(&self) -> bool {
        self.claims.has_role(AUTHOR_ROLE)
    }

    pub fn is_expired_at(&self, now_epoch_millis: i64) -> bool {
        self.claims.is_expired_at(now_epoch_millis)
    }
}
