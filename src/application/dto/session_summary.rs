use crate::ports::inbound::SessionPort;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Who is logged in, as shown by `whoami`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub authenticated: bool,
    pub username: Option<String>,
    pub roles: Vec<String>,
    pub is_author: bool,
    pub expires_at: Option<DateTime<Utc>>,
}

impl SessionSummary {
    pub fn of(session: &impl SessionPort) -> Self {
        let Some(credential) = session.credential() else {
            return Self::default();
        };
        let claims = credential.claims();
        Self {
            authenticated: true,
            username: Some(credential.subject_name().to_string()),
            roles: claims.roles().iter().cloned().collect(),
            is_author: credential.is_author(),
            expires_at: DateTime::from_timestamp(claims.expires_at_epoch_seconds(), 0),
        }
    }
}
