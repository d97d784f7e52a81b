use crate::library::domain::Registration;
use crate::ports::inbound::SessionPort;
use crate::ports::outbound::AuthGateway;
use crate::shared::error::ShelfError;
use crate::shared::Result;

/// AccountUseCase - registration and credential exchange
///
/// Tokens come from the API; the session store only installs them.
pub struct AccountUseCase<G> {
    gateway: G,
}

impl<G: AuthGateway> AccountUseCase<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn login(
        &self,
        session: &mut impl SessionPort,
        username: &str,
        password: &str,
    ) -> Result<()> {
        require_field("username", username)?;
        require_field("password", password)?;

        let token = self.gateway.login(username, password).await?;
        session.login(&token.access_token)
    }

    /// Creates the account, then logs straight in with it
    pub async fn register(
        &self,
        session: &mut impl SessionPort,
        registration: &Registration,
    ) -> Result<()> {
        require_field("username", &registration.username)?;
        require_field("email", &registration.email)?;
        require_field("password", &registration.password)?;

        self.gateway.register(registration).await?;
        tracing::info!(username = %registration.username, roles = ?registration.roles, "registered");
        self.login(session, &registration.username, &registration.password)
            .await
    }

    pub fn logout(&self, session: &mut impl SessionPort) -> Result<()> {
        session.logout()
    }
}

fn require_field(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShelfError::Validation {
            message: format!("{} must not be empty", name),
        }
        .into());
    }
    Ok(())
}
