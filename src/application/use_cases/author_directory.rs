use crate::application::dto::{AuthorProfile, Lookup};
use crate::library::domain::{Author, AuthorUpdate};
use crate::ports::inbound::SessionPort;
use crate::ports::outbound::AuthorRepository;
use crate::shared::error::{is_not_found, ShelfError};
use crate::shared::Result;

/// AuthorDirectoryUseCase - author search, profiles and the author's own
/// panel
pub struct AuthorDirectoryUseCase<A> {
    authors: A,
}

impl<A: AuthorRepository> AuthorDirectoryUseCase<A> {
    pub fn new(authors: A) -> Self {
        Self { authors }
    }

    /// Authors whose name matches; a blank name returns nothing without a
    /// request
    pub async fn search(&self, name: &str) -> Result<Vec<Author>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(Vec::new());
        }
        self.authors.search(name).await
    }

    pub async fn profile(&self, author_id: &str) -> Result<Lookup<AuthorProfile>> {
        let author = match self.authors.get(author_id).await {
            Ok(author) => author,
            Err(e) if is_not_found(&e) => return Ok(Lookup::NotFound),
            Err(e) => return Err(e),
        };
        let books = self.authors.books(&author.id).await?.books;
        Ok(Lookup::Found(AuthorProfile { author, books }))
    }

    /// Profile and books of the logged-in author
    pub async fn my_panel(&self, session: &impl SessionPort) -> Result<AuthorProfile> {
        session.require_author()?;

        let author = self.authors.me().await?;
        let books = self.authors.books(&author.id).await?.books;
        Ok(AuthorProfile { author, books })
    }

    pub async fn update_profile(
        &self,
        session: &impl SessionPort,
        update: &AuthorUpdate,
    ) -> Result<Author> {
        session.require_author()?;
        if update.name.is_none() && update.biography.is_none() && update.profile_picture.is_none()
        {
            return Err(ShelfError::Validation {
                message: "Nothing to update".to_string(),
            }
            .into());
        }

        let me = self.authors.me().await?;
        let updated = self.authors.update(&me.id, update).await?;
        tracing::info!(author_id = %updated.id, "author profile updated");
        Ok(updated)
    }
}
