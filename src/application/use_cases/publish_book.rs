use crate::library::domain::{Book, BookDraft, BookUpdate, CreatedBook};
use crate::ports::inbound::SessionPort;
use crate::ports::outbound::{BookRepository, Navigator, Notifier, View};
use crate::shared::error::ShelfError;
use crate::shared::Result;
use anyhow::Context;
use serde::Deserialize;

/// A book as written by an author in a YAML manifest
///
/// ```yaml
/// title: The Long Road
/// image: https://example.com/cover.jpg
/// biography: A short blurb.
/// chapters:
///   - title: Departure
///     content: It was early when we left.
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookManifest {
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub chapters: Vec<ManifestChapter>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestChapter {
    pub title: String,
    pub content: String,
}

impl BookManifest {
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            ShelfError::Validation {
                message: format!("Invalid book manifest: {}", e),
            }
            .into()
        })
    }

    /// Turns the manifest into a draft credited to `author`
    pub fn into_draft(self, author: &str) -> Result<BookDraft> {
        let mut draft = BookDraft::new(self.title, author)?
            .with_image(self.image)
            .with_biography(self.biography);
        for chapter in &self.chapters {
            draft.add_chapter(&chapter.title, &chapter.content)?;
        }
        Ok(draft)
    }
}

/// PublishBookUseCase - author-only catalog changes
///
/// # Type Parameters
/// * `B` - BookRepository implementation
/// * `N` - Navigator implementation
/// * `T` - Notifier implementation
pub struct PublishBookUseCase<B, N, T> {
    books: B,
    navigator: N,
    notifier: T,
}

impl<B, N, T> PublishBookUseCase<B, N, T>
where
    B: BookRepository,
    N: Navigator,
    T: Notifier,
{
    pub fn new(books: B, navigator: N, notifier: T) -> Self {
        Self {
            books,
            navigator,
            notifier,
        }
    }

    /// Publishes the book described by a YAML manifest
    ///
    /// The author is whoever is logged in. On success the caller is sent
    /// to the dashboard.
    pub async fn publish(&self, session: &impl SessionPort, manifest_yaml: &str) -> Result<CreatedBook> {
        let credential = session.require_author()?;
        let draft = BookManifest::parse(manifest_yaml)?.into_draft(credential.subject_name())?;

        let created = self
            .books
            .create(&draft)
            .await
            .with_context(|| format!("Failed to create \"{}\"", draft.title()))?;
        tracing::info!(book_id = %created.id, chapters = draft.chapters().len(), "book published");
        self.navigator.navigate(View::Dashboard);
        Ok(created)
    }

    pub async fn update(
        &self,
        session: &impl SessionPort,
        book_id: &str,
        update: &BookUpdate,
    ) -> Result<Book> {
        session.require_author()?;
        if update.is_empty() {
            return Err(ShelfError::Validation {
                message: "Nothing to update".to_string(),
            }
            .into());
        }
        self.books.update(book_id, update).await
    }

    pub async fn delete(&self, session: &impl SessionPort, book_id: &str) -> Result<()> {
        session.require_author()?;
        match self.books.delete(book_id).await {
            Ok(()) => {
                tracing::info!(book_id, "book deleted");
                self.notifier.report("Book deleted");
                Ok(())
            }
            Err(e) => {
                self.notifier.alert("Failed to delete book");
                Err(e)
            }
        }
    }
}
