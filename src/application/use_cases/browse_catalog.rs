use crate::application::dto::Lookup;
use crate::library::domain::{Book, Chapter};
use crate::ports::outbound::BookRepository;
use crate::shared::error::is_not_found;
use crate::shared::Result;

/// BrowseCatalogUseCase - featured shelf and the chapter reader
pub struct BrowseCatalogUseCase<B> {
    books: B,
}

impl<B: BookRepository> BrowseCatalogUseCase<B> {
    pub fn new(books: B) -> Self {
        Self { books }
    }

    pub async fn featured(&self) -> Result<Vec<Book>> {
        self.books.featured().await
    }

    /// One chapter by its 1-based order; a missing chapter is a view
    /// state ("Chapter not found."), not an error
    pub async fn read_chapter(&self, book_id: &str, order: u32) -> Result<Lookup<Chapter>> {
        match self.books.chapter(book_id, order).await {
            Ok(chapter) => Ok(Lookup::Found(chapter)),
            Err(e) if is_not_found(&e) => {
                tracing::debug!(book_id, order, "chapter not found");
                Ok(Lookup::NotFound)
            }
            Err(e) => Err(e),
        }
    }
}
