use crate::library::services::{ReadingListAssembler, ReadingShelf};
use crate::ports::inbound::SessionPort;
use crate::ports::outbound::{BookRepository, ReaderRepository};
use crate::shared::Result;

/// ReadingListsUseCase - the logged-in reader's three lists
///
/// # Type Parameters
/// * `B` - BookRepository implementation
/// * `R` - ReaderRepository implementation
pub struct ReadingListsUseCase<B, R> {
    books: B,
    readers: R,
}

impl<B, R> ReadingListsUseCase<B, R>
where
    B: BookRepository,
    R: ReaderRepository,
{
    pub fn new(books: B, readers: R) -> Self {
        Self { books, readers }
    }

    /// Loads the reader profile and resolves every list with one batch
    /// lookup; no lookup at all when the lists are empty
    pub async fn load(&self, session: &impl SessionPort) -> Result<ReadingShelf> {
        session.require_authenticated()?;

        let reader = self.readers.me().await?;
        let ids = ReadingListAssembler::unique_book_ids(&reader);
        if ids.is_empty() {
            return Ok(ReadingShelf::default());
        }

        let books = self.books.batch(&ids).await?;
        tracing::debug!(requested = ids.len(), returned = books.len(), "resolved reading lists");
        Ok(ReadingListAssembler::assemble(&reader, books))
    }
}
