use crate::application::dto::{BookDetailView, Lookup};
use crate::library::domain::{DownloadReceipt, ReadingList};
use crate::library::policies::{ChapterAvailability, DownloadState};
use crate::ports::inbound::SessionPort;
use crate::ports::outbound::{BookRepository, Notifier, ReaderRepository};
use crate::shared::error::{is_not_found, ShelfError};
use crate::shared::Result;

/// BookDetailUseCase - the book view and its actions
///
/// # Type Parameters
/// * `B` - BookRepository implementation
/// * `R` - ReaderRepository implementation
/// * `N` - Notifier implementation
pub struct BookDetailUseCase<B, R, N> {
    books: B,
    readers: R,
    notifier: N,
}

impl<B, R, N> BookDetailUseCase<B, R, N>
where
    B: BookRepository,
    R: ReaderRepository,
    N: Notifier,
{
    pub fn new(books: B, readers: R, notifier: N) -> Self {
        Self {
            books,
            readers,
            notifier,
        }
    }

    /// Loads a book; logged-in users also get their reader id so the list
    /// actions can be offered
    pub async fn load(
        &self,
        session: &impl SessionPort,
        book_id: &str,
    ) -> Result<Lookup<BookDetailView>> {
        let book = match self.books.get(book_id).await {
            Ok(book) => book,
            Err(e) if is_not_found(&e) => return Ok(Lookup::NotFound),
            Err(e) => return Err(e),
        };

        let reader_id = if session.is_authenticated() {
            match self.readers.me().await {
                Ok(reader) => Some(reader.id),
                Err(e) => {
                    tracing::debug!(error = %e, "no reader profile, list actions disabled");
                    None
                }
            }
        } else {
            None
        };

        Ok(Lookup::Found(BookDetailView::new(book, reader_id)))
    }

    /// Starts fetching the text of an imported book
    ///
    /// On success the view switches to processing in place; there is no
    /// polling, the user reloads later.
    pub async fn trigger_download(&self, view: &mut BookDetailView) -> Result<DownloadReceipt> {
        if view.download != DownloadState::Available {
            return Err(ShelfError::Validation {
                message: format!(
                    "\"{}\" was not imported from the archive or is already downloading",
                    view.book.title
                ),
            }
            .into());
        }

        match self.books.trigger_download(&view.book.id).await {
            Ok(receipt) => {
                tracing::info!(book_id = %view.book.id, job_id = ?receipt.job_id, "download triggered");
                view.mark_processing();
                self.notifier.report(ChapterAvailability::PROCESSING_HINT);
                Ok(receipt)
            }
            Err(e) => {
                self.notifier
                    .alert(&format!("Failed to start download: {}", e));
                Err(e)
            }
        }
    }

    /// Files the book under one of the reader's lists
    pub async fn add_to_list(
        &self,
        session: &impl SessionPort,
        view: &BookDetailView,
        list: ReadingList,
    ) -> Result<()> {
        if !session.is_authenticated() {
            self.notifier.alert("Please log in to add to lists.");
        }
        session.require_authenticated()?;

        let reader_id = match &view.reader_id {
            Some(id) => id.clone(),
            None => self.readers.me().await?.id,
        };

        match self.readers.add_book(&reader_id, &view.book.id, list).await {
            Ok(()) => {
                self.notifier.report(&format!("Added to {}!", list.label()));
                Ok(())
            }
            Err(e) => {
                self.notifier.alert("Failed to add to list.");
                Err(e)
            }
        }
    }
}
