use crate::application::dto::ExternalBookView;
use crate::library::domain::ImportReceipt;
use crate::ports::inbound::SessionPort;
use crate::ports::outbound::{BookRepository, Navigator, View};
use crate::shared::error::is_not_found;
use crate::shared::Result;

/// ExternalBookUseCase - archive item detail and import
///
/// # Type Parameters
/// * `B` - BookRepository implementation
/// * `N` - Navigator implementation
pub struct ExternalBookUseCase<B, N> {
    books: B,
    navigator: N,
}

impl<B, N> ExternalBookUseCase<B, N>
where
    B: BookRepository,
    N: Navigator,
{
    pub fn new(books: B, navigator: N) -> Self {
        Self { books, navigator }
    }

    /// Opens an archive item by content hash
    ///
    /// When the API reports the item as already imported, the caller is
    /// sent to the local book and no archive metadata is returned.
    pub async fn open(&self, md5: &str) -> Result<ExternalBookView> {
        let details = match self.books.external_details(md5).await {
            Ok(details) => details,
            Err(e) if is_not_found(&e) => return Ok(ExternalBookView::NotFound),
            Err(e) => return Err(e),
        };

        if let Some(local_id) = details.local_redirect() {
            tracing::debug!(md5, local_id, "archive item already in catalog");
            self.navigator.navigate(View::Book {
                id: local_id.to_string(),
            });
            return Ok(ExternalBookView::RedirectToLocal {
                local_id: local_id.to_string(),
            });
        }

        Ok(match details.book {
            Some(book) => ExternalBookView::Details { book },
            None => ExternalBookView::NotFound,
        })
    }

    /// Imports an archive item and sends the caller to the new book
    ///
    /// # Errors
    /// `ShelfError::AuthenticationRequired` when logged out (after a
    /// redirect to the login view), or the API error.
    pub async fn import(&self, session: &impl SessionPort, md5: &str) -> Result<ImportReceipt> {
        session.require_authenticated()?;

        let receipt = self.books.import(md5).await?;
        tracing::info!(md5, book_id = %receipt.id, status = %receipt.status, "imported archive item");
        self.navigator.navigate(View::Book {
            id: receipt.id.clone(),
        });
        Ok(receipt)
    }
}
