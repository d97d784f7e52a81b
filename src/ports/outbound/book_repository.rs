use crate::library::domain::{
    Book, BookDraft, BookUpdate, Chapter, CombinedSearchPayload, CreatedBook, DownloadReceipt,
    ExternalBook, ExternalBookDetails, ImportReceipt,
};
use crate::shared::Result;
use async_trait::async_trait;

/// BookRepository port for the book resources of the reading platform API
///
/// Implementations must be `Send + Sync` so independent lookups can run
/// concurrently (e.g. both search sources at once).
///
/// # Errors
/// Every method fails when the request cannot be sent, the API answers
/// with a non-2xx status (`ShelfError::Api`, 404 included) or the body
/// cannot be parsed.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Curated list for the browse view (`GET /books/featured`)
    async fn featured(&self) -> Result<Vec<Book>>;

    /// Combined local and archive search (`GET /books/search?q=`)
    async fn search(&self, query: &str) -> Result<CombinedSearchPayload>;

    /// Archive-only search (`GET /books/external-search?query=`)
    async fn search_external(&self, query: &str) -> Result<Vec<ExternalBook>>;

    /// Archive item lookup by content hash (`GET /books/external/{md5}`)
    async fn external_details(&self, md5: &str) -> Result<ExternalBookDetails>;

    /// Imports an archive item into the catalog (`POST /books/import/{md5}`)
    async fn import(&self, md5: &str) -> Result<ImportReceipt>;

    /// Starts fetching the text of an imported book (`POST /books/{id}/download`)
    async fn trigger_download(&self, book_id: &str) -> Result<DownloadReceipt>;

    async fn get(&self, book_id: &str) -> Result<Book>;

    /// Several books in one call (`GET /books/batch?ids=..&ids=..`)
    ///
    /// Ids without a book are silently missing from the result.
    async fn batch(&self, book_ids: &[String]) -> Result<Vec<Book>>;

    async fn chapter(&self, book_id: &str, order: u32) -> Result<Chapter>;

    async fn create(&self, draft: &BookDraft) -> Result<CreatedBook>;

    async fn update(&self, book_id: &str, update: &BookUpdate) -> Result<Book>;

    async fn delete(&self, book_id: &str) -> Result<()>;
}
