use crate::library::domain::{
    Book, BookDraft, BookUpdate, Chapter, CombinedSearchPayload, CreatedBook, DownloadReceipt,
    ExternalBook, ExternalBookDetails, ImportReceipt,
};
use crate::ports::outbound::BookRepository;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

/// CachingBookRepository wraps a BookRepository and caches book lookups.
///
/// Decorator over any BookRepository: `get` and `batch` are served from an
/// in-memory map keyed by book id when possible. Searches, chapters and
/// archive calls always go through. Mutations through this repository
/// refresh or evict the affected id.
///
/// Clones share the same cache.
#[derive(Clone)]
pub struct CachingBookRepository<R: BookRepository> {
    inner: R,
    cache: Arc<DashMap<String, Book>>,
}

impl<R: BookRepository> CachingBookRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Returns the current cache size (for testing/monitoring)
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    fn remember(&self, book: &Book) {
        self.cache.insert(book.id.clone(), book.clone());
    }
}

#[async_trait]
impl<R: BookRepository> BookRepository for CachingBookRepository<R> {
    async fn featured(&self) -> Result<Vec<Book>> {
        self.inner.featured().await
    }

    async fn search(&self, query: &str) -> Result<CombinedSearchPayload> {
        self.inner.search(query).await
    }

    async fn search_external(&self, query: &str) -> Result<Vec<ExternalBook>> {
        self.inner.search_external(query).await
    }

    async fn external_details(&self, md5: &str) -> Result<ExternalBookDetails> {
        self.inner.external_details(md5).await
    }

    async fn import(&self, md5: &str) -> Result<ImportReceipt> {
        self.inner.import(md5).await
    }

    async fn trigger_download(&self, book_id: &str) -> Result<DownloadReceipt> {
        let receipt = self.inner.trigger_download(book_id).await?;
        // Status moves on the server
        self.cache.remove(book_id);
        Ok(receipt)
    }

    async fn get(&self, book_id: &str) -> Result<Book> {
        if let Some(cached) = self.cache.get(book_id) {
            return Ok(cached.clone());
        }

        let book = self.inner.get(book_id).await?;
        self.remember(&book);
        Ok(book)
    }

    async fn batch(&self, book_ids: &[String]) -> Result<Vec<Book>> {
        let missing: Vec<String> = book_ids
            .iter()
            .filter(|id| !self.cache.contains_key(id.as_str()))
            .cloned()
            .collect();

        if !missing.is_empty() {
            for book in self.inner.batch(&missing).await? {
                self.remember(&book);
            }
        }

        // Requested order; ids the inner repository did not return stay missing
        Ok(book_ids
            .iter()
            .filter_map(|id| self.cache.get(id.as_str()).map(|book| book.clone()))
            .collect())
    }

    async fn chapter(&self, book_id: &str, order: u32) -> Result<Chapter> {
        self.inner.chapter(book_id, order).await
    }

    async fn create(&self, draft: &BookDraft) -> Result<CreatedBook> {
        self.inner.create(draft).await
    }

    async fn update(&self, book_id: &str, update: &BookUpdate) -> Result<Book> {
        let book = self.inner.update(book_id, update).await?;
        self.cache.remove(book_id);
        self.remember(&book);
        Ok(book)
    }

    async fn delete(&self, book_id: &str) -> Result<()> {
        self.inner.delete(book_id).await?;
        self.cache.remove(book_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Mock repository for testing that tracks call counts
    struct MockBookRepository {
        get_calls: AtomicUsize,
        batch_requests: Mutex<Vec<Vec<String>>>,
    }

    impl MockBookRepository {
        fn new() -> Self {
            Self {
                get_calls: AtomicUsize::new(0),
                batch_requests: Mutex::new(Vec::new()),
            }
        }

        fn book(id: &str) -> Book {
            Book::new(id, format!("Title of {}", id), "ana")
        }
    }

    #[async_trait]
    impl BookRepository for MockBookRepository {
        async fn featured(&self) -> Result<Vec<Book>> {
            Ok(vec![])
        }

        async fn search(&self, _query: &str) -> Result<CombinedSearchPayload> {
            Ok(CombinedSearchPayload::default())
        }

        async fn search_external(&self, _query: &str) -> Result<Vec<ExternalBook>> {
            Ok(vec![])
        }

        async fn external_details(&self, _md5: &str) -> Result<ExternalBookDetails> {
            Ok(ExternalBookDetails::default())
        }

        async fn import(&self, md5: &str) -> Result<ImportReceipt> {
            Ok(ImportReceipt {
                id: md5.to_string(),
                status: "imported".to_string(),
            })
        }

        async fn trigger_download(&self, _book_id: &str) -> Result<DownloadReceipt> {
            Ok(DownloadReceipt {
                job_id: Some("job-1".to_string()),
                status: "processing".to_string(),
            })
        }

        async fn get(&self, book_id: &str) -> Result<Book> {
            self.get_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Self::book(book_id))
        }

        async fn batch(&self, book_ids: &[String]) -> Result<Vec<Book>> {
            self.batch_requests.lock().unwrap().push(book_ids.to_vec());
            Ok(book_ids
                .iter()
                .filter(|id| id.as_str() != "gone")
                .map(|id| Self::book(id))
                .collect())
        }

        async fn chapter(&self, _book_id: &str, order: u32) -> Result<Chapter> {
            Ok(Chapter::new("One", None, order))
        }

        async fn create(&self, _draft: &BookDraft) -> Result<CreatedBook> {
            Ok(CreatedBook {
                id: "new".to_string(),
                status: "success".to_string(),
            })
        }

        async fn update(&self, book_id: &str, update: &BookUpdate) -> Result<Book> {
            let mut book = Self::book(book_id);
            if let Some(title) = &update.title {
                book.title = title.clone();
            }
            Ok(book)
        }

        async fn delete(&self, _book_id: &str) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_get_returns_cached_value() {
        let repo = CachingBookRepository::new(MockBookRepository::new());

        let first = repo.get("b1").await.unwrap();
        let second = repo.get("b1").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(repo.inner.get_calls.load(Ordering::SeqCst), 1);
        assert_eq!(repo.cache_size(), 1);
    }

    #[tokio::test]
    async fn test_batch_only_fetches_missing_ids() {
        let repo = CachingBookRepository::new(MockBookRepository::new());
        repo.get("b1").await.unwrap();

        let ids = vec!["b2".to_string(), "b1".to_string(), "gone".to_string()];
        let books = repo.batch(&ids).await.unwrap();

        let returned: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(returned, vec!["b2", "b1"]);
        assert_eq!(
            *repo.inner.batch_requests.lock().unwrap(),
            vec![vec!["b2".to_string(), "gone".to_string()]]
        );
    }

    #[tokio::test]
    async fn test_fully_cached_batch_makes_no_call() {
        let repo = CachingBookRepository::new(MockBookRepository::new());
        repo.get("b1").await.unwrap();

        repo.batch(&["b1".to_string()]).await.unwrap();

        assert!(repo.inner.batch_requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mutations_refresh_cache() {
        let repo = CachingBookRepository::new(MockBookRepository::new());
        repo.get("b1").await.unwrap();
        repo.get("b2").await.unwrap();

        let update = BookUpdate {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        repo.update("b1", &update).await.unwrap();
        assert_eq!(repo.get("b1").await.unwrap().title, "Renamed");

        repo.delete("b2").await.unwrap();
        assert_eq!(repo.cache_size(), 1);

        repo.trigger_download("b1").await.unwrap();
        assert_eq!(repo.cache_size(), 0);
    }
}
