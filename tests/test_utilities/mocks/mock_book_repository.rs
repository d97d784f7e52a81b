use async_trait::async_trait;
use shelfwise::library::domain::{
    BookDraft, BookUpdate, CombinedSearchPayload, CreatedBook, DownloadReceipt,
    ExternalBookDetails, ImportReceipt,
};
use shelfwise::prelude::*;
use shelfwise::shared::error::ShelfError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

fn not_found(what: &str) -> anyhow::Error {
    ShelfError::Api {
        status: 404,
        message: format!("{} not found", what),
    }
    .into()
}

/// Mock BookRepository serving canned books and recording every call
#[derive(Default, Clone)]
pub struct MockBookRepository {
    pub books: HashMap<String, Book>,
    pub featured: Vec<Book>,
    pub local_hits: Vec<Book>,
    pub external_hits: Vec<ExternalBook>,
    pub external_details: HashMap<String, ExternalBookDetails>,
    pub fail_search: bool,
    pub fail_archive_search: bool,
    pub fail_download: bool,
    pub fail_delete: bool,
    pub slow_queries: Vec<String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl MockBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(mut self, book: Book) -> Self {
        self.books.insert(book.id.clone(), book);
        self
    }

    pub fn with_featured(mut self, books: Vec<Book>) -> Self {
        self.featured = books;
        self
    }

    pub fn with_search_hits(mut self, local: Vec<Book>, external: Vec<ExternalBook>) -> Self {
        self.local_hits = local;
        self.external_hits = external;
        self
    }

    pub fn with_external(mut self, md5: &str, details: ExternalBookDetails) -> Self {
        self.external_details.insert(md5.to_string(), details);
        self
    }

    pub fn with_failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    pub fn with_failing_archive_search(mut self) -> Self {
        self.fail_archive_search = true;
        self
    }

    pub fn with_failing_download(mut self) -> Self {
        self.fail_download = true;
        self
    }

    pub fn with_failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    /// Searches for `query` take 50ms to answer
    pub fn with_slow_query(mut self, query: &str) -> Self {
        self.slow_queries.push(query.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl BookRepository for MockBookRepository {
    async fn featured(&self) -> Result<Vec<Book>> {
        self.record("featured".to_string());
        Ok(self.featured.clone())
    }

    async fn search(&self, query: &str) -> Result<CombinedSearchPayload> {
        self.record(format!("search {}", query));
        if self.slow_queries.iter().any(|q| q == query) {
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }
        if self.fail_search {
            anyhow::bail!("Search failed");
        }
        Ok(CombinedSearchPayload {
            local: self.local_hits.clone(),
            external: self.external_hits.clone(),
        })
    }

    async fn search_external(&self, query: &str) -> Result<Vec<ExternalBook>> {
        self.record(format!("search_external {}", query));
        if self.fail_archive_search {
            anyhow::bail!("Archive unavailable");
        }
        Ok(self.external_hits.clone())
    }

    async fn external_details(&self, md5: &str) -> Result<ExternalBookDetails> {
        self.record(format!("external_details {}", md5));
        self.external_details
            .get(md5)
            .cloned()
            .ok_or_else(|| not_found("Book"))
    }

    async fn import(&self, md5: &str) -> Result<ImportReceipt> {
        self.record(format!("import {}", md5));
        Ok(ImportReceipt {
            id: format!("imported-{}", md5),
            status: "imported".to_string(),
        })
    }

    async fn trigger_download(&self, book_id: &str) -> Result<DownloadReceipt> {
        self.record(format!("trigger_download {}", book_id));
        if self.fail_download {
            anyhow::bail!("Archive mirror unreachable");
        }
        Ok(DownloadReceipt {
            job_id: Some("job-1".to_string()),
            status: "processing".to_string(),
        })
    }

    async fn get(&self, book_id: &str) -> Result<Book> {
        self.record(format!("get {}", book_id));
        self.books
            .get(book_id)
            .cloned()
            .ok_or_else(|| not_found("Book"))
    }

    async fn batch(&self, book_ids: &[String]) -> Result<Vec<Book>> {
        self.record(format!("batch {}", book_ids.join(",")));
        Ok(book_ids
            .iter()
            .filter_map(|id| self.books.get(id).cloned())
            .collect())
    }

    async fn chapter(&self, book_id: &str, order: u32) -> Result<Chapter> {
        self.record(format!("chapter {} {}", book_id, order));
        self.books
            .get(book_id)
            .and_then(|book| book.chapters.iter().find(|c| c.order == order).cloned())
            .ok_or_else(|| not_found("Chapter"))
    }

    async fn create(&self, draft: &BookDraft) -> Result<CreatedBook> {
        self.record(format!(
            "create {} by {} ({} chapters)",
            draft.title(),
            draft.author(),
            draft.chapters().len()
        ));
        Ok(CreatedBook {
            id: "new-book".to_string(),
            status: "local".to_string(),
        })
    }

    async fn update(&self, book_id: &str, update: &BookUpdate) -> Result<Book> {
        self.record(format!("update {}", book_id));
        let mut book = self
            .books
            .get(book_id)
            .cloned()
            .ok_or_else(|| not_found("Book"))?;
        if let Some(title) = &update.title {
            book.title = title.clone();
        }
        if let Some(image) = &update.image {
            book.image = Some(image.clone());
        }
        if let Some(biography) = &update.biography {
            book.biography = Some(biography.clone());
        }
        Ok(book)
    }

    async fn delete(&self, book_id: &str) -> Result<()> {
        self.record(format!("delete {}", book_id));
        if self.fail_delete {
            anyhow::bail!("Not the owner of this book");
        }
        Ok(())
    }
}
