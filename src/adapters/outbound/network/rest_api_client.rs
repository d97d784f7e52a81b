use crate::library::domain::{
    AccessToken, Author, AuthorBooks, AuthorSearchPayload, AuthorUpdate, Book, BookDraft,
    BookUpdate, Chapter, CombinedSearchPayload, CreatedBook, DownloadReceipt, ExternalBook,
    ExternalBookDetails, ExternalSearchPayload, ImportReceipt, Reader, ReadingList, Registration,
};
use crate::ports::outbound::{
    AuthGateway, AuthorRepository, BookRepository, ReaderRepository, TokenStorage,
};
use crate::shared::error::ShelfError;
use crate::shared::security::validate_path_component;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

const LOGIN_FAILED: &str = "Login failed";

/// RestApiClient adapter for the reading platform REST API
///
/// Implements every repository port over one shared `reqwest::Client`.
/// The persisted token is read from `TokenStorage` on each request, so a
/// login or logout is picked up without rebuilding the client.
///
/// Cheap to clone: clones share the connection pool and the token store.
#[derive(Clone)]
pub struct RestApiClient {
    client: reqwest::Client,
    base_url: String,
    tokens: Arc<dyn TokenStorage>,
}

impl RestApiClient {
    /// Creates a client for the API at `base_url`
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built
    pub fn new(base_url: &str, timeout: Duration, tokens: Arc<dyn TokenStorage>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("shelfwise/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validates an id or hash and percent-encodes it for use as a path
    /// segment
    fn segment(component: &str, component_type: &str) -> Result<String> {
        validate_path_component(component, component_type)?;
        Ok(urlencoding::encode(component).into_owned())
    }

    fn encode_pairs(pairs: &[(&str, &str)]) -> String {
        pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Builds a request, attaching the bearer token when one is stored
    fn authorized(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        let token = self.tokens.get()?.filter(|t| !t.trim().is_empty());
        Ok(match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        })
    }

    /// Sends a request and turns transport failures and non-2xx answers
    /// into `ShelfError`
    async fn execute(
        &self,
        builder: RequestBuilder,
        label: &str,
        fallback: Option<&str>,
    ) -> Result<Response> {
        let started = Instant::now();
        let response = builder.send().await.map_err(|e| {
            let details = if e.is_timeout() {
                "the request timed out".to_string()
            } else {
                e.to_string()
            };
            tracing::warn!(request = label, %details, "request did not complete");
            ShelfError::Network { details }
        })?;

        let status = response.status();
        tracing::debug!(
            request = label,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "api response"
        );
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ShelfError::Api {
            status: status.as_u16(),
            message: error_message(status.as_u16(), &body, fallback),
        }
        .into())
    }

    async fn fetch<T: DeserializeOwned>(&self, method: Method, path: &str) -> Result<T> {
        let label = format!("{} {}", method, path);
        let builder = self.authorized(method, path)?;
        let response = self.execute(builder, &label, None).await?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("Unexpected response body from {}", label))
    }

    async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized + Sync,
    {
        let label = format!("{} {}", method, path);
        let builder = self.authorized(method, path)?.json(body);
        let response = self.execute(builder, &label, None).await?;
        response
            .json::<T>()
            .await
            .with_context(|| format!("Unexpected response body from {}", label))
    }

    async fn send_discarding(&self, method: Method, path: &str) -> Result<()> {
        let label = format!("{} {}", method, path);
        let builder = self.authorized(method, path)?;
        self.execute(builder, &label, None).await?;
        Ok(())
    }
}

/// Message for a failed call: the `detail` field of a JSON body when
/// present (non-string details rendered compactly), else the fallback
fn error_message(status: u16, body: &str, fallback: Option<&str>) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail").cloned())
        .filter(|detail| !detail.is_null());

    match detail {
        Some(serde_json::Value::String(message)) if !message.is_empty() => message,
        Some(serde_json::Value::String(_)) | None => match fallback {
            Some(fallback) => fallback.to_string(),
            None => format!("Request failed: {}", status),
        },
        Some(other) => other.to_string(),
    }
}

#[async_trait]
impl BookRepository for RestApiClient {
    async fn featured(&self) -> Result<Vec<Book>> {
        self.fetch(Method::GET, "/books/featured").await
    }

    async fn search(&self, query: &str) -> Result<CombinedSearchPayload> {
        let path = format!("/books/search?{}", Self::encode_pairs(&[("q", query)]));
        self.fetch(Method::GET, &path).await
    }

    async fn search_external(&self, query: &str) -> Result<Vec<ExternalBook>> {
        let path = format!(
            "/books/external-search?{}",
            Self::encode_pairs(&[("query", query)])
        );
        let payload: ExternalSearchPayload = self.fetch(Method::GET, &path).await?;
        Ok(payload.books)
    }

    async fn external_details(&self, md5: &str) -> Result<ExternalBookDetails> {
        let path = format!("/books/external/{}", Self::segment(md5, "Content hash")?);
        self.fetch(Method::GET, &path).await
    }

    async fn import(&self, md5: &str) -> Result<ImportReceipt> {
        let path = format!("/books/import/{}", Self::segment(md5, "Content hash")?);
        self.fetch(Method::POST, &path).await
    }

    async fn trigger_download(&self, book_id: &str) -> Result<DownloadReceipt> {
        let path = format!("/books/{}/download", Self::segment(book_id, "Book id")?);
        self.fetch(Method::POST, &path).await
    }

    async fn get(&self, book_id: &str) -> Result<Book> {
        let path = format!("/books/{}", Self::segment(book_id, "Book id")?);
        self.fetch(Method::GET, &path).await
    }

    async fn batch(&self, book_ids: &[String]) -> Result<Vec<Book>> {
        if book_ids.is_empty() {
            return Ok(Vec::new());
        }
        let pairs: Vec<(&str, &str)> = book_ids.iter().map(|id| ("ids", id.as_str())).collect();
        let path = format!("/books/batch?{}", Self::encode_pairs(&pairs));
        self.fetch(Method::GET, &path).await
    }

    async fn chapter(&self, book_id: &str, order: u32) -> Result<Chapter> {
        let path = format!(
            "/books/{}/chapters/{}",
            Self::segment(book_id, "Book id")?,
            order
        );
        self.fetch(Method::GET, &path).await
    }

    async fn create(&self, draft: &BookDraft) -> Result<CreatedBook> {
        self.send_json(Method::POST, "/books/", draft).await
    }

    async fn update(&self, book_id: &str, update: &BookUpdate) -> Result<Book> {
        let path = format!("/books/{}", Self::segment(book_id, "Book id")?);
        self.send_json(Method::PUT, &path, update).await
    }

    async fn delete(&self, book_id: &str) -> Result<()> {
        let path = format!("/books/{}", Self::segment(book_id, "Book id")?);
        self.send_discarding(Method::DELETE, &path).await
    }
}

#[async_trait]
impl AuthGateway for RestApiClient {
    async fn register(&self, registration: &Registration) -> Result<()> {
        let _: serde_json::Value = self
            .send_json(Method::POST, "/auth/register", registration)
            .await?;
        Ok(())
    }

    async fn login(&self, username: &str, password: &str) -> Result<AccessToken> {
        // Never carries the stored bearer token
        let builder = self
            .client
            .post(format!("{}/auth/login", self.base_url))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Self::encode_pairs(&[
                ("username", username),
                ("password", password),
            ]));
        let response = self
            .execute(builder, "POST /auth/login", Some(LOGIN_FAILED))
            .await?;
        response
            .json::<AccessToken>()
            .await
            .context("Unexpected response body from POST /auth/login")
    }
}

#[async_trait]
impl AuthorRepository for RestApiClient {
    async fn get(&self, author_id: &str) -> Result<Author> {
        let path = format!("/authors/{}", Self::segment(author_id, "Author id")?);
        self.fetch(Method::GET, &path).await
    }

    async fn me(&self) -> Result<Author> {
        self.fetch(Method::GET, "/authors/me").await
    }

    async fn books(&self, author_id: &str) -> Result<AuthorBooks> {
        let path = format!("/authors/{}/books", Self::segment(author_id, "Author id")?);
        self.fetch(Method::GET, &path).await
    }

    async fn search(&self, name: &str) -> Result<Vec<Author>> {
        let path = format!("/authors/search?{}", Self::encode_pairs(&[("name", name)]));
        let payload: AuthorSearchPayload = self.fetch(Method::GET, &path).await?;
        Ok(payload.authors)
    }

    async fn update(&self, author_id: &str, update: &AuthorUpdate) -> Result<Author> {
        let path = format!("/authors/{}", Self::segment(author_id, "Author id")?);
        self.send_json(Method::PUT, &path, update).await
    }
}

#[async_trait]
impl ReaderRepository for RestApiClient {
    async fn me(&self) -> Result<Reader> {
        self.fetch(Method::GET, "/readers/me").await
    }

    async fn add_book(&self, reader_id: &str, book_id: &str, list: ReadingList) -> Result<()> {
        validate_path_component(book_id, "Book id")?;
        let path = format!(
            "/readers/{}/add-book?{}",
            Self::segment(reader_id, "Reader id")?,
            Self::encode_pairs(&[("book_id", book_id), ("list_name", list.as_str())])
        );
        self.send_discarding(Method::POST, &path).await
    }
}
