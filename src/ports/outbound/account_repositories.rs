use crate::library::domain::{
    AccessToken, Author, AuthorBooks, AuthorUpdate, Reader, ReadingList, Registration,
};
use crate::shared::Result;
use async_trait::async_trait;

/// AuthGateway port for account creation and token issuance
///
/// Tokens are issued by the API; the client never signs anything.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Creates an account (`POST /auth/register`)
    async fn register(&self, registration: &Registration) -> Result<()>;

    /// Exchanges credentials for an access token (`POST /auth/login`)
    ///
    /// Never sends a previously stored token.
    async fn login(&self, username: &str, password: &str) -> Result<AccessToken>;
}

/// AuthorRepository port for author profiles
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn get(&self, author_id: &str) -> Result<Author>;

    /// Profile of the logged-in author (`GET /authors/me`)
    async fn me(&self) -> Result<Author>;

    async fn books(&self, author_id: &str) -> Result<AuthorBooks>;

    async fn search(&self, name: &str) -> Result<Vec<Author>>;

    async fn update(&self, author_id: &str, update: &AuthorUpdate) -> Result<Author>;
}

/// ReaderRepository port for reader profiles and their lists
#[async_trait]
pub trait ReaderRepository: Send + Sync {
    /// Profile of the logged-in reader (`GET /readers/me`)
    async fn me(&self) -> Result<Reader>;

    /// Files a book under one of the reader's lists
    async fn add_book(&self, reader_id: &str, book_id: &str, list: ReadingList) -> Result<()>;
}
