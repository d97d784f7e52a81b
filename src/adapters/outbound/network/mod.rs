/// Network adapters for the reading platform REST API
mod caching_book_repository;
mod rest_api_client;

pub use caching_book_repository::CachingBookRepository;
pub use rest_api_client::RestApiClient;
