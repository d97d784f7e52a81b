/// Use cases module containing application business logic orchestration
mod account;
mod author_directory;
mod book_detail;
mod browse_catalog;
mod external_book;
mod publish_book;
mod reading_lists;
mod search_books;
mod session_store;

pub use account::AccountUseCase;
pub use author_directory::AuthorDirectoryUseCase;
pub use book_detail::BookDetailUseCase;
pub use browse_catalog::BrowseCatalogUseCase;
pub use external_book::ExternalBookUseCase;
pub use publish_book::{BookManifest, ManifestChapter, PublishBookUseCase};
pub use reading_lists::ReadingListsUseCase;
pub use search_books::{SearchAggregator, SearchMode};
pub use session_store::SessionStore;
