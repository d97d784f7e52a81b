//! shelfwise - command-line client for the Shelfwise reading platform
//!
//! Readers browse, search and read books; authors publish them. The REST
//! API does the heavy lifting. This crate holds the client-side session
//! model (a decoded access token, persisted between runs) and the
//! dual-source search that queries the local catalog and the external
//! archive side by side.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`library`): books, people, credentials, display policies
//! - **Application Layer** (`application`): use cases and view DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): REST client, token file, console, clock
//! - **Shared** (`shared`): error types, security checks
//!
//! # Example
//!
//! ```no_run
//! use shelfwise::prelude::*;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! let tokens = Arc::new(FileTokenStorage::new("/tmp/shelfwise-token"));
//! let api = RestApiClient::new("http://localhost:8000", Duration::from_secs(10), tokens.clone())?;
//! let navigator = ConsoleNavigator::new();
//! let notifier = StderrNotifier::new();
//!
//! let mut session = SessionStore::new(tokens, &navigator, SystemClock);
//! session.restore()?;
//!
//! let search = SearchAggregator::new(api, &notifier, SearchMode::Combined);
//! search.search("dune").await;
//! println!("{}", TerminalRenderer::search(&search.state()));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod library;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{
        ConsoleNavigator, StderrNotifier, TerminalRenderer,
    };
    pub use crate::adapters::outbound::filesystem::{FileTokenStorage, StdoutPresenter};
    pub use crate::adapters::outbound::network::{CachingBookRepository, RestApiClient};
    pub use crate::adapters::outbound::time::SystemClock;
    pub use crate::application::dto::{
        AuthorProfile, BookDetailView, ExternalBookView, Lookup, OutputFormat, SearchOutcome,
        SearchState, SessionSummary,
    };
    pub use crate::application::use_cases::{
        AccountUseCase, AuthorDirectoryUseCase, BookDetailUseCase, BrowseCatalogUseCase,
        ExternalBookUseCase, PublishBookUseCase, ReadingListsUseCase, SearchAggregator,
        SearchMode, SessionStore,
    };
    pub use crate::library::domain::{
        Author, Book, BookStatus, Chapter, Credential, ExternalBook, Reader, ReadingList,
        SearchResultSet,
    };
    pub use crate::library::policies::{ChapterAvailability, DisplayDefaults};
    pub use crate::library::services::{ReadingListAssembler, TokenDecoder};
    pub use crate::ports::inbound::SessionPort;
    pub use crate::ports::outbound::{
        AuthGateway, AuthorRepository, BookRepository, Clock, Navigator, Notifier,
        OutputPresenter, ReaderRepository, TokenStorage, View,
    };
    pub use crate::shared::Result;
}
