/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (REST API, token file, console, clock).
pub mod account_repositories;
pub mod book_repository;
pub mod clock;
pub mod navigator;
pub mod notifier;
pub mod output_presenter;
pub mod token_storage;

pub use account_repositories::{AuthGateway, AuthorRepository, ReaderRepository};
pub use book_repository::BookRepository;
pub use clock::Clock;
pub use navigator::{Navigator, View};
pub use notifier::Notifier;
pub use output_presenter::OutputPresenter;
pub use token_storage::TokenStorage;
