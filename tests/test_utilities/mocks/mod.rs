/// Mock implementations for testing
mod mock_account_service;
mod mock_book_repository;
mod mock_clock;
mod mock_navigator;
mod mock_notifier;
mod mock_token_storage;

#[allow(unused_imports)]
pub use mock_account_service::MockAccountService;
#[allow(unused_imports)]
pub use mock_book_repository::MockBookRepository;
#[allow(unused_imports)]
pub use mock_clock::FixedClock;
#[allow(unused_imports)]
pub use mock_navigator::RecordingNavigator;
#[allow(unused_imports)]
pub use mock_notifier::RecordingNotifier;
#[allow(unused_imports)]
pub use mock_token_storage::MemoryTokenStorage;
