/// Data Transfer Objects for application layer
///
/// DTOs carry use case results to the adapters (renderer, JSON output),
/// keeping the domain layer isolated from presentation.
mod lookup;
mod output_format;
mod search_state;
mod session_summary;
mod views;

pub use lookup::Lookup;
pub use output_format::OutputFormat;
pub use search_state::{SearchOutcome, SearchState};
pub use session_summary::SessionSummary;
pub use views::{AuthorProfile, BookDetailView, ExternalBookView};
