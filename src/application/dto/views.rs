use crate::library::domain::{Author, Book, ExternalBook};
use crate::library::policies::{ChapterAvailability, ChapterListing, DownloadState};
use serde::Serialize;

/// Book detail view state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookDetailView {
    pub book: Book,
    pub download: DownloadState,
    pub listing: ChapterListing,
    /// Present when logged in, enabling the list actions
    pub reader_id: Option<String>,
}

impl BookDetailView {
    pub fn new(book: Book, reader_id: Option<String>) -> Self {
        let download = ChapterAvailability::download_state(book.status());
        let listing = ChapterAvailability::listing(book.has_chapters(), download);
        Self {
            book,
            download,
            listing,
            reader_id,
        }
    }

    /// Switches to processing after a successful download trigger, without
    /// a reload
    pub fn mark_processing(&mut self) {
        self.download = DownloadState::Processing;
        self.listing = ChapterAvailability::listing(self.book.has_chapters(), self.download);
    }

    pub fn message(&self) -> Option<&'static str> {
        ChapterAvailability::message(self.listing)
    }
}

/// What opening an archive item resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ExternalBookView {
    /// Already imported; the caller was sent to the local book
    RedirectToLocal { local_id: String },
    Details { book: ExternalBook },
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorProfile {
    pub author: Author,
    pub books: Vec<Book>,
}
