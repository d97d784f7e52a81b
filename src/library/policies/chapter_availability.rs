use crate::library::domain::BookStatus;
use serde::Serialize;

/// Whether the "Download & Read" action applies to a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DownloadState {
    /// Imported metadata only; the action is offered
    Available,
    /// A download was triggered; the user has to check back later
    Processing,
    /// The text is already here (ready or written locally)
    NotApplicable,
}

/// What the chapter section of a book view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChapterListing {
    /// The book has chapters; they are listed whatever the status
    Listed,
    /// No chapters yet because only the archive metadata was imported
    DownloadHint,
    /// No chapters yet because the download is still being processed
    ProcessingHint,
    /// No chapters and nothing pending
    Empty,
}

/// ChapterAvailability policy for the book detail view
///
/// A display switch only: transitions are not enforced here. The one
/// transition the client performs itself is `Available -> Processing`
/// after a successful download trigger; everything else comes from the
/// server on the next load.
pub struct ChapterAvailability;

impl ChapterAvailability {
    pub const DOWNLOAD_HINT: &'static str =
        "This book was imported from the archive and has no chapters yet. Use \"Download & Read\" to fetch it.";
    pub const PROCESSING_HINT: &'static str =
        "Your download is being processed. Check back in a few minutes and reload this book.";
    pub const NO_CHAPTERS: &'static str = "No chapters available yet.";

    pub fn download_state(status: BookStatus) -> DownloadState {
        match status {
            BookStatus::Imported => DownloadState::Available,
            BookStatus::Processing => DownloadState::Processing,
            BookStatus::Ready | BookStatus::Local => DownloadState::NotApplicable,
        }
    }

    pub fn listing(has_chapters: bool, download: DownloadState) -> ChapterListing {
        if has_chapters {
            return ChapterListing::Listed;
        }
        match download {
            DownloadState::Available => ChapterListing::DownloadHint,
            DownloadState::Processing => ChapterListing::ProcessingHint,
            DownloadState::NotApplicable => ChapterListing::Empty,
        }
    }

    /// Message shown instead of a chapter list, if any
    pub fn message(listing: ChapterListing) -> Option<&'static str> {
        match listing {
            ChapterListing::Listed => None,
            ChapterListing::DownloadHint => Some(Self::DOWNLOAD_HINT),
            ChapterListing::ProcessingHint => Some(Self::PROCESSING_HINT),
            ChapterListing::Empty => Some(Self::NO_CHAPTERS),
        }
    }
}
