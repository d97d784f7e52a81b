use crate::library::domain::{Book, ExternalBook};

/// DisplayDefaults policy for optional fields of read-only records
///
/// Records coming back from the API are never corrected, only defaulted
/// at display time.
pub struct DisplayDefaults;

impl DisplayDefaults {
    pub const CARD_COVER_PLACEHOLDER: &'static str = "https://placehold.co/200x300?text=No+Cover";
    pub const DETAIL_COVER_PLACEHOLDER: &'static str = "https://placehold.co/300x450?text=Cover";
    pub const UNKNOWN_AUTHOR: &'static str = "Unknown Author";

    /// Cover for a book in a grid or list
    pub fn card_cover(book: &Book) -> &str {
        non_blank(book.image.as_deref()).unwrap_or(Self::CARD_COVER_PLACEHOLDER)
    }

    /// Cover for the book detail view
    pub fn detail_cover(book: &Book) -> &str {
        non_blank(book.image.as_deref()).unwrap_or(Self::DETAIL_COVER_PLACEHOLDER)
    }

    /// Cover of an archive item; `None` renders a placeholder glyph
    pub fn external_cover(book: &ExternalBook) -> Option<&str> {
        non_blank(book.cover_url.as_deref()).or_else(|| non_blank(book.image.as_deref()))
    }

    pub fn book_author(book: &Book) -> &str {
        non_blank(Some(book.author.as_str())).unwrap_or(Self::UNKNOWN_AUTHOR)
    }

    pub fn external_author(book: &ExternalBook) -> &str {
        non_blank(book.authors.as_deref())
            .or_else(|| non_blank(book.author.as_deref()))
            .unwrap_or(Self::UNKNOWN_AUTHOR)
    }

    pub fn external_description(book: &ExternalBook) -> &str {
        non_blank(book.description.as_deref())
            .or_else(|| non_blank(book.biography.as_deref()))
            .unwrap_or("")
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
