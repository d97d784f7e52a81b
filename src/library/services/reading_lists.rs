use crate::library::domain::{Book, Reader, ReadingList};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// A reader's three lists resolved to full books
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReadingShelf {
    pub favorites: Vec<Book>,
    pub in_progress: Vec<Book>,
    pub finished: Vec<Book>,
}

impl ReadingShelf {
    pub fn list(&self, list: ReadingList) -> &[Book] {
        match list {
            ReadingList::Favorites => &self.favorites,
            ReadingList::InProgress => &self.in_progress,
            ReadingList::Finished => &self.finished,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty() && self.in_progress.is_empty() && self.finished.is_empty()
    }
}

/// ReadingListAssembler resolves reading lists with a single batch lookup
pub struct ReadingListAssembler;

impl ReadingListAssembler {
    /// Book ids across all lists, first occurrence wins
    pub fn unique_book_ids(reader: &Reader) -> Vec<String> {
        let mut seen = HashSet::new();
        ReadingList::ALL
            .iter()
            .flat_map(|list| reader.list(*list).iter())
            .filter(|id| seen.insert(id.as_str()))
            .cloned()
            .collect()
    }

    /// Maps batch results back onto each list
    ///
    /// List order is preserved. Ids the batch did not return (deleted
    /// books) are dropped.
    pub fn assemble(reader: &Reader, books: Vec<Book>) -> ReadingShelf {
        let by_id: HashMap<String, Book> = books
            .into_iter()
            .map(|book| (book.id.clone(), book))
            .collect();
        let resolve = |ids: &[String]| -> Vec<Book> {
            ids.iter().filter_map(|id| by_id.get(id).cloned()).collect()
        };

        ReadingShelf {
            favorites: resolve(&reader.favorites),
            in_progress: resolve(&reader.in_progress),
            finished: resolve(&reader.finished),
        }
    }
}
