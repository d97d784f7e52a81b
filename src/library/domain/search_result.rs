use crate::library::domain::{Book, ExternalBook};
use serde::{Deserialize, Serialize};

/// Response of `GET /books/search?q=`
///
/// A half the server leaves out reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CombinedSearchPayload {
    #[serde(default)]
    pub local: Vec<Book>,
    #[serde(default)]
    pub external: Vec<ExternalBook>,
}

/// SearchResultSet - the two result panels produced by one query
///
/// The sequences are independent: an archive item that was already
/// imported may show up in both, and nothing here tries to match them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResultSet {
    query: String,
    local_matches: Vec<Book>,
    external_matches: Vec<ExternalBook>,
}

impl SearchResultSet {
    pub fn new(
        query: impl Into<String>,
        local_matches: Vec<Book>,
        external_matches: Vec<ExternalBook>,
    ) -> Self {
        Self {
            query: query.into(),
            local_matches,
            external_matches,
        }
    }

    pub fn empty(query: impl Into<String>) -> Self {
        Self::new(query, Vec::new(), Vec::new())
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn local_matches(&self) -> &[Book] {
        &self.local_matches
    }

    pub fn external_matches(&self) -> &[ExternalBook] {
        &self.external_matches
    }

    pub fn total(&self) -> usize {
        self.local_matches.len() + self.external_matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl From<(String, CombinedSearchPayload)> for SearchResultSet {
    fn from((query, payload): (String, CombinedSearchPayload)) -> Self {
        Self::new(query, payload.local, payload.external)
    }
}
