use crate::library::domain::SearchResultSet;
use serde::Serialize;

/// Visible state of the search view
///
/// `Idle -> Loading -> {Populated | Empty | Failed}`. A new query starts
/// over from `Loading`; results of the previous query are replaced, never
/// merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SearchState {
    #[default]
    Idle,
    Loading {
        query: String,
    },
    /// At least one source returned something
    Populated {
        results: SearchResultSet,
    },
    /// Both sources came back empty, or the query was blank
    Empty {
        results: SearchResultSet,
    },
    /// The request layer failed
    Failed {
        query: String,
        message: String,
    },
}

impl SearchState {
    /// Settles a finished query into `Populated` or `Empty`
    pub fn settled(results: SearchResultSet) -> Self {
        if results.is_empty() {
            SearchState::Empty { results }
        } else {
            SearchState::Populated { results }
        }
    }

    pub fn results(&self) -> Option<&SearchResultSet> {
        match self {
            SearchState::Populated { results } | SearchState::Empty { results } => Some(results),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SearchState::Loading { .. })
    }
}

/// What happened to one `search` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The call was still the latest one and its state is now visible
    Applied(SearchState),
    /// A newer search started meanwhile; the response was dropped
    Superseded { query: String },
}

impl SearchOutcome {
    pub fn is_superseded(&self) -> bool {
        matches!(self, SearchOutcome::Superseded { .. })
    }
}
