use crate::application::dto::{SearchOutcome, SearchState};
use crate::library::domain::{CombinedSearchPayload, SearchResultSet};
use crate::ports::outbound::{BookRepository, Notifier};
use crate::shared::Result;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::Instrument;
use uuid::Uuid;

/// How the two result panels are fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// One call to the combined search endpoint
    #[default]
    Combined,
    /// Catalog and archive queried concurrently; one failing source does
    /// not hide the other
    Independent,
}

impl std::str::FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "combined" => Ok(SearchMode::Combined),
            "independent" => Ok(SearchMode::Independent),
            _ => Err(format!(
                "Invalid search mode: {}. Please specify 'combined' or 'independent'",
                s
            )),
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Combined => write!(f, "combined"),
            SearchMode::Independent => write!(f, "independent"),
        }
    }
}

/// SearchAggregator - dual-source book search with a stale-response guard
///
/// Every call to `search` takes a ticket before its first await. When the
/// response arrives and a newer ticket has been issued meanwhile, the
/// response is dropped and the visible state is left alone. Superseded
/// requests are not cancelled.
///
/// # Type Parameters
/// * `B` - BookRepository implementation
/// * `N` - Notifier implementation
pub struct SearchAggregator<B, N> {
    books: B,
    notifier: N,
    mode: SearchMode,
    latest_ticket: AtomicU64,
    state: Mutex<SearchState>,
}

impl<B, N> SearchAggregator<B, N>
where
    B: BookRepository,
    N: Notifier,
{
    pub fn new(books: B, notifier: N, mode: SearchMode) -> Self {
        Self {
            books,
            notifier,
            mode,
            latest_ticket: AtomicU64::new(0),
            state: Mutex::new(SearchState::Idle),
        }
    }

    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    /// Snapshot of the visible state
    pub fn state(&self) -> SearchState {
        self.lock_state().clone()
    }

    /// Runs one query against both sources
    ///
    /// A blank query settles immediately into an empty result set without
    /// touching the network. It still takes a ticket, so it supersedes any
    /// search in flight.
    pub async fn search(&self, query: &str) -> SearchOutcome {
        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        let query = query.trim();

        if query.is_empty() {
            let state = SearchState::settled(SearchResultSet::empty(query));
            *self.lock_state() = state.clone();
            self.notifier.finish_loading();
            return SearchOutcome::Applied(state);
        }

        *self.lock_state() = SearchState::Loading {
            query: query.to_string(),
        };
        self.notifier
            .start_loading(&format!("Searching for \"{}\"...", query));

        let request_id = Uuid::new_v4();
        let span = tracing::info_span!("search", %request_id, query, mode = %self.mode);
        let fetched = self.fetch(query).instrument(span).await;

        if !self.is_latest(ticket) {
            tracing::debug!(%request_id, query, ticket, "dropping superseded search response");
            return SearchOutcome::Superseded {
                query: query.to_string(),
            };
        }
        self.notifier.finish_loading();

        let state = match fetched {
            Ok(results) => {
                tracing::info!(
                    %request_id,
                    local = results.local_matches().len(),
                    external = results.external_matches().len(),
                    "search settled"
                );
                SearchState::settled(results)
            }
            Err(e) => {
                tracing::warn!(%request_id, error = %e, "search failed");
                let message = e.to_string();
                self.notifier.alert(&message);
                SearchState::Failed {
                    query: query.to_string(),
                    message,
                }
            }
        };

        *self.lock_state() = state.clone();
        SearchOutcome::Applied(state)
    }

    async fn fetch(&self, query: &str) -> Result<SearchResultSet> {
        match self.mode {
            SearchMode::Combined => {
                let payload = self.books.search(query).await?;
                Ok(SearchResultSet::from((query.to_string(), payload)))
            }
            SearchMode::Independent => self.fetch_independently(query).await,
        }
    }

    async fn fetch_independently(&self, query: &str) -> Result<SearchResultSet> {
        let (local, external) = futures::join!(
            self.books.search(query),
            self.books.search_external(query)
        );

        match (local, external) {
            (Ok(local), Ok(external)) => Ok(SearchResultSet::new(query, local.local, external)),
            (Ok(local), Err(e)) => {
                tracing::warn!(error = %e, "archive search failed, showing catalog results only");
                self.notifier
                    .report(&format!("Archive search unavailable: {}", e));
                Ok(SearchResultSet::new(query, local.local, Vec::new()))
            }
            (Err(e), Ok(external)) => {
                tracing::warn!(error = %e, "catalog search failed, showing archive results only");
                self.notifier
                    .report(&format!("Catalog search unavailable: {}", e));
                let payload = CombinedSearchPayload {
                    local: Vec::new(),
                    external,
                };
                Ok(SearchResultSet::from((query.to_string(), payload)))
            }
            (Err(e), Err(_)) => Err(e),
        }
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.latest_ticket.load(Ordering::SeqCst) == ticket
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, SearchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
