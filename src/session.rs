use crate::cache::SearchCache;
use crate::error::SearchError;
use crate::history::SearchHistory;
use crate::models::{AirportRecord, SearchAirportRequest, SearchResponse};
use tracing::{debug, warn};

/// Blocking seam the session searches through. The interactive client uses
/// [`ProxyBackend`]; tests script their own implementation.
pub trait SearchBackend {
    fn search(&self, keyword: &str) -> Result<Vec<AirportRecord>, SearchError>;
}

/// Backend that forwards searches to the proxy's `POST /search-airport`.
pub struct ProxyBackend {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl ProxyBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl SearchBackend for ProxyBackend {
    fn search(&self, keyword: &str) -> Result<Vec<AirportRecord>, SearchError> {
        let response = self
            .client
            .post(format!("{}/search-airport", self.base_url))
            .json(&SearchAirportRequest {
                airport: Some(keyword.to_string()),
            })
            .send()
            .map_err(|err| SearchError::Upstream(err.to_string()))?;

        if !response.status().is_success() {
            return Err(SearchError::Upstream(format!(
                "proxy returned {}",
                response.status()
            )));
        }

        let payload: SearchResponse = response
            .json()
            .map_err(|err| SearchError::Upstream(err.to_string()))?;
        Ok(payload.data)
    }
}

/// Lifecycle of the current query. `Searching` doubles as the busy
/// indicator: it is entered when a lookup starts and left when the lookup
/// actually resolves, never on a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Searching,
    Resolved,
    Failed,
}

/// What a search attempt ended as, from the user's point of view.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Results are displayed; the count is how many.
    Results(usize),
    /// The upstream returned zero matches. Nothing was cached or recorded.
    NotFound,
    /// The term was blank; no lookup was attempted.
    Invalid,
    /// The lookup failed. The message is logged detail, not for end users.
    Failed(String),
    /// A newer search was issued before this one resolved; its response was
    /// discarded without touching any state.
    Superseded,
}

/// Owns all search-facing state for one session: the active query, the
/// per-term result cache, the persisted history and the current selection.
/// Every mutation goes through the methods below.
pub struct SearchSession<B> {
    backend: B,
    cache: SearchCache,
    history: SearchHistory,
    query: String,
    results: Vec<AirportRecord>,
    selected: Option<AirportRecord>,
    status: SessionStatus,
    latest_request: u64,
}

impl<B: SearchBackend> SearchSession<B> {
    pub fn new(backend: B, history: SearchHistory) -> Self {
        Self {
            backend,
            cache: SearchCache::new(),
            history,
            query: String::new(),
            results: Vec::new(),
            selected: None,
            status: SessionStatus::Idle,
            latest_request: 0,
        }
    }

    /// Resolve `term`, preferring the cache over the network.
    ///
    /// A cache hit is served without any backend call. On a miss the backend
    /// result is applied through [`apply_search`](Self::apply_search), so a
    /// response that arrives after a newer search was issued is dropped.
    pub fn search(&mut self, term: &str) -> SearchOutcome {
        if term.trim().is_empty() {
            return SearchOutcome::Invalid;
        }
        self.query = term.to_string();

        let cached = self.cache.get(term).map(|records| records.to_vec());
        if let Some(records) = cached {
            debug!(term, count = records.len(), "serving cached results");
            self.results = records;
            self.record_success(term);
            return SearchOutcome::Results(self.results.len());
        }

        let request = self.begin_search();
        let outcome = self.backend.search(term);
        self.apply_search(request, term, outcome)
    }

    /// Issue a new request id and enter `Searching`. Any response tagged
    /// with an earlier id is stale from this point on.
    pub fn begin_search(&mut self) -> u64 {
        self.latest_request += 1;
        self.status = SessionStatus::Searching;
        self.latest_request
    }

    /// Apply a backend response for `term`. A no-op unless `request` is the
    /// latest id issued by [`begin_search`](Self::begin_search).
    pub fn apply_search(
        &mut self,
        request: u64,
        term: &str,
        outcome: Result<Vec<AirportRecord>, SearchError>,
    ) -> SearchOutcome {
        if request != self.latest_request {
            debug!(request, latest = self.latest_request, "discarding stale search response");
            return SearchOutcome::Superseded;
        }

        match outcome {
            Ok(records) if records.is_empty() => {
                // A distinct success: displayed results stay as they were and
                // neither the cache nor the history is touched.
                self.status = SessionStatus::Resolved;
                SearchOutcome::NotFound
            }
            Ok(records) => {
                self.cache.insert(term, records.clone());
                self.results = records;
                self.record_success(term);
                SearchOutcome::Results(self.results.len())
            }
            Err(err) => {
                warn!(term, %err, "search failed");
                self.status = SessionStatus::Failed;
                SearchOutcome::Failed(err.to_string())
            }
        }
    }

    /// Replay a history entry. Runs the full search flow, so the term's
    /// results are always displayed afterwards, re-fetched on a cache miss.
    pub fn select_from_history(&mut self, term: &str) -> SearchOutcome {
        self.search(term)
    }

    /// Empty the history, in memory and on disk. The cache is unaffected.
    pub fn clear_history(&mut self) -> anyhow::Result<()> {
        self.history.clear()
    }

    /// Open the detail view for the result at `index`. No network involved;
    /// the record is already in memory.
    pub fn select_airport(&mut self, index: usize) -> Option<&AirportRecord> {
        let record = self.results.get(index)?.clone();
        self.selected = Some(record);
        self.selected.as_ref()
    }

    /// Close the detail view.
    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[AirportRecord] {
        &self.results
    }

    pub fn selected(&self) -> Option<&AirportRecord> {
        self.selected.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn history(&self) -> &[String] {
        self.history.terms()
    }

    pub fn cache(&self) -> &SearchCache {
        &self.cache
    }

    /// History updates on every successful resolution, cached or fetched.
    /// A persistence failure is logged and does not fail the search.
    fn record_success(&mut self, term: &str) {
        self.status = SessionStatus::Resolved;
        if let Err(err) = self.history.add(term) {
            warn!(term, %err, "failed to persist search history");
        }
    }
}
