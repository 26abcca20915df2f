//! Search controller.
//!
//! Owns the query, filter, and pagination state, collapses keystroke bursts
//! into one upstream search per quiet period, and exposes state snapshots to
//! rendering collaborators. All mutations happen through discrete events:
//! keystroke, filter change, page change, selection, fetch completion.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::config::Config;
use crate::models::{MovieDetail, MovieSummary, SearchPage, SearchRequest, TypeFilter};
use crate::pagination::{self, PageEntry};
use crate::providers::MovieProvider;

/// Quiet period after the last keystroke before a search is dispatched
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(600);

/// Search state snapshot consumed by rendering collaborators
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query: String,
    /// Current page, always within `[1, total_pages]`
    pub page: u32,
    pub total_results: u32,
    pub type_filter: TypeFilter,
    /// Numeric year or empty
    pub year_filter: String,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            total_results: 0,
            type_filter: TypeFilter::default(),
            year_filter: String::new(),
        }
    }
}

#[derive(Default)]
struct ControllerState {
    search: SearchState,
    results: Vec<MovieSummary>,
    selected: Option<MovieSummary>,
    detail: Option<MovieDetail>,
}

struct Inner {
    provider: Arc<dyn MovieProvider>,
    state: RwLock<ControllerState>,
    /// Single-slot debounce timer; arming a new one aborts the previous,
    /// so at most one fire is ever pending
    debounce: Mutex<Option<JoinHandle<()>>>,
    debounce_delay: Duration,
    /// Latest issued fetch sequence number; completions that are no longer
    /// the latest are discarded instead of overwriting newer state
    fetch_seq: AtomicU64,
}

/// Debounced movie search controller
///
/// Cheap to clone; clones share state. Must be used within a tokio runtime
/// (the debounce timer is a spawned task).
#[derive(Clone)]
pub struct SearchController {
    inner: Arc<Inner>,
}

impl SearchController {
    pub fn new(provider: Arc<dyn MovieProvider>) -> Self {
        Self::with_debounce(provider, DEFAULT_DEBOUNCE)
    }

    /// Builds a controller with the configured quiet period
    pub fn from_config(provider: Arc<dyn MovieProvider>, config: &Config) -> Self {
        Self::with_debounce(provider, Duration::from_millis(config.debounce_ms))
    }

    pub fn with_debounce(provider: Arc<dyn MovieProvider>, debounce_delay: Duration) -> Self {
        Self {
            inner: Arc::new(Inner {
                provider,
                state: RwLock::new(ControllerState::default()),
                debounce: Mutex::new(None),
                debounce_delay,
                fetch_seq: AtomicU64::new(0),
            }),
        }
    }

    /// Records a keystroke.
    ///
    /// Stores the new query, resets to page 1, clears the selection, and
    /// re-arms the debounce timer. The search fires only after the quiet
    /// period elapses with no further keystrokes; a burst of calls results in
    /// exactly one fetch, for the text of the last call.
    pub fn on_text_change(&self, text: impl Into<String>) {
        {
            let mut state = self.inner.write_state();
            state.search.query = text.into();
            state.search.page = 1;
            state.selected = None;
            state.detail = None;
        }

        let mut slot = self.inner.lock_debounce();
        if let Some(pending) = slot.take() {
            pending.abort();
        }

        // The task must not keep the controller alive: holding only a weak
        // reference lets `Inner::drop` run (and abort this handle) as soon as
        // the last controller clone is dropped, and the upgrade fails if the
        // timer somehow outlives it.
        let delay = self.inner.debounce_delay;
        let inner = Arc::downgrade(&self.inner);
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(inner) = inner.upgrade() {
                inner.run_fetch().await;
            }
        }));
    }

    /// Changes the media type filter.
    ///
    /// Resets to page 1 and fetches immediately, without debounce; filters
    /// change rarely relative to typing. No fetch when the trimmed query is
    /// empty or the filter did not actually change.
    pub async fn set_type_filter(&self, filter: TypeFilter) {
        let should_fetch = {
            let mut state = self.inner.write_state();
            if state.search.type_filter == filter {
                false
            } else {
                state.search.type_filter = filter;
                state.search.page = 1;
                !state.search.query.trim().is_empty()
            }
        };

        if should_fetch {
            self.inner.run_fetch().await;
        }
    }

    /// Changes the release year filter; same trigger semantics as
    /// [`set_type_filter`](Self::set_type_filter)
    pub async fn set_year_filter(&self, year: impl Into<String>) {
        let year = year.into();
        let should_fetch = {
            let mut state = self.inner.write_state();
            if state.search.year_filter == year {
                false
            } else {
                state.search.year_filter = year;
                state.search.page = 1;
                !state.search.query.trim().is_empty()
            }
        };

        if should_fetch {
            self.inner.run_fetch().await;
        }
    }

    /// Navigates to a page, clamped to `[1, total_pages]`, and fetches it
    /// with the current query and filters unchanged.
    ///
    /// No fetch when the trimmed query is empty or the clamped target equals
    /// the current page.
    pub async fn set_page(&self, page: u32) {
        let should_fetch = {
            let mut state = self.inner.write_state();
            let total = pagination::total_pages(state.search.total_results);
            let target = page.clamp(1, total);
            if target == state.search.page {
                false
            } else {
                state.search.page = target;
                !state.search.query.trim().is_empty()
            }
        };

        if should_fetch {
            self.inner.run_fetch().await;
        }
    }

    pub async fn next_page(&self) {
        let page = self.state().page;
        self.set_page(page.saturating_add(1)).await;
    }

    pub async fn prev_page(&self) {
        let page = self.state().page;
        self.set_page(page.saturating_sub(1)).await;
    }

    /// Marks an item as selected for the detail panel
    pub fn select(&self, item: MovieSummary) {
        let mut state = self.inner.write_state();
        state.detail = None;
        state.selected = Some(item);
    }

    /// Clears the selection (detail panel dismissed)
    pub fn clear_selection(&self) {
        let mut state = self.inner.write_state();
        state.selected = None;
        state.detail = None;
    }

    /// Fetches full details for the selected item.
    ///
    /// The detail is cached on the controller until the selection changes.
    /// Returns `None` when nothing is selected or the lookup fails; failures
    /// are logged, never propagated.
    pub async fn load_detail(&self) -> Option<MovieDetail> {
        let imdb_id = {
            let state = self.inner.read_state();
            if let Some(detail) = &state.detail {
                return Some(detail.clone());
            }
            state.selected.as_ref()?.imdb_id.clone()
        };

        match self.inner.provider.lookup(&imdb_id).await {
            Ok(detail) => {
                let mut state = self.inner.write_state();
                // The selection may have moved while the lookup was in flight
                if state.selected.as_ref().map(|s| s.imdb_id.as_str()) == Some(&imdb_id) {
                    state.detail = Some(detail.clone());
                }
                Some(detail)
            }
            Err(error) => {
                tracing::warn!(
                    imdb_id = %imdb_id,
                    error = %error,
                    provider = self.inner.provider.name(),
                    "Detail lookup failed"
                );
                None
            }
        }
    }

    pub fn state(&self) -> SearchState {
        self.inner.read_state().search.clone()
    }

    pub fn results(&self) -> Vec<MovieSummary> {
        self.inner.read_state().results.clone()
    }

    pub fn selected(&self) -> Option<MovieSummary> {
        self.inner.read_state().selected.clone()
    }

    pub fn detail(&self) -> Option<MovieDetail> {
        self.inner.read_state().detail.clone()
    }

    pub fn total_pages(&self) -> u32 {
        pagination::total_pages(self.inner.read_state().search.total_results)
    }

    /// Pagination control row for the current state
    pub fn page_window(&self) -> Vec<PageEntry> {
        let state = self.state();
        pagination::page_window(state.page, pagination::total_pages(state.total_results))
    }
}

impl Inner {
    fn read_state(&self) -> RwLockReadGuard<'_, ControllerState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, ControllerState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_debounce(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.debounce.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Issues one upstream search for the current state and applies the
    /// response, unless a newer fetch was issued while this one was in
    /// flight.
    async fn run_fetch(&self) {
        let request = {
            let state = self.read_state();
            SearchRequest {
                query: state.search.query.clone(),
                page: state.search.page,
                type_filter: state.search.type_filter,
                year_filter: state.search.year_filter.clone(),
            }
        };

        let seq = self.fetch_seq.fetch_add(1, Ordering::SeqCst) + 1;

        let page = match self.provider.search(&request).await {
            Ok(page) => page,
            Err(error) => {
                // NoResults and TransportFailure render identically; the
                // distinction lives in the logs
                tracing::warn!(
                    query = %request.query,
                    page = request.page,
                    error = %error,
                    provider = self.provider.name(),
                    "Search failed; treating as no matches"
                );
                SearchPage::empty()
            }
        };

        let mut state = self.write_state();
        if self.fetch_seq.load(Ordering::SeqCst) != seq {
            tracing::debug!(
                query = %request.query,
                seq,
                "Discarding stale search response"
            );
            return;
        }

        // Whole-list replacement: no incremental merge
        state.search.total_results = page.total_results;
        state.results = page.items;
        let total = pagination::total_pages(state.search.total_results);
        state.search.page = state.search.page.clamp(1, total);
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        // A still-pending timer must not fire against a dropped controller
        if let Ok(slot) = self.debounce.get_mut() {
            if let Some(pending) = slot.take() {
                pending.abort();
            }
        }
    }
}
