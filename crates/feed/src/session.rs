//! Feed session: serializes trigger fires into at most one
//! outstanding fetch and applies the results to the listing store.
//!
//! The session owns the [`ListingState`] outright and is driven
//! through `&mut self`, so all mutation happens on one logical thread
//! and the only suspension point is the network fetch. The loading
//! gate is still enforced explicitly: a trigger fire observed while a
//! fetch is outstanding is dropped, never queued, which closes the
//! duplicate/skipped-page race of naive scroll polling.
//!
//! Teardown uses a [`CancellationToken`] as a liveness check: a fetch
//! that resolves after [`FeedSession::shutdown`] discards its result
//! instead of applying it to a dead view.

use tokio::sync::broadcast;
use tokio_util::sync::CancellationToken;

use jobfeed_client::fetcher::JobFetcher;
use jobfeed_core::error::CoreError;
use jobfeed_core::filter::FilterCriteria;
use jobfeed_core::job::JobRecord;

use crate::events::FeedEvent;
use crate::state::ListingState;
use crate::trigger::{NearEndTrigger, Viewport};

/// Broadcast channel capacity for feed events.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// One view's feed: store, fetcher, trigger, and teardown token.
///
/// Created at view mount, discarded at unmount. Records only ever
/// accumulate; the page cursor only ever moves forward.
pub struct FeedSession {
    /// Correlation ID for log lines from this session.
    session_id: uuid::Uuid,
    state: ListingState,
    fetcher: Box<dyn JobFetcher>,
    trigger: Box<dyn NearEndTrigger>,
    page_size: u32,
    /// False until the first accepted fire: the first fetch loads the
    /// current page (1); every later fire advances the cursor first.
    started: bool,
    event_tx: broadcast::Sender<FeedEvent>,
    cancel: CancellationToken,
}

impl FeedSession {
    /// Create a session with empty state on page 1.
    pub fn new(
        fetcher: Box<dyn JobFetcher>,
        trigger: Box<dyn NearEndTrigger>,
        page_size: u32,
    ) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let session_id = uuid::Uuid::new_v4();

        tracing::debug!(session_id = %session_id, page_size, "Feed session created");

        Self {
            session_id,
            state: ListingState::new(),
            fetcher,
            trigger,
            page_size,
            started: false,
            event_tx,
            cancel: CancellationToken::new(),
        }
    }

    // ---- reads ----

    /// The underlying listing state (records, page, loading, filters).
    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// The filtered view of the accumulated records.
    pub fn visible_records(&self) -> Vec<&JobRecord> {
        self.state.visible_records()
    }

    /// Subscribe to feed events.
    pub fn subscribe(&self) -> broadcast::Receiver<FeedEvent> {
        self.event_tx.subscribe()
    }

    /// Token that is cancelled when the session shuts down.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    // ---- loading ----

    /// Report a fresh viewport snapshot.
    ///
    /// Runs the trigger; if it fires and no fetch is outstanding,
    /// loads the next page before returning. Returns true when a load
    /// was performed. A fire observed while loading is dropped -- the
    /// trigger will re-arm and fire again on a later crossing.
    pub async fn notify_near_end(&mut self, viewport: &Viewport) -> bool {
        if !self.trigger.observe(viewport) {
            return false;
        }
        if self.state.loading() {
            tracing::debug!(
                session_id = %self.session_id,
                page = self.state.page(),
                "Trigger fired while loading; dropped",
            );
            return false;
        }
        self.load_next_page().await;
        true
    }

    /// Load the next page of records.
    ///
    /// Sequencing: gate on the loading flag, advance the cursor (the
    /// very first load keeps it at page 1), set `loading`, fetch, then
    /// apply. Failures are absorbed here: logged, broadcast as
    /// [`FeedEvent::FetchFailed`], nothing appended -- and the loading
    /// flag is always cleared so the view never wedges. An empty page
    /// is a valid response; later triggers may harmlessly fetch more
    /// empty pages (accepted inefficiency, not tracked as an end
    /// state).
    pub async fn load_next_page(&mut self) {
        if self.state.loading() || self.cancel.is_cancelled() {
            return;
        }

        if self.started {
            self.state.increment_page();
        } else {
            self.started = true;
        }
        let page = self.state.page();

        self.state.set_loading(true);
        let result = self.fetcher.fetch_page(page, self.page_size).await;

        // The view may have been torn down while the fetch was in
        // flight; a stale result must not be applied.
        if self.cancel.is_cancelled() {
            tracing::debug!(
                session_id = %self.session_id,
                page,
                "Session shut down mid-fetch; discarding result",
            );
            return;
        }

        match result {
            Ok(records) if records.is_empty() => {
                tracing::debug!(session_id = %self.session_id, page, "Page was empty");
                let _ = self.event_tx.send(FeedEvent::PageEmpty { page });
            }
            Ok(records) => {
                let count = records.len();
                self.state.append_records(records);
                self.state.record_arrival(page, count);
                tracing::info!(
                    session_id = %self.session_id,
                    page,
                    count,
                    total = self.state.records().len(),
                    "Page loaded",
                );
                let _ = self.event_tx.send(FeedEvent::PageLoaded { page, count });
            }
            Err(e) => {
                tracing::warn!(
                    session_id = %self.session_id,
                    page,
                    error = %e,
                    "Fetch failed; no records appended",
                );
                let _ = self.event_tx.send(FeedEvent::FetchFailed {
                    page,
                    error: e.to_string(),
                });
            }
        }

        self.state.set_loading(false);
    }

    // ---- filters ----

    /// Replace the filter record wholesale.
    pub fn set_filters(&mut self, filters: FilterCriteria) {
        self.state.set_filters(filters);
        let _ = self.event_tx.send(FeedEvent::FiltersChanged);
    }

    /// Merge a single named filter field.
    pub fn set_filter_field(&mut self, name: &str, value: &str) -> Result<(), CoreError> {
        self.state.set_filter_field(name, value)?;
        let _ = self.event_tx.send(FeedEvent::FiltersChanged);
        Ok(())
    }

    /// Reset all filter fields; records and page are untouched.
    pub fn clear_filters(&mut self) {
        self.state.clear_filters();
        let _ = self.event_tx.send(FeedEvent::FiltersCleared);
    }

    // ---- teardown ----

    /// Tear the session down. Any in-flight fetch result is discarded
    /// at resolution instead of being applied.
    pub fn shutdown(&self) {
        tracing::debug!(session_id = %self.session_id, "Feed session shutting down");
        self.cancel.cancel();
    }
}

impl Drop for FeedSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
