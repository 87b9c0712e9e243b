//! Feed-level events emitted by the session.
//!
//! Broadcast to whoever subscribes ([`crate::session::FeedSession::subscribe`]);
//! the presentation layer uses them to refresh, log, or show a banner.
//! Dropped events are fine -- state reads remain the source of truth.

use serde::Serialize;

/// A state change in the feed worth reacting to.
#[derive(Debug, Clone, Serialize)]
pub enum FeedEvent {
    /// A page of records was fetched and appended.
    PageLoaded { page: u32, count: usize },

    /// A fetch succeeded but returned zero records (end of data).
    PageEmpty { page: u32 },

    /// A fetch failed; nothing was appended and loading was cleared.
    FetchFailed {
        page: u32,
        /// Human-readable failure description.
        error: String,
    },

    /// The filter criteria changed (wholesale or single field).
    FiltersChanged,

    /// All filter fields were reset to empty.
    FiltersCleared,
}
