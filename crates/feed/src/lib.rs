//! Incremental-loading feed engine.
//!
//! Owns the pagination-and-filter state machine: the listing store
//! ([`state::ListingState`]), the near-end-of-list triggers
//! ([`trigger`]), and the session that serializes trigger fires into
//! at most one outstanding fetch ([`session::FeedSession`]).
//!
//! State is explicitly owned and injected -- there is no process-wide
//! store. One session per view; drop it and any in-flight fetch result
//! is discarded instead of being applied.

pub mod events;
pub mod session;
pub mod state;
pub mod testing;
pub mod trigger;
