//! Pure domain logic for the job feed.
//!
//! Zero internal dependencies so it can be used by the client, feed,
//! and viewer layers alike: the job record model, the six-field filter
//! predicate, pagination arithmetic, and card-text helpers.

pub mod error;
pub mod filter;
pub mod job;
pub mod pagination;
pub mod text;
pub mod types;
