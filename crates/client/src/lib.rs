//! HTTP client for the remote job-listing API.
//!
//! [`api::JobsApi`] wraps the single paginated POST endpoint with
//! [`reqwest`]; [`fetcher::JobFetcher`] is the seam the feed layer
//! consumes, so orchestration can be tested without a network.

pub mod api;
pub mod fetcher;
