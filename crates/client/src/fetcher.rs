//! The fetch seam between the feed orchestration and the network.
//!
//! The feed session depends on [`JobFetcher`], not on [`JobsApi`]
//! directly, so tests can drive the pagination state machine with a
//! scripted in-memory fetcher.

use async_trait::async_trait;

use jobfeed_core::job::JobRecord;

use crate::api::{JobsApi, JobsApiError};

/// Fetch failure as seen by the feed layer.
///
/// There is exactly one user-visible error kind: the page could not be
/// fetched. The session logs it, clears the loading flag, and appends
/// nothing; there is no retry.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// A real HTTP fetch failed.
    #[error(transparent)]
    Api(#[from] JobsApiError),

    /// Any other fetch failure (used by test fetchers).
    #[error("Fetch failed: {0}")]
    Other(String),
}

/// A source of job-record pages.
#[async_trait]
pub trait JobFetcher: Send + Sync {
    /// Fetch one page of records. An empty vec is a valid response
    /// meaning "no more data at this offset".
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<Vec<JobRecord>, FetchError>;
}

#[async_trait]
impl JobFetcher for JobsApi {
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<Vec<JobRecord>, FetchError> {
        let response = JobsApi::fetch_page(self, page, page_size).await?;
        tracing::debug!(
            page,
            count = response.jd_list.len(),
            total_count = ?response.total_count,
            "Fetched page from job API",
        );
        Ok(response.jd_list)
    }
}
