//! REST client for the job-listing endpoint.
//!
//! The remote API exposes one operation: `POST {base_url}` with a JSON
//! `{ limit, offset }` body, returning a page of job records. This
//! module wraps it with [`reqwest`] and maps transport, status, and
//! decode failures into [`JobsApiError`].

use serde::{Deserialize, Serialize};

use jobfeed_core::job::JobRecord;
use jobfeed_core::pagination::offset_for_page;

/// HTTP client for the job-listing API.
pub struct JobsApi {
    client: reqwest::Client,
    base_url: String,
}

/// JSON body of the page request.
#[derive(Debug, Serialize)]
struct PageRequest {
    limit: u32,
    offset: u32,
}

/// Response envelope returned by the job-listing endpoint.
///
/// An empty `jdList` is a valid terminal response, not an error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    /// The page of job records, in server order.
    #[serde(default)]
    pub jd_list: Vec<JobRecord>,
    /// Total matching records, when the server reports it.
    #[serde(default)]
    pub total_count: Option<i64>,
}

/// Errors from the job API layer.
#[derive(Debug, thiserror::Error)]
pub enum JobsApiError {
    /// The HTTP request itself failed (network, DNS, TLS) or the
    /// response body was not the expected JSON shape.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Job API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl JobsApi {
    /// Create a new client for the job-listing endpoint.
    ///
    /// * `base_url` - Full endpoint URL, e.g.
    ///   `https://api.weekday.technology/adhoc/getSampleJdJSON`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Endpoint URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one page of job records.
    ///
    /// Sends `POST {base_url}` with `limit = page_size` and
    /// `offset = (page - 1) * page_size`. Performs no state mutation;
    /// the feed session sequences the loading flag around this call.
    pub async fn fetch_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<PageResponse, JobsApiError> {
        let body = PageRequest {
            limit: page_size,
            offset: offset_for_page(page, page_size),
        };

        let response = self
            .client
            .post(&self.base_url)
            .json(&body)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`JobsApiError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, JobsApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(JobsApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, JobsApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_serializes_limit_and_offset() {
        let body = PageRequest {
            limit: 10,
            offset: 20,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"limit": 10, "offset": 20}));
    }

    #[test]
    fn page_response_decodes_jd_list() {
        let json = r#"{"jdList": [{"jdUid": "a"}, {"jdUid": "b"}], "totalCount": 940}"#;
        let page: PageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.jd_list.len(), 2);
        assert_eq!(page.jd_list[0].jd_uid, "a");
        assert_eq!(page.total_count, Some(940));
    }

    #[test]
    fn empty_jd_list_is_valid() {
        let page: PageResponse = serde_json::from_str(r#"{"jdList": []}"#).unwrap();
        assert!(page.jd_list.is_empty());
        assert_eq!(page.total_count, None);
    }

    #[test]
    fn missing_jd_list_decodes_as_empty() {
        let page: PageResponse = serde_json::from_str("{}").unwrap();
        assert!(page.jd_list.is_empty());
    }
}
