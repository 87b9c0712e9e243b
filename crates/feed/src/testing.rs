//! Test support: a scripted in-memory [`JobFetcher`] and record
//! builders, shared by the unit and integration tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use jobfeed_client::fetcher::{FetchError, JobFetcher};
use jobfeed_core::job::JobRecord;

/// A fetcher that replays a fixed script of page results and records
/// every `(page, page_size)` request it receives.
///
/// Once the script is exhausted, further requests return empty pages
/// (the remote API's terminal behaviour).
pub struct ScriptedFetcher {
    script: Mutex<VecDeque<Result<Vec<JobRecord>, FetchError>>>,
    requests: Arc<Mutex<Vec<(u32, u32)>>>,
}

impl ScriptedFetcher {
    pub fn new(script: Vec<Result<Vec<JobRecord>, FetchError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Handle to the request log; clone before moving the fetcher into
    /// a session.
    pub fn requests(&self) -> Arc<Mutex<Vec<(u32, u32)>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl JobFetcher for ScriptedFetcher {
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<Vec<JobRecord>, FetchError> {
        self.requests.lock().unwrap().push((page, page_size));
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// A minimal record with the given uid and no optional fields.
pub fn job(uid: &str) -> JobRecord {
    JobRecord {
        jd_uid: uid.to_string(),
        company_name: None,
        job_role: None,
        location: None,
        min_exp: None,
        max_exp: None,
        min_jd_salary: None,
        max_jd_salary: None,
        salary_currency_code: None,
        job_details_from_company: None,
        jd_link: None,
        logo_url: None,
    }
}

/// `count` records with uids `"{prefix}-0"` .. `"{prefix}-{count-1}"`.
pub fn page_of(count: usize, prefix: &str) -> Vec<JobRecord> {
    (0..count).map(|i| job(&format!("{prefix}-{i}"))).collect()
}
