//! Text rendering for job cards and the detail view.
//!
//! Purely derived from store state; holds no state of its own and can
//! be swapped out without touching the feed core.

use jobfeed_core::job::JobRecord;
use jobfeed_core::text::{capitalize_first, salary_summary, truncate_words};

/// Render one job card. `key` is the duplicate-tolerant display key
/// from the store; `word_limit` caps the description excerpt.
pub fn render_card(job: &JobRecord, key: &str, word_limit: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!("[{key}]\n"));

    if let Some(company) = &job.company_name {
        out.push_str(&format!("  {company}\n"));
    }
    if let Some(role) = &job.job_role {
        out.push_str(&format!("  {}\n", capitalize_first(role)));
    }
    if let Some(location) = &job.location {
        out.push_str(&format!("  {}\n", capitalize_first(location)));
    }
    if let Some(salary) = salary_summary(job) {
        out.push_str(&format!("  Estimated Salary: {salary}\n"));
    }
    if let Some(details) = &job.job_details_from_company {
        out.push_str(&format!("  About: {}\n", truncate_words(details, word_limit)));
    }
    if let Some(min_exp) = job.min_exp {
        out.push_str(&format!("  Minimum Experience: {min_exp} years\n"));
    }
    if let Some(link) = &job.jd_link {
        out.push_str(&format!("  Apply: {link}\n"));
    }

    out
}

/// Render the full detail view: the complete company description,
/// untruncated. A pure read; nothing in the store changes.
pub fn render_detail(job: &JobRecord) -> String {
    let title = job.company_name.as_deref().unwrap_or("Job Details");
    let body = job
        .job_details_from_company
        .as_deref()
        .unwrap_or("(no details provided)");
    format!("=== {title} ===\n{body}\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
