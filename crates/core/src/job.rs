//! Job record model.
//!
//! A [`JobRecord`] is one posting as returned by the remote job API.
//! Every field except the identifier may be absent, and unknown JSON
//! fields are ignored -- the record is opaque beyond what is modelled
//! here.

use serde::{Deserialize, Serialize};

use crate::types::JdUid;

/// One job posting fetched from the remote API.
///
/// Deserialized from the API's camelCase JSON. Postings are carried
/// through the system unmodified; all interpretation (filtering,
/// rendering) happens in pure functions over this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    /// API-assigned identifier. May repeat across pages.
    pub jd_uid: JdUid,
    /// Company offering the position.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Free-text role title, e.g. `"frontend"`.
    #[serde(default)]
    pub job_role: Option<String>,
    /// Free-text location. The literal string `"remote"` (any case)
    /// marks a remote position -- see [`JobRecord::is_remote`].
    #[serde(default)]
    pub location: Option<String>,
    /// Minimum years of experience required.
    #[serde(default)]
    pub min_exp: Option<i64>,
    /// Maximum years of experience considered.
    #[serde(default)]
    pub max_exp: Option<i64>,
    /// Lower bound of the advertised salary range.
    #[serde(default)]
    pub min_jd_salary: Option<f64>,
    /// Upper bound of the advertised salary range.
    #[serde(default)]
    pub max_jd_salary: Option<f64>,
    /// Currency code for the salary bounds, e.g. `"USD"`.
    #[serde(default)]
    pub salary_currency_code: Option<String>,
    /// Long-form description supplied by the company.
    #[serde(default)]
    pub job_details_from_company: Option<String>,
    /// Application link.
    #[serde(default)]
    pub jd_link: Option<String>,
    /// Company logo URL.
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl JobRecord {
    /// Whether this posting is remote.
    ///
    /// Canonical source: the `location` string equals `"remote"`
    /// case-insensitively. A missing location counts as on-site.
    pub fn is_remote(&self) -> bool {
        self.location
            .as_deref()
            .map_or(false, |loc| loc.eq_ignore_ascii_case("remote"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
