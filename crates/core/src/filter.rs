//! Six-field client-side filter criteria and the matching predicate.
//!
//! [`matches`] is a pure function of a job record and the active
//! criteria. Every field treats the empty string as "no constraint";
//! numeric fields are parsed at evaluation time, never at input time,
//! so any string is accepted and degrades to "matches nothing" rather
//! than being rejected.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::job::JobRecord;

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

/// Field names accepted by [`FilterCriteria::set_field`].
pub const FILTER_FIELDS: &[&str] = &[
    "min_experience",
    "company_name",
    "location",
    "remote",
    "role",
    "min_base_pay",
];

/// User-specified constraints narrowing the displayed subset of
/// already-fetched jobs. Client-side only; never affects what is
/// fetched.
///
/// All fields default to `""` meaning "no constraint". `remote` takes
/// `""`, `"all"`, `"true"` or `"false"`; any other value matches
/// nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Minimum years of experience, as entered (parsed per evaluation).
    pub min_experience: String,
    /// Case-insensitive substring of the company name.
    pub company_name: String,
    /// Case-insensitive substring of the location.
    pub location: String,
    /// Remote tri-state: `""`/`"all"`, `"true"`, `"false"`.
    pub remote: String,
    /// Case-insensitive substring of the role title.
    pub role: String,
    /// Minimum base pay, as entered (parsed per evaluation).
    pub min_base_pay: String,
}

impl FilterCriteria {
    /// Reset all six fields to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when no field constrains anything.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Update a single field by name, leaving the rest untouched.
    ///
    /// This is the input-change-handler merge path; wholesale
    /// replacement is plain struct assignment. Unknown names are a
    /// validation error (see [`FILTER_FIELDS`]).
    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), CoreError> {
        let slot = match name {
            "min_experience" => &mut self.min_experience,
            "company_name" => &mut self.company_name,
            "location" => &mut self.location,
            "remote" => &mut self.remote,
            "role" => &mut self.role,
            "min_base_pay" => &mut self.min_base_pay,
            _ => {
                return Err(CoreError::Validation(format!(
                    "Unknown filter field: '{name}'. Valid fields: {}",
                    FILTER_FIELDS.join(", ")
                )))
            }
        };
        *slot = value.to_string();
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Predicate
// ---------------------------------------------------------------------------

/// Does `job` satisfy every active constraint in `filters`?
///
/// The six sub-predicates are ANDed. Cheap numeric and tri-state
/// checks run before the substring scans; ordering is not a
/// correctness concern since all sub-predicates are side-effect-free.
pub fn matches(job: &JobRecord, filters: &FilterCriteria) -> bool {
    matches_min_experience(job, &filters.min_experience)
        && matches_min_base_pay(job, &filters.min_base_pay)
        && matches_remote(job, &filters.remote)
        && contains_ignore_case(job.company_name.as_deref(), &filters.company_name)
        && contains_ignore_case(job.location.as_deref(), &filters.location)
        && contains_ignore_case(job.job_role.as_deref(), &filters.role)
}

/// Empty filter matches everything; otherwise the job needs a known
/// `min_exp` at or above the parsed bound. An unparseable filter or a
/// missing `min_exp` is a non-match, never an error.
fn matches_min_experience(job: &JobRecord, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    match (job.min_exp, parse_leading_int(filter)) {
        (Some(exp), Some(min)) => exp >= min,
        _ => false,
    }
}

/// Same policy as experience, against the salary lower bound.
fn matches_min_base_pay(job: &JobRecord, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    match (job.min_jd_salary, parse_leading_int(filter)) {
        (Some(salary), Some(min)) => salary >= min as f64,
        _ => false,
    }
}

/// Remote tri-state. `""` and `"all"` pass everything; `"true"` and
/// `"false"` test [`JobRecord::is_remote`]; anything else matches
/// nothing.
fn matches_remote(job: &JobRecord, filter: &str) -> bool {
    match filter {
        "" | "all" => true,
        "true" => job.is_remote(),
        "false" => !job.is_remote(),
        _ => false,
    }
}

/// Case-insensitive substring containment. An empty needle always
/// matches; a missing haystack against a non-empty needle does not.
fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    match haystack {
        Some(text) => text.to_lowercase().contains(&needle.to_lowercase()),
        None => false,
    }
}

/// Parse a leading integer the way `parseInt` does: skip leading
/// whitespace, take an optional sign, consume digits, stop at the
/// first non-digit. Returns `None` when no digits were consumed.
fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, rest) = match s.strip_prefix('-') {
        Some(r) => (true, r),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }

    digits
        .parse::<i64>()
        .ok()
        .map(|v| if negative { -v } else { v })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
