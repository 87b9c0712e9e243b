//! Card-text helpers used by the presentation layer.
//!
//! Pure string functions so the viewer binary stays thin and the
//! formatting rules stay testable.

use crate::job::JobRecord;

/// Cap a description at `limit` words, appending an ellipsis when
/// anything was cut. Word boundaries are runs of whitespace; the
/// result is single-space joined.
pub fn truncate_words(text: &str, limit: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > limit {
        format!("{}...", words[..limit].join(" "))
    } else {
        words.join(" ")
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Human-readable salary line for a job card.
///
/// Requires a currency code. With both bounds present the result is
/// `"40 - 61 USD"`; with only the upper bound, `"61 USD"`. Any other
/// combination yields `None` and the card shows no salary line.
pub fn salary_summary(job: &JobRecord) -> Option<String> {
    let currency = job.salary_currency_code.as_deref()?;
    match (job.min_jd_salary, job.max_jd_salary) {
        (Some(min), Some(max)) => Some(format!("{min} - {max} {currency}")),
        (None, Some(max)) => Some(format!("{max} {currency}")),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
