//! Listing store: the single source of truth for fetched records,
//! the pagination cursor, the loading flag, and the active filters.
//!
//! Every operation is a plain state replacement with no validation
//! beyond type shape. Errors never live here; they are absorbed at the
//! fetch boundary by the session.

use jobfeed_core::error::CoreError;
use jobfeed_core::filter::{matches, FilterCriteria};
use jobfeed_core::job::JobRecord;
use jobfeed_core::pagination::FIRST_PAGE;
use jobfeed_core::types::Timestamp;

/// Bookkeeping for one successfully applied page.
#[derive(Debug, Clone)]
pub struct PageArrival {
    /// Which page the records came from.
    pub page: u32,
    /// How many records it contributed.
    pub count: usize,
    /// When the page was applied to the store.
    pub fetched_at: Timestamp,
}

/// Accumulated feed state for one view.
///
/// Lives for the duration of the view and is discarded on unmount;
/// nothing persists across sessions. `records` is append-only -- there
/// is no reset operation.
#[derive(Debug, Default)]
pub struct ListingState {
    records: Vec<JobRecord>,
    page: u32,
    loading: bool,
    filters: FilterCriteria,
    arrivals: Vec<PageArrival>,
}

impl ListingState {
    /// Empty records, page 1, not loading, blank filters.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            page: FIRST_PAGE,
            loading: false,
            filters: FilterCriteria::default(),
            arrivals: Vec::new(),
        }
    }

    // ---- reads ----

    /// All fetched records in arrival order, unfiltered.
    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    /// Current 1-based pagination cursor.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Whether a fetch is logically in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// The active filter criteria.
    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    /// Pages applied so far, in application order.
    pub fn arrivals(&self) -> &[PageArrival] {
        &self.arrivals
    }

    /// The filtered view: records matching the active criteria, in
    /// arrival order. A linear scan; recomputed per call.
    pub fn visible_records(&self) -> Vec<&JobRecord> {
        self.records
            .iter()
            .filter(|job| matches(job, &self.filters))
            .collect()
    }

    /// Duplicate-tolerant display key for the record at `index`.
    ///
    /// Identifiers repeat across pages, so the key pairs the uid with
    /// the record's position: `"{jd_uid}-{index}"`.
    pub fn display_key(&self, index: usize) -> Option<String> {
        self.records
            .get(index)
            .map(|job| format!("{}-{index}", job.jd_uid))
    }

    // ---- mutations ----

    /// Append newly fetched records, preserving arrival order.
    ///
    /// Duplicate identifiers across pages are NOT deduplicated;
    /// downstream keying must tolerate them (see [`display_key`]).
    /// Associative: appending `[a,b]` then `[c,d]` equals appending
    /// `[a,b,c,d]` once.
    ///
    /// [`display_key`]: ListingState::display_key
    pub fn append_records(&mut self, new_records: Vec<JobRecord>) {
        self.records.extend(new_records);
    }

    /// Record that `count` records from `page` were applied just now.
    pub fn record_arrival(&mut self, page: u32, count: usize) {
        self.arrivals.push(PageArrival {
            page,
            count,
            fetched_at: chrono::Utc::now(),
        });
    }

    /// Set the pagination cursor. The session only ever moves it
    /// forward; the store does not enforce that.
    pub fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    /// Advance the pagination cursor by one.
    pub fn increment_page(&mut self) {
        self.page += 1;
    }

    /// Toggle the in-flight flag.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Replace the filter record wholesale. Callers merging a single
    /// input change construct the full next record themselves or use
    /// [`set_filter_field`](ListingState::set_filter_field).
    pub fn set_filters(&mut self, filters: FilterCriteria) {
        self.filters = filters;
    }

    /// Merge one named filter field, leaving the others untouched.
    pub fn set_filter_field(&mut self, name: &str, value: &str) -> Result<(), CoreError> {
        self.filters.set_field(name, value)
    }

    /// Reset all six filter fields to the empty string. Does not touch
    /// `records` or `page`.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn job(uid: &str) -> JobRecord {
        serde_json::from_str(&format!(r#"{{"jdUid": "{uid}"}}"#)).unwrap()
    }

    fn job_at(uid: &str, location: &str) -> JobRecord {
        serde_json::from_str(&format!(
            r#"{{"jdUid": "{uid}", "location": "{location}"}}"#
        ))
        .unwrap()
    }

    // -- initial state -------------------------------------------------------

    #[test]
    fn new_state_is_empty_page_one_not_loading() {
        let state = ListingState::new();
        assert!(state.records().is_empty());
        assert_eq!(state.page(), 1);
        assert!(!state.loading());
        assert!(state.filters().is_empty());
    }

    // -- append_records ------------------------------------------------------

    #[test]
    fn append_preserves_arrival_order() {
        let mut state = ListingState::new();
        state.append_records(vec![job("a"), job("b")]);
        state.append_records(vec![job("c")]);

        let uids: Vec<_> = state.records().iter().map(|j| j.jd_uid.as_str()).collect();
        assert_eq!(uids, ["a", "b", "c"]);
    }

    #[test]
    fn append_is_associative() {
        let mut split = ListingState::new();
        split.append_records(vec![job("a"), job("b")]);
        split.append_records(vec![job("c"), job("d")]);

        let mut whole = ListingState::new();
        whole.append_records(vec![job("a"), job("b"), job("c"), job("d")]);

        assert_eq!(split.records(), whole.records());
    }

    #[test]
    fn duplicate_uids_are_kept() {
        let mut state = ListingState::new();
        state.append_records(vec![job("dup")]);
        state.append_records(vec![job("dup")]);
        assert_eq!(state.records().len(), 2);
    }

    // -- display_key ---------------------------------------------------------

    #[test]
    fn display_keys_distinguish_duplicates_by_position() {
        let mut state = ListingState::new();
        state.append_records(vec![job("dup"), job("dup")]);
        assert_eq!(state.display_key(0).as_deref(), Some("dup-0"));
        assert_eq!(state.display_key(1).as_deref(), Some("dup-1"));
        assert_eq!(state.display_key(2), None);
    }

    // -- page / loading ------------------------------------------------------

    #[test]
    fn increment_page_steps_by_one() {
        let mut state = ListingState::new();
        state.increment_page();
        state.increment_page();
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn loading_flag_toggles() {
        let mut state = ListingState::new();
        state.set_loading(true);
        assert!(state.loading());
        state.set_loading(false);
        assert!(!state.loading());
    }

    // -- filters -------------------------------------------------------------

    #[test]
    fn clear_filters_keeps_records_and_page() {
        let mut state = ListingState::new();
        state.append_records(vec![job("a")]);
        state.set_page(4);
        state.set_filter_field("company_name", "drop").unwrap();

        state.clear_filters();

        assert!(state.filters().is_empty());
        assert_eq!(state.records().len(), 1);
        assert_eq!(state.page(), 4);
    }

    #[test]
    fn set_filter_field_merges_one_field() {
        let mut state = ListingState::new();
        state.set_filter_field("role", "front").unwrap();
        state.set_filter_field("remote", "true").unwrap();
        assert_eq!(state.filters().role, "front");
        assert_eq!(state.filters().remote, "true");
        assert_eq!(state.filters().company_name, "");
    }

    #[test]
    fn set_filter_field_rejects_unknown_name() {
        let mut state = ListingState::new();
        assert!(state.set_filter_field("salary_band", "x").is_err());
    }

    // -- visible_records -----------------------------------------------------

    #[test]
    fn visible_records_apply_the_predicate() {
        let mut state = ListingState::new();
        state.append_records(vec![
            job_at("r1", "remote"),
            job_at("o1", "delhi ncr"),
            job_at("r2", "Remote"),
        ]);

        state.set_filter_field("remote", "true").unwrap();
        let visible: Vec<_> = state
            .visible_records()
            .iter()
            .map(|j| j.jd_uid.as_str())
            .collect();
        assert_eq!(visible, ["r1", "r2"]);

        state.clear_filters();
        assert_eq!(state.visible_records().len(), 3);
    }

    // -- record_arrival ------------------------------------------------------

    #[test]
    fn arrivals_are_recorded_in_order() {
        let mut state = ListingState::new();
        state.record_arrival(1, 10);
        state.record_arrival(2, 7);

        let pages: Vec<_> = state.arrivals().iter().map(|a| (a.page, a.count)).collect();
        assert_eq!(pages, [(1, 10), (2, 7)]);
    }
}
