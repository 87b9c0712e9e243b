//! Offset/limit pagination arithmetic.

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Pages are numbered starting at 1.
pub const FIRST_PAGE: u32 = 1;

/// Default number of job records per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Maximum number of job records per page.
pub const MAX_PAGE_SIZE: u32 = 100;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Offset sent to the API for a given 1-based page number.
///
/// Page 1 starts at offset 0. A (never expected) page 0 saturates to
/// offset 0 rather than wrapping.
pub fn offset_for_page(page: u32, page_size: u32) -> u32 {
    page.saturating_sub(1).saturating_mul(page_size)
}

/// Clamp a requested page size to `1..=max`, falling back to `default`
/// when absent.
pub fn clamp_page_size(requested: Option<u32>, default: u32, max: u32) -> u32 {
    requested.unwrap_or(default).max(1).min(max)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- offset_for_page -----------------------------------------------------

    #[test]
    fn first_page_starts_at_zero() {
        assert_eq!(offset_for_page(1, 10), 0);
    }

    #[test]
    fn later_pages_step_by_page_size() {
        assert_eq!(offset_for_page(2, 10), 10);
        assert_eq!(offset_for_page(5, 10), 40);
        assert_eq!(offset_for_page(3, 25), 50);
    }

    #[test]
    fn page_zero_saturates() {
        assert_eq!(offset_for_page(0, 10), 0);
    }

    // -- clamp_page_size -----------------------------------------------------

    #[test]
    fn clamp_uses_default_when_none() {
        assert_eq!(clamp_page_size(None, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE), 10);
    }

    #[test]
    fn clamp_respects_max() {
        assert_eq!(clamp_page_size(Some(500), DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE), 100);
    }

    #[test]
    fn clamp_floors_at_one() {
        assert_eq!(clamp_page_size(Some(0), DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE), 1);
    }

    #[test]
    fn clamp_passes_through_valid_value() {
        assert_eq!(clamp_page_size(Some(25), DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE), 25);
    }
}
