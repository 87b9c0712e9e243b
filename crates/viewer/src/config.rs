use jobfeed_core::pagination::{clamp_page_size, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use jobfeed_feed::trigger::DEFAULT_SCROLL_THRESHOLD;

/// Viewer configuration loaded from environment variables.
///
/// All fields have defaults suitable for pointing at the public sample
/// endpoint; override via environment variables.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Full job-listing endpoint URL.
    pub api_url: String,
    /// Records per page (clamped to `1..=100`).
    pub page_size: u32,
    /// Scrolled fraction past which the next page is requested.
    pub scroll_threshold: f64,
    /// Word cap for the card description excerpt.
    pub card_word_limit: usize,
}

impl ViewerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                                                 |
    /// |----------------------------|---------------------------------------------------------|
    /// | `JOBFEED_API_URL`          | `https://api.weekday.technology/adhoc/getSampleJdJSON`  |
    /// | `JOBFEED_PAGE_SIZE`        | `10`                                                    |
    /// | `JOBFEED_SCROLL_THRESHOLD` | `0.9`                                                   |
    /// | `JOBFEED_CARD_WORD_LIMIT`  | `99`                                                    |
    pub fn from_env() -> Self {
        let api_url = std::env::var("JOBFEED_API_URL")
            .unwrap_or_else(|_| "https://api.weekday.technology/adhoc/getSampleJdJSON".into());

        let page_size: u32 = std::env::var("JOBFEED_PAGE_SIZE")
            .unwrap_or_else(|_| DEFAULT_PAGE_SIZE.to_string())
            .parse()
            .expect("JOBFEED_PAGE_SIZE must be a valid u32");
        let page_size = clamp_page_size(Some(page_size), DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE);

        let scroll_threshold: f64 = std::env::var("JOBFEED_SCROLL_THRESHOLD")
            .unwrap_or_else(|_| DEFAULT_SCROLL_THRESHOLD.to_string())
            .parse()
            .expect("JOBFEED_SCROLL_THRESHOLD must be a valid f64");

        let card_word_limit: usize = std::env::var("JOBFEED_CARD_WORD_LIMIT")
            .unwrap_or_else(|_| "99".into())
            .parse()
            .expect("JOBFEED_CARD_WORD_LIMIT must be a valid usize");

        Self {
            api_url,
            page_size,
            scroll_threshold,
            card_word_limit,
        }
    }
}
