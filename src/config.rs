//! Support for library configuration options

use std::time::Duration;

use once_cell::sync::Lazy;
use url::Url;

/// The backend every view talks to unless overridden.
/// Feel free to point [`Config::base_url`] somewhere else (e.g. a local dev server).
pub static DEFAULT_BASE_URL: Lazy<Url> =
    Lazy::new(|| Url::parse("https://backend-9xmz.onrender.com/").expect("default URL is valid"));

/// How often the displayed period is re-fetched when nothing else triggers a refresh
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

/// Settings shared by the [`Client`](crate::client::Client) and the
/// [`Provider`](crate::provider::Provider).
///
/// The backend host is configuration, not a per-view constant: desktop and mobile
/// entry points of an app are expected to share one `Config`.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the task service. All endpoint paths are joined onto it.
    pub base_url: Url,
    /// Polling interval for the currently displayed period
    pub refresh_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.clone(),
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

impl Config {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }
}
