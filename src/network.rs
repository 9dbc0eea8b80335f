//! Network constants for the Midgard API.

use std::time::Duration;

/// Default Midgard REST API base URL.
pub const DEFAULT_API_URL: &str = "https://midgard.ninerealms.com";

/// How often the metrics aggregator re-polls global stats, pools and network.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(300);

/// Per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Number of intervals requested from the history endpoints.
pub const HISTORY_COUNT: u32 = 50;

/// Actions shown per transaction feed page.
pub const ACTIONS_PAGE_SIZE: u32 = 8;

/// Environment variable overriding the base URL.
pub const ENV_API_URL: &str = "MIDGARD_API_URL";

/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "MIDGARD_TIMEOUT_SECS";

/// Environment variable overriding the refresh interval, in seconds.
pub const ENV_REFRESH_SECS: &str = "MIDGARD_REFRESH_SECS";
