//! Application constants and default values for vaktijar.
//!
//! Configuration defaults, the upstream API endpoint, and operational
//! constants used throughout the application.

// ═══ Upstream API ═══

/// Base endpoint of the vaktija.ba JSON API. Location id and optional
/// date segments are appended as path components.
pub const VAKTIJA_API_URL: &str = "https://api.vaktija.ba/vaktija/v1";

/// Timeout for the single blocking fetch. There are no retries.
pub const FETCH_TIMEOUT_SECS: u64 = 10;

// ═══ Configuration Defaults ═══
// These values are used when config options are not specified by the user

/// Default location id: 77 is Sarajevo. For other ids see the API's
/// /vaktija/v1/lokacije listing.
pub const DEFAULT_LOCATION: &str = "77";

/// Highest valid location id (the API serves 118 locations, 0..=117).
pub const MAX_LOCATION_ID: usize = 117;

pub const DEFAULT_ALWAYS_UPDATE: bool = false;
pub const DEFAULT_NO_CACHE: bool = false;

// ═══ Cache ═══

/// Name of the single flat cache file inside the cache directory.
pub const CACHE_FILE_NAME: &str = "vaktija.json";

// ═══ Exit Codes ═══

pub const EXIT_FAILURE: i32 = 1; // General failure
