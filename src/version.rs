// Version information for the Fabstir HTML Fetcher

/// Full version string with feature description
pub const VERSION: &str = "v1.0.0-bounded-redirects-2025-11-02";

/// Semantic version number
pub const VERSION_NUMBER: &str = "1.0.0";

/// Major version number
pub const VERSION_MAJOR: u32 = 1;

/// Minor version number
pub const VERSION_MINOR: u32 = 0;

/// Patch version number
pub const VERSION_PATCH: u32 = 0;

/// Build date
pub const BUILD_DATE: &str = "2025-11-02";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "http",
    "https",
    "bounded-redirects",
    "relative-location-resolution",
    "request-timeout",
    "script-stripping",
    "style-stripping",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Fabstir HTML Fetcher {} ({})", VERSION_NUMBER, BUILD_DATE)
}
