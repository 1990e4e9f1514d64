// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTML page fetching module
//!
//! Fetches the raw HTML body of a URL over HTTP or HTTPS, following
//! redirects up to a bounded hop count, with a configurable timeout.
//!
//! Key features:
//! - Single GET request per hop, fixed User-Agent, no request body
//! - Explicit redirect loop with a hop limit (no unbounded recursion)
//! - Per-request timeout, reset on each redirect hop
//! - Optional `<script>`/`<style>` stripping of the returned body
//!
//! ## Usage
//!
//! ```ignore
//! let config = FetchConfig::from_env();
//! let fetcher = HtmlFetcher::new(config);
//!
//! let html = fetcher.fetch_html("https://example.com").await?;
//! ```

pub mod config;
pub mod fetcher;
pub mod strip;
pub mod types;

// Re-export commonly used types
pub use config::{FetchConfig, DEFAULT_USER_AGENT};
pub use fetcher::{fetch_html, fetch_html_with_timeout, HtmlFetcher};
pub use strip::{strip_scripts, strip_styles};
pub use types::{FetchError, FetchedPage};
