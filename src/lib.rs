// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod cli;
pub mod fetch;
pub mod version;

// Re-export main types
pub use fetch::{
    fetch_html, fetch_html_with_timeout, FetchConfig, FetchError, FetchedPage, HtmlFetcher,
};
