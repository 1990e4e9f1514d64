// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for page fetching

use thiserror::Error;

/// A fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after any redirects
    pub url: String,
    /// Terminal HTTP status code
    pub status: u16,
    /// Decoded response body
    pub body: String,
}

/// Errors that can occur while fetching a page
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL failed to parse or uses an unsupported scheme
    #[error("Invalid URL: {reason}")]
    InvalidUrl {
        /// Why the URL was rejected
        reason: String,
    },

    /// DNS, connect, or transport failure
    #[error("Network error: {message}")]
    Network {
        /// Underlying transport error message
        message: String,
    },

    /// Request timed out
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout budget in milliseconds
        timeout_ms: u64,
    },

    /// Terminal non-200 response
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Canonical status text
        message: String,
    },

    /// Redirect chain exceeded the hop limit
    #[error("Too many redirects ({limit}) for: {url}")]
    TooManyRedirects {
        /// Configured hop limit
        limit: usize,
        /// Last URL in the chain
        url: String,
    },
}
