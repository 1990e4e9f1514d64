//! HTTP page fetching with bounded redirect following
//!
//! Issues a GET per hop and follows `Location` headers in an explicit
//! loop so a redirect cycle terminates at the hop limit.

use reqwest::header::LOCATION;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use super::config::FetchConfig;
use super::strip::{strip_scripts, strip_styles};
use super::types::{FetchError, FetchedPage};

/// Page fetcher with per-request timeouts and a redirect hop limit
pub struct HtmlFetcher {
    client: Client,
    config: FetchConfig,
}

impl HtmlFetcher {
    /// Create a new fetcher
    ///
    /// Redirects are disabled on the underlying client; the fetch loop
    /// follows them itself so the hop count stays bounded.
    pub fn new(config: FetchConfig) -> Self {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Fetch a URL and return the decoded body of the final 200 response
    pub async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        Ok(self.fetch_page(url).await?.body)
    }

    /// Fetch a URL, following up to `max_redirects` redirect hops
    ///
    /// Returns the final URL, terminal status, and decoded body. The
    /// timeout budget resets on each hop.
    pub async fn fetch_page(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let timeout = Duration::from_millis(self.config.timeout_ms);
        let mut current = Self::parse_url(url)?;

        for _hop in 0..=self.config.max_redirects {
            debug!("Fetching: {}", current);

            let response = self
                .client
                .get(current.clone())
                .timeout(timeout)
                .send()
                .await
                .map_err(|e| self.request_error(e))?;

            let status = response.status();

            if status.is_redirection() {
                if let Some(location) = response.headers().get(LOCATION) {
                    let target = location.to_str().map_err(|_| FetchError::InvalidUrl {
                        reason: "redirect target is not valid ASCII".to_string(),
                    })?;
                    current = Self::resolve_redirect(&current, target)?;
                    debug!("Following redirect to: {}", current);
                    continue;
                }
            }

            if status == StatusCode::OK {
                let mut body = response.text().await.map_err(|e| self.request_error(e))?;
                if self.config.strip_scripts {
                    body = strip_scripts(&body);
                }
                if self.config.strip_styles {
                    body = strip_styles(&body);
                }

                info!("Fetched {} chars from: {}", body.len(), current);

                return Ok(FetchedPage {
                    url: current.to_string(),
                    status: status.as_u16(),
                    body,
                });
            }

            // Terminal non-200, including 3xx without a Location header
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        Err(FetchError::TooManyRedirects {
            limit: self.config.max_redirects,
            url: current.to_string(),
        })
    }

    /// Parse and validate a URL before any network I/O
    fn parse_url(url: &str) -> Result<Url, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            reason: format!("{}: {}", url, e),
        })?;

        // Only allow http/https
        if !["http", "https"].contains(&parsed.scheme()) {
            return Err(FetchError::InvalidUrl {
                reason: format!("unsupported scheme: {}", parsed.scheme()),
            });
        }

        Ok(parsed)
    }

    /// Resolve a `Location` header value against the current URL
    ///
    /// Handles both absolute and relative targets.
    fn resolve_redirect(current: &Url, target: &str) -> Result<Url, FetchError> {
        let next = current.join(target).map_err(|e| FetchError::InvalidUrl {
            reason: format!("bad redirect target {}: {}", target, e),
        })?;

        if !["http", "https"].contains(&next.scheme()) {
            return Err(FetchError::InvalidUrl {
                reason: format!("unsupported scheme: {}", next.scheme()),
            });
        }

        Ok(next)
    }

    /// Map a transport error to the fetch error taxonomy
    fn request_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout {
                timeout_ms: self.config.timeout_ms,
            }
        } else {
            FetchError::Network {
                message: e.to_string(),
            }
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

/// Fetch a URL with the default configuration
pub async fn fetch_html(url: &str) -> Result<String, FetchError> {
    HtmlFetcher::new(FetchConfig::default()).fetch_html(url).await
}

/// Fetch a URL with an explicit timeout
pub async fn fetch_html_with_timeout(url: &str, timeout: Duration) -> Result<String, FetchError> {
    let config = FetchConfig {
        timeout_ms: timeout.as_millis() as u64,
        ..FetchConfig::default()
    };
    HtmlFetcher::new(config).fetch_html(url).await
}
