use std::future::Future;

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use crate::digest::digest;
use crate::error::Error;
use crate::response::find_suffix_count;

/// Default base URL of the Pwned Passwords range API.
pub const DEFAULT_API_URL: &str = "https://api.pwnedpasswords.com";

/// Request header asking the API to pad responses with zero-count suffixes.
pub const ADD_PADDING_HEADER: &str = "Add-Padding";

/// Anything that can tell how often a password has been seen in breaches.
pub trait BreachLookup {
    /// Returns the breach count for `password`, `0` when it was never seen.
    fn leak_count(&self, password: &str) -> impl Future<Output = Result<u64, Error>>;
}

/// Client for the `range/{prefix}` endpoint.
///
/// Only the first 5 hex characters of the SHA1 leave the machine; the suffix
/// is matched locally against the returned list.
#[derive(Debug, Clone)]
pub struct RangeClient {
    http: reqwest::Client,
    base_url: String,
    add_padding: bool,
}

impl RangeClient {
    /// Client for the public API at [`DEFAULT_API_URL`].
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Client for a mirror or stub serving the same `range/` layout.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"))),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|source| Error::HttpRequest { prefix: String::new(), source })?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url, add_padding: false })
    }

    /// Sends `Add-Padding: true` with every request.
    pub fn with_padding(mut self, add_padding: bool) -> Self {
        self.add_padding = add_padding;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the raw `SUFFIX:COUNT` list for a 5-character hex prefix.
    pub async fn fetch_range(&self, prefix: &str) -> Result<String, Error> {
        let url = format!("{}/range/{}", self.base_url, prefix);
        debug!(prefix, padding = self.add_padding, "requesting hash range");

        let mut request = self.http.get(&url);
        if self.add_padding {
            request = request.header(ADD_PADDING_HEADER, "true");
        }

        let response = request
            .send()
            .await
            .map_err(|source| Error::HttpRequest { prefix: prefix.to_string(), source })?;

        if !response.status().is_success() {
            return Err(Error::HttpStatus {
                prefix: prefix.to_string(),
                status: response.status().as_u16(),
            });
        }

        response
            .text()
            .await
            .map_err(|source| Error::HttpRequest { prefix: prefix.to_string(), source })
    }
}

impl BreachLookup for RangeClient {
    async fn leak_count(&self, password: &str) -> Result<u64, Error> {
        let digest = digest(password);
        let body = self.fetch_range(digest.prefix()).await?;
        let count = find_suffix_count(&body, digest.suffix())?;
        debug!(prefix = digest.prefix(), count, "range scanned");
        Ok(count)
    }
}
