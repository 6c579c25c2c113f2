//! CMS: HTTP client and page loaders for the headless content backend.
//!
//! DESIGN
//! ======
//! `CmsBackend` is the seam between pages and the network. `CmsClient` is the
//! real implementation over `reqwest`; tests substitute an in-memory mock.
//!
//! Loaders never propagate failures. Transport errors, non-success statuses,
//! unparsable bodies, and `data: null` envelopes are logged and collapse to
//! `None`, which pages render as a generic "failed to load" message.

pub mod populate;
pub mod queries;
pub mod types;

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::CmsTimeouts;
pub use populate::Populate;
use types::{CmsError, Envelope, Footer, Global, Home, HomePage, Navbar};

// =============================================================================
// BACKEND TRAIT
// =============================================================================

/// Request/response access to the CMS. Enables mocking in tests.
#[async_trait::async_trait]
pub trait CmsBackend: Send + Sync {
    /// `GET {path}?{populate}` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns a [`CmsError`] on transport failure, non-success status, or
    /// an unparsable body.
    async fn get_json(&self, path: &str, populate: &Populate) -> Result<Value, CmsError>;

    /// `POST {path}` with a JSON body and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Same as [`CmsBackend::get_json`]. A non-success status carries the raw
    /// response body so callers can extract the backend's message.
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, CmsError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct CmsClient {
    http: reqwest::Client,
    base_url: String,
}

impl CmsClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeouts: CmsTimeouts) -> Result<Self, CmsError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| CmsError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve `path` against the base URL and attach the populate query.
    ///
    /// # Errors
    ///
    /// Returns [`CmsError::InvalidUrl`] if the base URL does not parse.
    pub fn endpoint(&self, path: &str, populate: &Populate) -> Result<reqwest::Url, CmsError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .and_then(|base| base.join(path))
            .map_err(|e| CmsError::InvalidUrl(format!("{}{path}: {e}", self.base_url)))?;
        if !populate.is_empty() {
            url.query_pairs_mut().extend_pairs(populate.query_pairs());
        }
        Ok(url)
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, CmsError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| CmsError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(CmsError::Status { status: status.as_u16(), body: text });
        }
        serde_json::from_str(&text).map_err(|e| CmsError::Parse(e.to_string()))
    }
}

#[async_trait::async_trait]
impl CmsBackend for CmsClient {
    async fn get_json(&self, path: &str, populate: &Populate) -> Result<Value, CmsError> {
        let url = self.endpoint(path, populate)?;
        let response = self
            .http
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| CmsError::Request(e.to_string()))?;
        Self::read_json(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, CmsError> {
        let url = self.endpoint(path, &Populate::new())?;
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| CmsError::Request(e.to_string()))?;
        Self::read_json(response).await
    }
}

// =============================================================================
// LOADERS
// =============================================================================

/// Fetch raw JSON, logging and swallowing any failure.
pub async fn load(cms: &dyn CmsBackend, path: &str, populate: &Populate) -> Option<Value> {
    match cms.get_json(path, populate).await {
        Ok(body) => Some(body),
        Err(CmsError::Status { status, body }) => {
            tracing::error!(path, status, %body, code = "E_CMS_STATUS", "CMS returned non-success status");
            None
        }
        Err(e) => {
            tracing::error!(path, code = e.error_code(), error = %e, "CMS load failed");
            None
        }
    }
}

/// Fetch and decode the envelope's `data` into `T`.
pub async fn load_data<T: DeserializeOwned>(cms: &dyn CmsBackend, path: &str, populate: &Populate) -> Option<T> {
    let raw = load(cms, path, populate).await?;
    match serde_json::from_value::<Envelope<T>>(raw) {
        Ok(Envelope { data: Some(data), .. }) => Some(data),
        Ok(Envelope { data: None, error }) => {
            let message = error.and_then(|e| e.message).unwrap_or_default();
            tracing::warn!(path, %message, "CMS envelope has no data");
            None
        }
        Err(e) => {
            tracing::error!(path, error = %e, code = "E_CMS_SHAPE", "CMS data did not match expected shape");
            None
        }
    }
}

pub async fn load_home(cms: &dyn CmsBackend) -> Option<Home> {
    load_data(cms, queries::HOME_PATH, &queries::home()).await
}

pub async fn load_home_page(cms: &dyn CmsBackend) -> Option<HomePage> {
    load_data(cms, queries::HOME_PAGE_PATH, &queries::home_page()).await
}

pub async fn load_navbar(cms: &dyn CmsBackend) -> Option<Navbar> {
    let global: Global = load_data(cms, queries::GLOBAL_PATH, &queries::navbar()).await?;
    if global.navbar.is_none() {
        tracing::warn!("global settings have no navbar");
    }
    global.navbar
}

pub async fn load_footer(cms: &dyn CmsBackend) -> Option<Footer> {
    let global: Global = load_data(cms, queries::GLOBAL_PATH, &queries::footer()).await?;
    if global.footer.is_none() {
        tracing::warn!("global settings have no footer");
    }
    global.footer
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
