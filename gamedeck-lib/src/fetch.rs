//! JSON fetching for the manifest and data sources.
//!
//! The loader only talks to a [`Fetcher`], so tests can serve documents from
//! memory while the CLI goes over HTTP.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::GalleryError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of JSON documents addressed by URL.
#[allow(async_fn_in_trait)]
pub trait Fetcher {
    /// Fetch and decode the document at `url`.
    async fn get_json(&self, url: &Url) -> Result<serde_json::Value, GalleryError>;

    /// Fetch and decode into a concrete type.
    async fn get<T: DeserializeOwned>(&self, url: &Url) -> Result<T, GalleryError> {
        let value = self.get_json(url).await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// [`Fetcher`] backed by a `reqwest` client.
#[derive(Clone)]
pub struct HttpFetcher {
    http: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, GalleryError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http })
    }

    /// Use a preconfigured client (proxy, TLS or timeout settings).
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Fetcher for HttpFetcher {
    async fn get_json(&self, url: &Url) -> Result<serde_json::Value, GalleryError> {
        log::debug!("GET {url}");
        let resp = self.http.get(url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GalleryError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(resp.json().await?)
    }
}
