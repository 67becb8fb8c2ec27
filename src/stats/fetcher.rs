use std::time::Duration;

use log::{debug, warn};
use reqwest::blocking::Client;

/// Admin endpoint path serving the plaintext statistics dump.
const STATS_PATH: &str = "/stats";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

pub fn stats_url(host: &str, port: u16) -> String {
    format!("http://{host}:{port}{STATS_PATH}")
}

/// Blocking reader for one administrative `/stats` endpoint.
#[derive(Debug)]
pub struct StatsFetcher {
    client: Client,
    url: String,
}

impl StatsFetcher {
    pub fn new(host: &str, port: u16) -> Result<StatsFetcher, FetchError> {
        // Waits for as long as the admin interface takes to answer.
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(FetchError::Client)?;
        Ok(StatsFetcher::with_client(host, port, client))
    }

    pub fn with_client(host: &str, port: u16, client: Client) -> StatsFetcher {
        StatsFetcher {
            client,
            url: stats_url(host, port),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the response body as text, whatever the status code.
    pub fn fetch(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|source| FetchError::Request {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} answered with {status}, parsing the body anyway", self.url);
        }

        let body = response.text().map_err(|source| FetchError::Body {
            url: self.url.clone(),
            source,
        })?;
        debug!("GET {} -> {status}, {} bytes", self.url, body.len());
        Ok(body)
    }
}

pub fn fetch_stats(host: &str, port: u16) -> Result<String, FetchError> {
    StatsFetcher::new(host, port)?.fetch()
}
