//! HTTP suggestion source
//!
//! Issues `GET <endpoint>?term=<text>` and decodes a JSON array of items.

use std::time::Duration;

use reqwest::{Client, Url};

use super::SourceError;
use crate::config::SourceConfig;
use crate::error::StreetSearchError;
use crate::suggestion::{SuggestionItem, parse_items};

#[derive(Debug)]
pub struct HttpSource {
    client: Client,
    endpoint: Url,
    term_param: String,
    limit_param: String,
    limit: Option<u32>,
}

impl HttpSource {
    pub fn new(endpoint: &str, config: &SourceConfig) -> Result<Self, StreetSearchError> {
        let endpoint = Url::parse(endpoint).map_err(|e| StreetSearchError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(StreetSearchError::InvalidEndpoint {
                url: endpoint.to_string(),
                reason: format!("unsupported scheme '{}'", endpoint.scheme()),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| StreetSearchError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            term_param: config.term_param.clone(),
            limit_param: config.limit_param.clone(),
            limit: config.limit,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Build the request URL for the given text
    ///
    /// The text is sent exactly as typed; query parameters already present on
    /// the endpoint are kept.
    pub fn request_url(&self, term: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair(&self.term_param, term);
            if let Some(limit) = self.limit {
                pairs.append_pair(&self.limit_param, &limit.to_string());
            }
        }
        url
    }

    pub async fn fetch(&self, term: &str) -> Result<Vec<SuggestionItem>, SourceError> {
        let url = self.request_url(term);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                code: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(map_transport_error)?;
        parse_items(&body).map_err(|e| SourceError::Parse(e.to_string()))
    }
}

fn map_transport_error(e: reqwest::Error) -> SourceError {
    if e.is_timeout() {
        SourceError::Timeout
    } else {
        SourceError::Network(e.to_string())
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod http_tests;
