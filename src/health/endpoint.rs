//! Endpoint representation used by the check loop.

use crate::config::EndpointConfig;
use crate::health::domain::extract_domain;

/// A configured endpoint together with its aggregation key.
///
/// The key is derived once at startup; the endpoint is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub name: String,
    pub url: String,
    pub method: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub domain: String,
}

impl Endpoint {
    /// Shorthand for a GET endpoint with no headers or body.
    pub fn get(name: impl Into<String>, url: impl Into<String>) -> Self {
        EndpointConfig {
            name: name.into(),
            url: url.into(),
            ..Default::default()
        }
        .into()
    }

    /// Label used in logs; falls back to the url when the name is blank.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            &self.url
        } else {
            &self.name
        }
    }
}

impl From<EndpointConfig> for Endpoint {
    fn from(config: EndpointConfig) -> Self {
        let domain = extract_domain(&config.url);
        let mut headers: Vec<(String, String)> = config.headers.into_iter().collect();
        // Stable order so case-variant duplicates resolve the same way every run.
        headers.sort();
        Self {
            name: config.name,
            url: config.url,
            method: config.method,
            headers,
            body: config.body,
            domain,
        }
    }
}
