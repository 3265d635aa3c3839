//! Single-endpoint health check.
//!
//! # Responsibilities
//! - Build one request from an endpoint (method, headers, body)
//! - Send it with a hard timeout and measure latency
//! - Classify the result and count it against the endpoint's domain
//!
//! # Design Decisions
//! - Healthy means a 2xx status AND latency strictly below the threshold
//! - Transport errors and timeouts are counted failures, never propagated
//! - A request that cannot be built is skipped without touching counters,
//!   except a scheme-less url, which counts as a failed attempt

use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode, Url};
use thiserror::Error;
use tokio::time;

use crate::config::CheckConfig;
use crate::health::endpoint::Endpoint;
use crate::health::stats::Aggregator;
use crate::observability::metrics;

const USER_AGENT: &str = concat!("availability-monitor/", env!("CARGO_PKG_VERSION"));

/// Why a request could not be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("invalid method {0:?}")]
    InvalidMethod(String),

    #[error("invalid url {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid header name {0:?}")]
    InvalidHeaderName(String),

    #[error("invalid value for header {0:?}")]
    InvalidHeaderValue(String),
}

/// Why a check got no response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("no response within {0:?}")]
    Timeout(Duration),

    #[error("url {0:?} has no scheme")]
    MissingScheme(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            TransportError::Connect(e.to_string())
        } else {
            TransportError::Other(e.to_string())
        }
    }
}

/// Classified result of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// 2xx within the latency threshold.
    Success { status: StatusCode, latency: Duration },
    /// A response arrived but was not 2xx, or was too slow.
    HttpFailure { status: StatusCode, latency: Duration },
    /// No response: timeout, DNS, connect, TLS.
    TransportError { error: TransportError, latency: Duration },
    /// The request could not be built; nothing was sent or counted.
    ConstructionSkipped(BuildError),
}

impl CheckOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckOutcome::Success { .. })
    }

    /// Whether this outcome was counted as an attempt.
    pub fn is_counted(&self) -> bool {
        !matches!(self, CheckOutcome::ConstructionSkipped(_))
    }

    /// Short label for metrics.
    pub fn label(&self) -> &'static str {
        match self {
            CheckOutcome::Success { .. } => "success",
            CheckOutcome::HttpFailure { .. } => "http_failure",
            CheckOutcome::TransportError { .. } => "transport_error",
            CheckOutcome::ConstructionSkipped(_) => "skipped",
        }
    }
}

/// Timeout and latency bound applied to every check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckPolicy {
    pub timeout: Duration,
    pub latency_threshold: Duration,
}

impl CheckPolicy {
    pub fn classify(&self, status: StatusCode, latency: Duration) -> CheckOutcome {
        if status.is_success() && latency < self.latency_threshold {
            CheckOutcome::Success { status, latency }
        } else {
            CheckOutcome::HttpFailure { status, latency }
        }
    }
}

impl Default for CheckPolicy {
    fn default() -> Self {
        CheckPolicy::from(&CheckConfig::default())
    }
}

impl From<&CheckConfig> for CheckPolicy {
    fn from(config: &CheckConfig) -> Self {
        Self {
            timeout: config.timeout(),
            latency_threshold: config.latency_threshold(),
        }
    }
}

/// Trim and uppercase a configured method; blank means GET.
pub fn resolve_method(raw: &str) -> String {
    let method = raw.trim().to_ascii_uppercase();
    if method.is_empty() {
        Method::GET.to_string()
    } else {
        method
    }
}

/// Only these methods carry the configured body.
fn carries_body(method: &Method) -> bool {
    *method == Method::POST || *method == Method::PUT || *method == Method::PATCH
}

/// Runs checks and records their results.
pub struct CheckExecutor {
    client: Client,
    policy: CheckPolicy,
    aggregator: Arc<Aggregator>,
}

impl CheckExecutor {
    /// Create an executor with a pooled client.
    pub fn new(policy: CheckPolicy, aggregator: Arc<Aggregator>) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client, policy, aggregator))
    }

    pub fn with_client(client: Client, policy: CheckPolicy, aggregator: Arc<Aggregator>) -> Self {
        Self {
            client,
            policy,
            aggregator,
        }
    }

    pub fn policy(&self) -> CheckPolicy {
        self.policy
    }

    pub fn aggregator(&self) -> &Arc<Aggregator> {
        &self.aggregator
    }

    /// Build the outgoing request for an endpoint.
    pub fn build_request(&self, endpoint: &Endpoint) -> Result<reqwest::Request, BuildError> {
        let method_name = resolve_method(&endpoint.method);
        let method = Method::from_bytes(method_name.as_bytes())
            .map_err(|_| BuildError::InvalidMethod(method_name.clone()))?;

        let url = Url::parse(&endpoint.url).map_err(|source| BuildError::InvalidUrl {
            url: endpoint.url.clone(),
            source,
        })?;

        let body = if carries_body(&method) && !endpoint.body.is_empty() {
            Some(endpoint.body.clone())
        } else {
            None
        };

        let mut request = reqwest::Request::new(method, url);
        for (name, value) in &endpoint.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| BuildError::InvalidHeaderName(name.clone()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| BuildError::InvalidHeaderValue(name.clone()))?;
            // insert() replaces, so configured headers win over client defaults.
            request.headers_mut().insert(header_name, header_value);
        }
        if let Some(body) = body {
            *request.body_mut() = Some(body.into());
        }

        Ok(request)
    }

    /// Check one endpoint and count the result against its domain.
    pub async fn check(&self, endpoint: &Endpoint) -> CheckOutcome {
        let request = match self.build_request(endpoint) {
            Ok(request) => request,
            Err(BuildError::InvalidUrl {
                url,
                source: url::ParseError::RelativeUrlWithoutBase,
            }) => {
                let outcome = CheckOutcome::TransportError {
                    error: TransportError::MissingScheme(url),
                    latency: Duration::ZERO,
                };
                return self.finish(endpoint, outcome);
            }
            Err(e) => {
                tracing::error!(
                    endpoint = %endpoint.label(),
                    error = %e,
                    "Failed to build health check request, skipping"
                );
                metrics::record_check(&endpoint.domain, "skipped", None);
                return CheckOutcome::ConstructionSkipped(e);
            }
        };

        let start = Instant::now();
        let result = time::timeout(self.policy.timeout, self.client.execute(request)).await;
        let latency = start.elapsed();

        let outcome = match result {
            Ok(Ok(response)) => self.policy.classify(response.status(), latency),
            Ok(Err(e)) => CheckOutcome::TransportError {
                error: TransportError::from(e),
                latency,
            },
            Err(_) => CheckOutcome::TransportError {
                error: TransportError::Timeout(self.policy.timeout),
                latency,
            },
        };

        self.finish(endpoint, outcome)
    }

    /// Count a sent (or unsendable) attempt against the endpoint's domain.
    fn finish(&self, endpoint: &Endpoint, outcome: CheckOutcome) -> CheckOutcome {
        let latency = match &outcome {
            CheckOutcome::Success { latency, .. }
            | CheckOutcome::HttpFailure { latency, .. }
            | CheckOutcome::TransportError { latency, .. } => Some(*latency),
            CheckOutcome::ConstructionSkipped(_) => None,
        };

        self.aggregator.record(&endpoint.domain, outcome.is_success());
        metrics::record_check(&endpoint.domain, outcome.label(), latency);
        log_outcome(endpoint, &outcome);

        outcome
    }
}

fn log_outcome(endpoint: &Endpoint, outcome: &CheckOutcome) {
    match outcome {
        CheckOutcome::Success { status, latency } => {
            tracing::debug!(
                endpoint = %endpoint.label(),
                domain = %endpoint.domain,
                status = status.as_u16(),
                latency_ms = latency.as_millis() as u64,
                "Health check passed"
            );
        }
        CheckOutcome::HttpFailure { status, latency } => {
            tracing::warn!(
                endpoint = %endpoint.label(),
                domain = %endpoint.domain,
                status = status.as_u16(),
                latency_ms = latency.as_millis() as u64,
                "Health check failed: non-success status or too slow"
            );
        }
        CheckOutcome::TransportError { error, latency } => {
            tracing::warn!(
                endpoint = %endpoint.label(),
                domain = %endpoint.domain,
                error = %error,
                latency_ms = latency.as_millis() as u64,
                "Health check failed: no response"
            );
        }
        CheckOutcome::ConstructionSkipped(_) => {}
    }
}
