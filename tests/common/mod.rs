//! Shared helpers for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use availability_monitor::config::{CheckConfig, EndpointConfig, MonitorConfig};
use availability_monitor::health::{CheckExecutor, CheckPolicy};
use availability_monitor::report::MemoryReporter;
use availability_monitor::{Aggregator, HealthMonitor};

/// Start a backend that accepts connections but never answers.
#[allow(dead_code)]
pub async fn start_silent_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    tokio::spawn(async move {
                        tokio::time::sleep(Duration::from_secs(10)).await;
                        drop(socket);
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// An address nothing is listening on.
#[allow(dead_code)]
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

#[allow(dead_code)]
pub fn executor(policy: CheckPolicy) -> CheckExecutor {
    CheckExecutor::new(policy, Arc::new(Aggregator::new())).unwrap()
}

#[allow(dead_code)]
pub fn endpoint(url: impl Into<String>) -> EndpointConfig {
    EndpointConfig {
        url: url.into(),
        ..Default::default()
    }
}

/// A monitor over `endpoints` with default check settings and a fresh aggregator.
#[allow(dead_code)]
pub fn monitor(endpoints: Vec<EndpointConfig>) -> (HealthMonitor, Arc<MemoryReporter>) {
    monitor_with(endpoints, CheckConfig::default())
}

#[allow(dead_code)]
pub fn monitor_with(
    endpoints: Vec<EndpointConfig>,
    check: CheckConfig,
) -> (HealthMonitor, Arc<MemoryReporter>) {
    let config = MonitorConfig {
        endpoints,
        check,
        ..Default::default()
    };
    let reporter = Arc::new(MemoryReporter::new());
    let monitor =
        HealthMonitor::from_config(&config, Arc::new(Aggregator::new()), reporter.clone()).unwrap();
    (monitor, reporter)
}
