//! The shipped sample configs load and describe the same domains.

use std::path::Path;

use availability_monitor::config::{load_config, ReportSink};
use availability_monitor::health::Endpoint;

fn sample(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(name)
}

#[test]
fn test_yaml_sample_loads() {
    let config = load_config(&sample("endpoints.example.yaml")).unwrap();
    assert_eq!(config.endpoints.len(), 3);
    assert_eq!(config.schedule.interval_secs, 15);

    let domains: Vec<String> = config
        .endpoints
        .into_iter()
        .map(|ep| Endpoint::from(ep).domain)
        .collect();
    assert_eq!(domains, vec!["example.com", "example.com", "api.example.com"]);
}

#[test]
fn test_toml_sample_loads() {
    let config = load_config(&sample("monitor.example.toml")).unwrap();
    assert_eq!(config.endpoints.len(), 2);
    assert_eq!(config.report.sink, ReportSink::Stdout);
    assert_eq!(config.endpoints[1].method, "POST");
    assert_eq!(
        config.endpoints[1].headers.get("content-type").map(String::as_str),
        Some("application/json")
    );
}
