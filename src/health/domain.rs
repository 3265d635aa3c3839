//! Aggregation key derivation.

use url::Url;

/// Derive the grouping key for an endpoint URL: its host, without port.
///
/// Never fails. A URL that does not parse, or parses without a host, keys on
/// its raw text so the endpoint still gets a bucket.
pub fn extract_domain(raw: &str) -> String {
    let parsed = match Url::parse(raw) {
        Ok(url) => url,
        Err(_) => return raw.to_string(),
    };

    match parsed.host_str() {
        // host_str() never carries the port; IPv6 literals keep their brackets.
        Some(host) if !host.is_empty() => host.to_string(),
        _ => raw.to_string(),
    }
}
