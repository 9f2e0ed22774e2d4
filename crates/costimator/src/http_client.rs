use crate::prelude::*;

/// Default timeout for upstream calls. The aggregation loop is strictly
/// sequential, so a hanging upstream would otherwise stall the whole
/// request indefinitely.
pub const UPSTREAM_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// A `reqwest` client with the default upstream timeout applied.
pub fn default_http_client() -> Client {
    Client::builder()
        .timeout(UPSTREAM_REQUEST_TIMEOUT)
        .build()
        .unwrap()
}
