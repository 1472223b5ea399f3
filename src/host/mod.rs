// Host execution-context boundary
//
// The workflow engine owns credentials, per-item parameter resolution,
// the continuation policy, and the HTTP transport. The adapter only sees
// this interface.

pub mod standalone;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::types::AdapterResult;

/// Credential object supplied by the host's credential store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// Base URL of the SearXNG instance, e.g. `https://searx.example.org`
    pub api_url: String,
    /// Bearer token forwarded on every search call
    pub api_key: String,
}

/// Execution context injected by the workflow host.
///
/// `parameter` performs the per-item configured-parameter lookup and
/// returns `None` when the host has nothing configured under that name.
/// `http_get` owns connection handling, TLS, and timeouts; the adapter
/// sets no timeout of its own.
#[async_trait]
pub trait ExecutionContext: Send + Sync {
    fn credentials(&self) -> AdapterResult<Credentials>;

    fn parameter(&self, name: &str, index: usize) -> Option<Value>;

    fn continue_on_fail(&self) -> bool;

    async fn http_get(
        &self,
        url: &str,
        query: &[(String, String)],
        headers: &[(String, String)],
    ) -> AdapterResult<Value>;
}
