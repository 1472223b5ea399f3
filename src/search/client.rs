// Search client
//
// Builds the authenticated GET against `<baseUrl>/search`; the host context
// owns the actual transport, TLS, and timeouts. No retry at this layer; a
// failed attempt is final for that record.

use serde_json::Value;
use tracing::info;

use crate::host::{Credentials, ExecutionContext};
use crate::search::params::SearchParams;
use crate::types::AdapterResult;

pub struct SearchClient {
    base_url: String,
    api_key: String,
}

impl SearchClient {
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            base_url: credentials.api_url.clone(),
            api_key: credentials.api_key.clone(),
        }
    }

    /// Issue one search call and return the raw JSON payload.
    pub async fn search(
        &self,
        ctx: &dyn ExecutionContext,
        params: &SearchParams,
    ) -> AdapterResult<Value> {
        let url = format!("{}/search", self.base_url);
        let headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            (
                "Authorization".to_string(),
                format!("Bearer {}", self.api_key),
            ),
        ];

        info!(query = %params.query, url = %url, "Searching Searxng");

        ctx.http_get(&url, &params.to_query_pairs(), &headers).await
    }
}
