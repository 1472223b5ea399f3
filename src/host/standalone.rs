// Standalone host context
//
// Environment-backed ExecutionContext used by the runner binary: credentials
// come from the loaded config, parameters from a fixed map built off the CLI,
// and transport is a shared reqwest client.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::host::{Credentials, ExecutionContext};
use crate::types::{AdapterError, AdapterResult};

pub struct StandaloneContext {
    credentials: Credentials,
    parameters: HashMap<String, Value>,
    continue_on_fail: bool,
    client: Client,
}

impl StandaloneContext {
    pub fn new(
        credentials: Credentials,
        parameters: HashMap<String, Value>,
        continue_on_fail: bool,
    ) -> Self {
        Self {
            credentials,
            parameters,
            continue_on_fail,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ExecutionContext for StandaloneContext {
    fn credentials(&self) -> AdapterResult<Credentials> {
        Ok(self.credentials.clone())
    }

    fn parameter(&self, name: &str, _index: usize) -> Option<Value> {
        self.parameters.get(name).cloned()
    }

    fn continue_on_fail(&self) -> bool {
        self.continue_on_fail
    }

    async fn http_get(
        &self,
        url: &str,
        query: &[(String, String)],
        headers: &[(String, String)],
    ) -> AdapterResult<Value> {
        let mut request = self.client.get(url).query(query);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request
            .send()
            .await
            .map_err(|e| AdapterError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdapterError::RequestFailed(format!(
                "search API responded with status {}",
                status
            )));
        }

        debug!(status = %status, url = url, "search request completed");

        response
            .json::<Value>()
            .await
            .map_err(|e| AdapterError::ParseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_for(server_url: &str) -> StandaloneContext {
        StandaloneContext::new(
            Credentials {
                api_url: server_url.to_string(),
                api_key: "secret".to_string(),
            },
            HashMap::new(),
            false,
        )
    }

    #[tokio::test]
    async fn forwards_query_and_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("q".into(), "rust web framework".into()),
                mockito::Matcher::UrlEncoded("format".into(), "json".into()),
            ]))
            .match_header("accept", "application/json")
            .match_header("authorization", "Bearer secret")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"results": []}"#)
            .create_async()
            .await;

        let ctx = context_for(&server.url());
        let url = format!("{}/search", server.url());
        let query = vec![
            ("q".to_string(), "rust web framework".to_string()),
            ("format".to_string(), "json".to_string()),
        ];
        let headers = vec![
            ("Accept".to_string(), "application/json".to_string()),
            ("Authorization".to_string(), "Bearer secret".to_string()),
        ];

        let body = ctx.http_get(&url, &query, &headers).await.unwrap();
        assert!(body.get("results").is_some());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn surfaces_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search")
            .with_status(502)
            .create_async()
            .await;

        let ctx = context_for(&server.url());
        let url = format!("{}/search", server.url());

        let err = ctx.http_get(&url, &[], &[]).await.unwrap_err();
        assert!(err.to_string().contains("502"));
    }
}
