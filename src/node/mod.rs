//! Searxng node
//!
//! The adapter's batch loop: one search call per input record, one output
//! record per input record, in input order. A per-record failure is captured
//! as an error record when the host's continuation policy allows it;
//! otherwise the pass aborts.

pub mod descriptor;

use serde_json::Value;
use tracing::{info, warn};

use crate::host::ExecutionContext;
use crate::search::{
    normalize, resolve_query, AdditionalFields, RecordOutput, SearchClient, SearchParams,
};
use crate::types::AdapterResult;

pub struct SearxngNode;

impl SearxngNode {
    /// Run one execution pass over a batch of input records.
    pub async fn execute(
        ctx: &dyn ExecutionContext,
        items: &[Value],
    ) -> AdapterResult<Vec<RecordOutput>> {
        let mut output = Vec::with_capacity(items.len());

        // Credentials resolve once per pass. Under the continuation policy a
        // failure here yields the output accumulated so far, which at this
        // point is none.
        let credentials = match ctx.credentials() {
            Ok(credentials) => credentials,
            Err(e) => {
                if ctx.continue_on_fail() {
                    warn!(error = %e, "Credential resolution failed, ending pass early");
                    return Ok(output);
                }
                return Err(e);
            }
        };

        let client = SearchClient::new(&credentials);

        for (index, item) in items.iter().enumerate() {
            let default_query = string_parameter(ctx, "query", index);
            let query = resolve_query(item, &default_query);

            let categories = list_parameter(ctx, "categories", index)
                .unwrap_or_else(|| vec!["general".to_string()]);
            let single_response = ctx
                .parameter("singleResponse", index)
                .and_then(|v| v.as_bool())
                .unwrap_or(false);
            let additional: AdditionalFields = ctx
                .parameter("additionalFields", index)
                .and_then(|v| serde_json::from_value(v).ok())
                .unwrap_or_default();

            let params = SearchParams::new(query.clone(), categories, additional);

            match client.search(ctx, &params).await {
                Ok(response) => output.push(normalize(&query, response, single_response)),
                Err(e) => {
                    if ctx.continue_on_fail() {
                        warn!(index = index, error = %e, "Search failed, capturing error record");
                        output.push(RecordOutput::failure(&query, e.to_string()));
                        continue;
                    }
                    return Err(e);
                }
            }
        }

        info!(records = output.len(), "Search pass completed");
        Ok(output)
    }
}

fn string_parameter(ctx: &dyn ExecutionContext, name: &str, index: usize) -> String {
    ctx.parameter(name, index)
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

fn list_parameter(ctx: &dyn ExecutionContext, name: &str, index: usize) -> Option<Vec<String>> {
    ctx.parameter(name, index)
        .and_then(|v| serde_json::from_value(v).ok())
}
