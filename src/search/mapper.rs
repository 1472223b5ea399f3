// Response normalization
//
// The metasearch backend's payload shape is not under this component's
// control, so everything is read defensively off `serde_json::Value`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One mapped search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    pub title: String,
    pub url: String,
    pub content: String,
    pub snippet: String,
}

/// Top-level response metadata; fields the backend omitted stay out of the
/// serialized output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
}

/// Output record for one input item.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RecordOutput {
    Answer {
        success: bool,
        query: String,
        answer: String,
    },
    Results {
        success: bool,
        query: String,
        results: Vec<SearchHit>,
        metadata: ResponseMetadata,
        raw: Value,
    },
    Error {
        success: bool,
        error: String,
        query: String,
    },
}

impl RecordOutput {
    pub fn failure(query: &str, error: String) -> Self {
        RecordOutput::Error {
            success: false,
            error,
            query: query.to_string(),
        }
    }
}

fn text_field(value: &Value, name: &str) -> String {
    value
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

/// Map the raw `results` array, tolerating a missing or non-list field.
///
/// A hit without an explicit snippet gets its content as the snippet.
pub fn map_hits(response: &Value) -> Vec<SearchHit> {
    let results = match response.get("results").and_then(Value::as_array) {
        Some(results) => results,
        None => return Vec::new(),
    };

    results
        .iter()
        .map(|result| {
            let content = text_field(result, "content");
            let snippet = result
                .get("snippet")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| content.clone());

            SearchHit {
                title: text_field(result, "title"),
                url: text_field(result, "url"),
                content,
                snippet,
            }
        })
        .collect()
}

/// Normalize one raw response into the output shape for its input record.
///
/// Single-response mode collapses to the first hit's content (snippet as
/// the fallback); with zero hits it falls through to the full-result shape.
pub fn normalize(query: &str, response: Value, single_response: bool) -> RecordOutput {
    let results = map_hits(&response);

    if single_response {
        if let Some(first) = results.first() {
            let answer = if first.content.is_empty() {
                first.snippet.clone()
            } else {
                first.content.clone()
            };
            return RecordOutput::Answer {
                success: true,
                query: query.to_string(),
                answer,
            };
        }
    }

    let metadata = ResponseMetadata {
        total: response.get("number_of_results").and_then(Value::as_u64),
        time: response.get("search_time").and_then(Value::as_f64),
        engine: response
            .get("engine")
            .and_then(Value::as_str)
            .map(str::to_string),
    };

    RecordOutput::Results {
        success: true,
        query: query.to_string(),
        results,
        metadata,
        raw: response,
    }
}
