// Query resolution
//
// Upstream AI/agent steps hand free-form text under varying field names, so
// the query is taken from the first string-typed candidate field before
// falling back to the configured parameter.

use serde_json::Value;

/// Input-record fields checked for a query, in precedence order.
const QUERY_FIELDS: [&str; 3] = ["query", "input", "prompt"];

/// Resolve the search query for one input record.
///
/// Only string-typed fields count; anything else falls through to the next
/// candidate. An empty result is forwarded as-is; validation is left to
/// the search API.
pub fn resolve_query(item: &Value, fallback: &str) -> String {
    QUERY_FIELDS
        .iter()
        .find_map(|field| item.get(field).and_then(Value::as_str))
        .unwrap_or(fallback)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefers_query_over_input() {
        let item = json!({"query": "A", "input": "B"});
        assert_eq!(resolve_query(&item, "default"), "A");
    }

    #[test]
    fn falls_back_to_input_then_prompt() {
        assert_eq!(resolve_query(&json!({"input": "B"}), "default"), "B");
        assert_eq!(resolve_query(&json!({"prompt": "C"}), "default"), "C");
    }

    #[test]
    fn skips_non_string_fields() {
        let item = json!({"query": 42, "input": ["x"], "prompt": "C"});
        assert_eq!(resolve_query(&item, "default"), "C");
    }

    #[test]
    fn uses_configured_default_when_no_field_matches() {
        assert_eq!(resolve_query(&json!({}), "default"), "default");
        assert_eq!(resolve_query(&json!({"other": "x"}), ""), "");
    }
}
