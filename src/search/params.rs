// Query-parameter assembly for the Searxng search API

use serde::Deserialize;

/// Optional search settings from the node's additional-fields collection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdditionalFields {
    pub language: Option<String>,
    pub time_range: Option<String>,
    pub safesearch: Option<String>,
    pub pageno: Option<u32>,
    pub format: Option<String>,
}

/// Parameter set for one `/search` call.
///
/// Optional parameters stay unset unless the user configured a non-empty
/// value; the API applies its own defaults for absent parameters.
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub query: String,
    pub categories: Vec<String>,
    pub format: String,
    pub language: Option<String>,
    pub time_range: Option<String>,
    pub safesearch: Option<String>,
    pub pageno: Option<u32>,
}

impl SearchParams {
    pub fn new(query: String, categories: Vec<String>, additional: AdditionalFields) -> Self {
        Self {
            query,
            categories,
            format: additional
                .format
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "json".to_string()),
            language: additional.language.filter(|v| !v.is_empty()),
            time_range: additional.time_range.filter(|v| !v.is_empty()),
            safesearch: additional.safesearch.filter(|v| !v.is_empty()),
            pageno: additional.pageno.filter(|n| *n > 0),
        }
    }

    /// Ordered query pairs for the outbound request.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("q".to_string(), self.query.clone()),
            ("categories".to_string(), self.categories.join(",")),
            ("format".to_string(), self.format.clone()),
        ];

        if let Some(language) = &self.language {
            pairs.push(("language".to_string(), language.clone()));
        }
        if let Some(time_range) = &self.time_range {
            pairs.push(("time_range".to_string(), time_range.clone()));
        }
        if let Some(safesearch) = &self.safesearch {
            pairs.push(("safesearch".to_string(), safesearch.clone()));
        }
        if let Some(pageno) = self.pageno {
            pairs.push(("pageno".to_string(), pageno.to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(pairs: &[(String, String)]) -> Vec<&str> {
        pairs.iter().map(|(name, _)| name.as_str()).collect()
    }

    #[test]
    fn omits_optional_parameters_when_unset() {
        let params = SearchParams::new(
            "rust".to_string(),
            vec!["general".to_string()],
            AdditionalFields::default(),
        );

        let pairs = params.to_query_pairs();
        assert_eq!(names(&pairs), ["q", "categories", "format"]);
        assert_eq!(pairs[0].1, "rust");
        assert_eq!(pairs[1].1, "general");
        assert_eq!(pairs[2].1, "json");
    }

    #[test]
    fn includes_configured_optional_parameters() {
        let params = SearchParams::new(
            "rust".to_string(),
            vec!["news".to_string(), "science".to_string()],
            AdditionalFields {
                language: Some("de".to_string()),
                time_range: Some("week".to_string()),
                safesearch: Some("2".to_string()),
                pageno: Some(3),
                format: Some("rss".to_string()),
            },
        );

        let pairs = params.to_query_pairs();
        assert_eq!(
            names(&pairs),
            ["q", "categories", "format", "language", "time_range", "safesearch", "pageno"]
        );
        assert_eq!(pairs[1].1, "news,science");
        assert_eq!(pairs[2].1, "rss");
        assert_eq!(pairs[6].1, "3");
    }

    #[test]
    fn drops_empty_values() {
        let params = SearchParams::new(
            "rust".to_string(),
            vec!["general".to_string()],
            AdditionalFields {
                language: Some(String::new()),
                time_range: Some(String::new()),
                safesearch: None,
                pageno: Some(0),
                format: Some(String::new()),
            },
        );

        let pairs = params.to_query_pairs();
        assert_eq!(names(&pairs), ["q", "categories", "format"]);
        assert_eq!(pairs[2].1, "json");
    }
}
