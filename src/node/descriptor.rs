// Declarative node description consumed by the host UI.
//
// Field names, defaults, and option lists mirror the Searxng search API
// parameter set; the host renders this metadata, the adapter never does.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescriptor {
    pub display_name: String,
    pub name: String,
    pub icon: String,
    pub group: Vec<String>,
    pub version: u32,
    pub subtitle: String,
    pub description: String,
    pub defaults: NodeDefaults,
    pub inputs: Vec<NodeConnection>,
    pub outputs: Vec<NodeConnection>,
    pub usable_as_tool: bool,
    pub credentials: Vec<CredentialRequirement>,
    pub codex: CodexMetadata,
    pub properties: Vec<NodeProperty>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeDefaults {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeConnection {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CredentialRequirement {
    pub name: String,
    pub required: bool,
}

/// AI-tool discovery metadata.
#[derive(Debug, Clone, Serialize)]
pub struct CodexMetadata {
    pub categories: Vec<String>,
    pub alias: Vec<String>,
    pub subcategories: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProperty {
    pub display_name: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    pub default: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_data_expression: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<PropertyOption>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyKind {
    Options,
    MultiOptions,
    String,
    Boolean,
    Number,
    Collection,
}

/// Either a selectable choice or, inside a collection, a nested field.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PropertyOption {
    Choice(OptionChoice),
    Field(Box<NodeProperty>),
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionChoice {
    pub name: String,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl NodeProperty {
    fn new(display_name: &str, name: &str, kind: PropertyKind, default: Value) -> Self {
        Self {
            display_name: display_name.to_string(),
            name: name.to_string(),
            kind,
            default,
            required: None,
            no_data_expression: None,
            description: None,
            placeholder: None,
            hint: None,
            options: Vec::new(),
        }
    }

    fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    fn no_data_expression(mut self) -> Self {
        self.no_data_expression = Some(true);
        self
    }

    fn describe(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    fn placeholder(mut self, text: &str) -> Self {
        self.placeholder = Some(text.to_string());
        self
    }

    fn hint(mut self, text: &str) -> Self {
        self.hint = Some(text.to_string());
        self
    }

    fn options(mut self, options: Vec<PropertyOption>) -> Self {
        self.options = options;
        self
    }
}

fn choice(name: &str, value: impl Into<Value>) -> PropertyOption {
    PropertyOption::Choice(OptionChoice {
        name: name.to_string(),
        value: value.into(),
        description: None,
        action: None,
    })
}

fn field(property: NodeProperty) -> PropertyOption {
    PropertyOption::Field(Box::new(property))
}

/// Build the node description published to the host.
pub fn descriptor() -> NodeDescriptor {
    NodeDescriptor {
        display_name: "Searxng".to_string(),
        name: "searxng".to_string(),
        icon: "file:searxng.svg".to_string(),
        group: vec!["transform".to_string()],
        version: 1,
        subtitle: "={{$parameter[\"operation\"]}}".to_string(),
        description: "Perform web searches using Searxng".to_string(),
        defaults: NodeDefaults {
            name: "Searxng".to_string(),
        },
        inputs: vec![NodeConnection {
            kind: "main".to_string(),
        }],
        outputs: vec![NodeConnection {
            kind: "main".to_string(),
        }],
        usable_as_tool: true,
        credentials: vec![CredentialRequirement {
            name: "searxngApi".to_string(),
            required: true,
        }],
        codex: CodexMetadata {
            categories: vec!["Search".to_string(), "Web".to_string()],
            alias: vec![
                "web-search".to_string(),
                "searxng".to_string(),
                "search-engine".to_string(),
            ],
            subcategories: BTreeMap::from([(
                "search".to_string(),
                vec!["Web Search".to_string(), "Metasearch".to_string()],
            )]),
        },
        properties: vec![
            NodeProperty::new("Operation", "operation", PropertyKind::Options, json!("search"))
                .no_data_expression()
                .options(vec![PropertyOption::Choice(OptionChoice {
                    name: "Search".to_string(),
                    value: json!("search"),
                    description: Some("Perform a search query".to_string()),
                    action: Some("Perform a search query".to_string()),
                })]),
            NodeProperty::new("Query", "query", PropertyKind::String, json!(""))
                .required()
                .placeholder("Enter search query")
                .describe("The search query to perform")
                .hint("Can be provided directly or via AI agent input"),
            NodeProperty::new(
                "Categories",
                "categories",
                PropertyKind::MultiOptions,
                json!(["general"]),
            )
            .describe("Categories to search in")
            .options(vec![
                choice("General", "general"),
                choice("Images", "images"),
                choice("News", "news"),
                choice("Videos", "videos"),
                choice("Files", "files"),
                choice("IT", "it"),
                choice("Maps", "map"),
                choice("Music", "music"),
                choice("Science", "science"),
                choice("Social Media", "social media"),
            ]),
            NodeProperty::new(
                "Return Single Response",
                "singleResponse",
                PropertyKind::Boolean,
                json!(false),
            )
            .describe(
                "Whether to return only the content from the first search result as a string",
            ),
            NodeProperty::new(
                "Additional Fields",
                "additionalFields",
                PropertyKind::Collection,
                json!({}),
            )
            .placeholder("Add Field")
            .options(vec![
                field(
                    NodeProperty::new("Language", "language", PropertyKind::Options, json!("en"))
                        .describe("Language of the search results")
                        .options(vec![
                            choice("English", "en"),
                            choice("German", "de"),
                            choice("French", "fr"),
                            choice("Spanish", "es"),
                            choice("Italian", "it"),
                            choice("All Languages", "all"),
                        ]),
                ),
                field(
                    NodeProperty::new("Time Range", "time_range", PropertyKind::Options, json!("all"))
                        .describe("Time range for the search results")
                        .options(vec![
                            choice("Any Time", "all"),
                            choice("Day", "day"),
                            choice("Week", "week"),
                            choice("Month", "month"),
                            choice("Year", "year"),
                        ]),
                ),
                field(
                    NodeProperty::new("Safe Search", "safesearch", PropertyKind::Options, json!("1"))
                        .describe("Safe search level")
                        .options(vec![
                            choice("Off", "0"),
                            choice("Moderate", "1"),
                            choice("Strict", "2"),
                        ]),
                ),
                field(
                    NodeProperty::new("Page Number", "pageno", PropertyKind::Number, json!(1))
                        .describe("Page number of results"),
                ),
                field(
                    NodeProperty::new("Format", "format", PropertyKind::Options, json!("json"))
                        .describe("Output format of the search results")
                        .options(vec![
                            choice("HTML", "html"),
                            choice("JSON", "json"),
                            choice("RSS", "rss"),
                        ]),
                ),
            ]),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describes_all_configuration_fields() {
        let descriptor = descriptor();
        let names: Vec<&str> = descriptor
            .properties
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            names,
            ["operation", "query", "categories", "singleResponse", "additionalFields"]
        );
    }

    #[test]
    fn serializes_with_host_field_names() {
        let value = serde_json::to_value(descriptor()).unwrap();

        assert_eq!(value["displayName"], "Searxng");
        assert_eq!(value["credentials"][0]["name"], "searxngApi");
        assert_eq!(value["properties"][1]["type"], "string");
        assert_eq!(value["properties"][1]["required"], true);
        assert_eq!(value["properties"][2]["type"], "multiOptions");
        assert_eq!(value["properties"][2]["default"], json!(["general"]));
        assert_eq!(value["properties"][2]["options"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn additional_fields_carry_recognized_option_values() {
        let value = serde_json::to_value(descriptor()).unwrap();
        let fields = value["properties"][4]["options"].as_array().unwrap();

        let names: Vec<&str> = fields
            .iter()
            .map(|f| f["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["language", "time_range", "safesearch", "pageno", "format"]);

        let formats: Vec<&str> = fields[4]["options"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["value"].as_str().unwrap())
            .collect();
        assert_eq!(formats, ["html", "json", "rss"]);
    }
}
