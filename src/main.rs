use std::collections::HashMap;

use clap::Parser;
use serde_json::{json, Value};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use searxng_adapter::host::standalone::StandaloneContext;
use searxng_adapter::node::descriptor;
use searxng_adapter::{Config, Credentials, SearxngNode};

/// Run the Searxng node the way a workflow host would: credentials from the
/// environment, parameters from flags, one input record per invocation.
#[derive(Debug, Parser)]
#[command(name = "searxng-adapter", version)]
struct Cli {
    /// Search query (omit with --describe)
    query: Option<String>,

    /// Categories to search in, comma separated
    #[arg(long, value_delimiter = ',')]
    categories: Vec<String>,

    /// Return only the content of the first result
    #[arg(long)]
    single_response: bool,

    /// Language of the search results (en, de, fr, es, it, all)
    #[arg(long)]
    language: Option<String>,

    /// Time range (all, day, week, month, year)
    #[arg(long)]
    time_range: Option<String>,

    /// Safe search level (0, 1, 2)
    #[arg(long)]
    safesearch: Option<String>,

    /// Page number of results
    #[arg(long)]
    pageno: Option<u32>,

    /// Output format requested from the API (html, json, rss)
    #[arg(long)]
    format: Option<String>,

    /// Capture per-record failures instead of aborting the pass
    #[arg(long)]
    continue_on_fail: bool,

    /// Print the node descriptor as JSON and exit
    #[arg(long)]
    describe: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "searxng_adapter=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if cli.describe {
        println!("{}", serde_json::to_string_pretty(&descriptor::descriptor())?);
        return Ok(());
    }

    let query = cli
        .query
        .clone()
        .ok_or_else(|| anyhow::anyhow!("a search query is required unless --describe is given"))?;

    let config = Config::from_env()?;
    info!(api_url = %config.api.url, "Configuration loaded");

    let parameters = build_parameters(&cli, &config, &query);
    let context = StandaloneContext::new(
        Credentials {
            api_url: config.api.url.clone(),
            api_key: config.api.key.clone(),
        },
        parameters,
        cli.continue_on_fail,
    );

    let items = vec![json!({})];
    let output = SearxngNode::execute(&context, &items).await?;

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn build_parameters(cli: &Cli, config: &Config, query: &str) -> HashMap<String, Value> {
    let mut parameters = HashMap::new();
    parameters.insert("query".to_string(), json!(query));

    let categories = if cli.categories.is_empty() {
        config.search.default_categories.clone()
    } else {
        cli.categories.clone()
    };
    parameters.insert("categories".to_string(), json!(categories));
    parameters.insert("singleResponse".to_string(), json!(cli.single_response));

    let mut additional = serde_json::Map::new();
    if let Some(language) = cli
        .language
        .clone()
        .or_else(|| config.search.default_language.clone())
    {
        additional.insert("language".to_string(), json!(language));
    }
    if let Some(time_range) = &cli.time_range {
        additional.insert("time_range".to_string(), json!(time_range));
    }
    if let Some(safesearch) = &cli.safesearch {
        additional.insert("safesearch".to_string(), json!(safesearch));
    }
    if let Some(pageno) = cli.pageno {
        additional.insert("pageno".to_string(), json!(pageno));
    }
    if let Some(format) = &cli.format {
        additional.insert("format".to_string(), json!(format));
    }
    parameters.insert("additionalFields".to_string(), Value::Object(additional));

    parameters
}
