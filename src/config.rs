use anyhow::Result;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub url: String,
    pub key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub default_categories: Vec<String>,
    pub default_language: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            api: ApiConfig {
                url: env::var("SEARXNG_API_URL")
                    .expect("SEARXNG_API_URL must be set"),
                key: env::var("SEARXNG_API_KEY").unwrap_or_default(),
            },
            search: SearchConfig {
                default_categories: env::var("SEARXNG_DEFAULT_CATEGORIES")
                    .unwrap_or_else(|_| "general".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .collect(),
                default_language: env::var("SEARXNG_DEFAULT_LANGUAGE").ok(),
            },
        })
    }
}
