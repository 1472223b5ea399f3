//! Search Module
//!
//! Builds Searxng search requests and normalizes responses:
//! - query resolution from loosely-typed input records
//! - query-parameter assembly from user configuration
//! - authenticated GET against the `/search` endpoint
//! - defensive mapping of the JSON payload

pub mod client;
pub mod mapper;
pub mod params;
pub mod query;

pub use client::SearchClient;
pub use mapper::{normalize, RecordOutput, ResponseMetadata, SearchHit};
pub use params::{AdditionalFields, SearchParams};
pub use query::resolve_query;
