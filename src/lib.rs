// Searxng query adapter for workflow-automation hosts

pub mod config;
pub mod host;
pub mod node;
pub mod search;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use host::{Credentials, ExecutionContext};
pub use node::SearxngNode;
pub use search::{RecordOutput, SearchHit};
pub use types::{AdapterError, AdapterResult};
