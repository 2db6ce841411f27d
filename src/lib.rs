// Module declarations
pub mod config;
pub mod error;
pub mod export;
pub mod gemini;
pub mod generator;
pub mod jira;
pub mod models;

// Server module (HTTP API)
pub mod server;

// Re-export the core value objects for use in tests and the binary
pub use error::Error;
pub use models::{Epic, EpicDetail, GeneratedContent, OneOrMany, TestCase, UserStory};
