pub mod config;
pub mod draft;
pub mod error;
pub mod generation;
pub mod intake;
pub mod orchestrator;
pub mod prompts;
pub mod types;

pub use error::ApiError;
pub use types::*;
