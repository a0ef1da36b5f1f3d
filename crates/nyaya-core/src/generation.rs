use anyhow::Result;
use async_trait::async_trait;

use crate::types::{ModelTier, Part};

/// Seam to the external Generation Service: submit one ordered list of
/// parts, receive one text completion. Implementations perform exactly one
/// upstream request per call — no retries, no caching, no streaming.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    async fn generate(&self, tier: ModelTier, parts: &[Part]) -> Result<String>;
}
