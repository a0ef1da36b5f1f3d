use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use nyaya_core::generation::GenerationBackend;
use nyaya_core::types::{ModelTier, Part};

/// One recorded Generation Service invocation.
#[derive(Debug, Clone)]
pub struct Call {
    pub tier: ModelTier,
    pub parts: Vec<Part>,
}

impl Call {
    pub fn blob_count(&self) -> usize {
        self.parts.iter().filter(|p| p.is_blob()).count()
    }

    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                Part::Text(t) => Some(t.as_str()),
                Part::Blob { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Scripted stand-in for the Generation Service: records every call and
/// replays canned replies in order, falling back to a fixed reply once the
/// script runs out.
pub struct ScriptedBackend {
    calls: Mutex<Vec<Call>>,
    replies: Mutex<Vec<String>>,
    fallback: String,
}

impl ScriptedBackend {
    pub fn always(reply: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            replies: Mutex::new(Vec::new()),
            fallback: reply.to_string(),
        }
    }

    pub fn scripted(replies: &[&str]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
            fallback: "ok".to_string(),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationBackend for ScriptedBackend {
    async fn generate(&self, tier: ModelTier, parts: &[Part]) -> Result<String> {
        self.calls.lock().unwrap().push(Call {
            tier,
            parts: parts.to_vec(),
        });
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            Ok(self.fallback.clone())
        } else {
            Ok(replies.remove(0))
        }
    }
}

/// Backend that fails every call, for upstream-error mapping tests.
pub struct FailingBackend;

#[async_trait]
impl GenerationBackend for FailingBackend {
    async fn generate(&self, _tier: ModelTier, _parts: &[Part]) -> Result<String> {
        anyhow::bail!("quota exceeded")
    }
}
