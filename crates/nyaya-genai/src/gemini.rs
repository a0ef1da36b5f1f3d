use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use nyaya_core::generation::GenerationBackend;
use nyaya_core::types::{ModelTier, Part};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Calls the Google Generative Language REST API (`generateContent`).
///
/// One upstream request per call — no retries, no caching, no streaming.
/// The client timeout is the only deadline; a timed-out call is simply an
/// error, never resumed.
pub struct GeminiBackend {
    api_key: String,
    base_url: String,
    fast_model: String,
    quality_model: String,
    client: reqwest::Client,
}

impl GeminiBackend {
    pub fn new(
        api_key: impl Into<String>,
        fast_model: impl Into<String>,
        quality_model: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.into(),
            fast_model: fast_model.into(),
            quality_model: quality_model.into(),
            client,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Fast => &self.fast_model,
            ModelTier::Quality => &self.quality_model,
        }
    }
}

// ── Wire types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<WirePart>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum WirePart {
    Text {
        text: String,
    },
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

fn build_request(parts: &[Part]) -> GenerateRequest {
    let parts = parts
        .iter()
        .map(|p| match p {
            Part::Text(text) => WirePart::Text { text: text.clone() },
            Part::Blob { mime_type, data } => WirePart::Inline {
                inline_data: InlineData {
                    mime_type: mime_type.clone(),
                    data: data.clone(),
                },
            },
        })
        .collect();
    GenerateRequest {
        contents: vec![Content { parts }],
    }
}

fn extract_text(response: GenerateResponse) -> Result<String> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .context("response has no candidates")?;
    let content = candidate.content.context("candidate has no content")?;
    let text: String = content.parts.into_iter().map(|p| p.text).collect();
    if text.is_empty() {
        bail!("response carried no text");
    }
    Ok(text)
}

#[async_trait]
impl GenerationBackend for GeminiBackend {
    async fn generate(&self, tier: ModelTier, parts: &[Part]) -> Result<String> {
        let model = self.model_for(tier);
        // The key rides in the query string; never log the URL.
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            model,
            self.api_key
        );
        let body = build_request(parts);

        info!(model, parts = parts.len(), "calling generateContent");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .context("generation service request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(model, %status, "generation service returned non-200");
            bail!("generation service error {status}: {body}");
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .context("failed to parse generation service response")?;
        let text = extract_text(parsed)?;

        info!(model, output_len = text.len(), "completion received");
        Ok(text)
    }
}
