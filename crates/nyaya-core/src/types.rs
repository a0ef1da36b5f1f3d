use serde::{Deserialize, Serialize};

// ── Documents ────────────────────────────────────────────────────────────

/// An uploaded file as the client sends it: base64 body plus the declared
/// media type. Request-scoped only; never written to disk or a database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    pub data: String,
    pub mime_type: String,
}

// ── Conversation ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in a chat or draft-interview session. Append-only,
/// chronological.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            text: text.into(),
        }
    }
}

/// Fold turns into the single text block fed back to the model: one
/// `User:` / `Assistant:` line per turn, order preserved.
pub fn serialize_turns(turns: &[Turn]) -> String {
    turns
        .iter()
        .map(|t| match t.role {
            Role::User => format!("User: {}", t.text),
            Role::Assistant => format!("Assistant: {}", t.text),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Generation request parts ─────────────────────────────────────────────

/// One ordered element of a generation request: literal prompt text, or a
/// binary attachment (base64 body) with its media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    Text(String),
    Blob { mime_type: String, data: String },
}

impl Part {
    pub fn is_blob(&self) -> bool {
        matches!(self, Part::Blob { .. })
    }
}

/// Model capability selection for a single call. Fast serves short
/// interactive turns; Quality serves final long-form generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    Fast,
    Quality,
}

// ── Comparison ───────────────────────────────────────────────────────────

/// One side of a comparison: literal text, or a binary document. The wire
/// tags are `"text"` and `"image"` to match the existing client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CompareSide {
    #[serde(rename = "text")]
    Text { content: String },
    #[serde(rename = "image", rename_all = "camelCase")]
    Image { data: String, mime_type: String },
}
