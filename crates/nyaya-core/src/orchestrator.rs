//! Operation dispatch. Each public method assembles one deterministic
//! ordered parts list, performs exactly one Generation Service call
//! (`draft_start`: two independent calls), and returns the completion text
//! unchanged. Input validation always happens before the backend is
//! touched.

use std::sync::Arc;

use tracing::debug;

use crate::draft::DraftSession;
use crate::error::ApiError;
use crate::generation::GenerationBackend;
use crate::intake;
use crate::prompts;
use crate::types::{CompareSide, DocumentPayload, ModelTier, Part, Turn};

pub struct Orchestrator {
    backend: Arc<dyn GenerationBackend>,
}

impl Orchestrator {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self { backend }
    }

    async fn generate(&self, tier: ModelTier, parts: Vec<Part>) -> Result<String, ApiError> {
        debug!(?tier, parts = parts.len(), "dispatching generation call");
        self.backend
            .generate(tier, &parts)
            .await
            .map_err(ApiError::upstream)
    }

    /// Explain the document in plain language, classified into one of the
    /// seven fixed categories.
    pub async fn summarize(&self, file: &DocumentPayload) -> Result<String, ApiError> {
        let document = intake::to_part(file)?;
        self.generate(
            ModelTier::Fast,
            vec![document, Part::Text(prompts::summarize())],
        )
        .await
    }

    /// Risk-ranked issue report for the document.
    pub async fn detect_issues(&self, file: &DocumentPayload) -> Result<String, ApiError> {
        let document = intake::to_part(file)?;
        self.generate(
            ModelTier::Fast,
            vec![document, Part::Text(prompts::detect_issues().into())],
        )
        .await
    }

    /// One chat answer about the document. Prior turns ride along as
    /// context but the document reference never changes.
    pub async fn chat_turn(
        &self,
        file: &DocumentPayload,
        question: &str,
        prior_turns: &[Turn],
    ) -> Result<String, ApiError> {
        if question.trim().is_empty() {
            return Err(ApiError::bad_input("input required"));
        }
        let document = intake::to_part(file)?;
        self.generate(
            ModelTier::Fast,
            vec![document, Part::Text(prompts::chat_turn(question, prior_turns))],
        )
        .await
    }

    /// Four-section comparison report. Text sides travel as
    /// `Document N:`-prefixed prompt text; binary sides as blobs with no
    /// prefix. Two text sides mean no blob is sent at all.
    pub async fn compare(
        &self,
        doc1: &CompareSide,
        doc2: &CompareSide,
    ) -> Result<String, ApiError> {
        let parts = vec![
            Part::Text(prompts::compare().into()),
            side_part(doc1, 1)?,
            side_part(doc2, 2)?,
        ];
        self.generate(ModelTier::Fast, parts).await
    }

    /// Start a draft session: the structural template and the first
    /// interview question come from two independent fast-tier calls with
    /// no ordering dependency, so they run concurrently.
    pub async fn draft_start(&self, doc_type: &str) -> Result<(String, String), ApiError> {
        let session = DraftSession::new(doc_type)?;
        let doc_type = session.doc_type();
        let template = self.generate(
            ModelTier::Fast,
            vec![Part::Text(prompts::template(doc_type))],
        );
        let first_question = self.generate(
            ModelTier::Fast,
            vec![Part::Text(prompts::interview_start(doc_type))],
        );
        tokio::try_join!(template, first_question)
    }

    /// Ask for the next single clarifying question — or the readiness
    /// sentinel — given the interview so far.
    pub async fn draft_next_turn(&self, session: &DraftSession) -> Result<String, ApiError> {
        let prompt = prompts::interview_next(session.doc_type(), &session.conversation());
        self.generate(ModelTier::Fast, vec![Part::Text(prompt)]).await
    }

    /// Generate the final document body from the frozen interview. Only
    /// legal once the session has seen the readiness sentinel.
    pub async fn draft_finalize(&self, session: &DraftSession) -> Result<String, ApiError> {
        if !session.is_ready() {
            return Err(ApiError::bad_input("interview is not complete"));
        }
        let prompt = prompts::finalize(session.doc_type(), &session.conversation());
        self.generate(ModelTier::Quality, vec![Part::Text(prompt)])
            .await
    }

    /// Fabricate a fully filled specimen document with synthetic data,
    /// bypassing the interview. Demo purposes only.
    pub async fn draft_random_demo(&self, doc_type: &str) -> Result<String, ApiError> {
        let session = DraftSession::new(doc_type)?;
        self.generate(
            ModelTier::Quality,
            vec![Part::Text(prompts::random_demo(session.doc_type()))],
        )
        .await
    }
}

fn side_part(side: &CompareSide, index: usize) -> Result<Part, ApiError> {
    match side {
        CompareSide::Text { content } => {
            if content.trim().is_empty() {
                return Err(ApiError::bad_input(format!("doc{index} has no content")));
            }
            Ok(Part::Text(format!("Document {index}:\n{content}")))
        }
        CompareSide::Image { data, mime_type } => intake::to_part(&DocumentPayload {
            data: data.clone(),
            mime_type: mime_type.clone(),
        }),
    }
}
