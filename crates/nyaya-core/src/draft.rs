//! The interview-then-generate flow for drafting a legal document.
//!
//! The server keeps no session store: the full session context (document
//! type, template, accumulated turns) lives with the client and is rebuilt
//! from each request, then threaded through the orchestrator.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::types::{serialize_turns, Role, Turn};

/// Fixed marker the model is instructed to emit once the interview has
/// gathered everything. Detection is substring containment, never full
/// equality — surrounding prose still counts. This is a known-fragile
/// contract with the model's phrasing; it is centralized here.
pub const SENTINEL_PREFIX: &str = "✅ All required info has been collected";

/// The full readiness phrase for a document type, exactly as dictated to
/// the model in the interview prompts.
pub fn readiness_sentinel(doc_type: &str) -> String {
    format!("{SENTINEL_PREFIX}. You can now generate your {doc_type}.")
}

pub fn contains_sentinel(text: &str) -> bool {
    text.contains(SENTINEL_PREFIX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftPhase {
    SelectingType,
    TemplateAndFirstQuestion,
    Interviewing,
    ReadyToFinalize,
    Finalized,
    /// Demo path: a fully fabricated specimen, bypassing the interview.
    RandomDemoGenerated,
}

/// One draft-generation session. Owned by a single client; passed by value
/// on every call.
#[derive(Debug, Clone)]
pub struct DraftSession {
    doc_type: String,
    template: String,
    turns: Vec<Turn>,
    phase: DraftPhase,
}

impl DraftSession {
    pub fn new(doc_type: impl Into<String>) -> Result<Self, ApiError> {
        let doc_type = doc_type.into();
        if doc_type.trim().is_empty() {
            return Err(ApiError::bad_input("docType required"));
        }
        Ok(Self {
            doc_type,
            template: String::new(),
            turns: Vec::new(),
            phase: DraftPhase::SelectingType,
        })
    }

    /// Rebuild a session from a request: the document type plus the turns
    /// the client accumulated so far. Readiness is re-derived from the
    /// turns themselves, so a client cannot skip the sentinel.
    pub fn resume(doc_type: impl Into<String>, turns: Vec<Turn>) -> Result<Self, ApiError> {
        let mut session = Self::new(doc_type)?;
        if turns.is_empty() {
            return Ok(session);
        }
        session.phase = DraftPhase::Interviewing;
        for turn in turns {
            let ready = turn.role == Role::Assistant && contains_sentinel(&turn.text);
            session.turns.push(turn);
            if ready {
                session.phase = DraftPhase::ReadyToFinalize;
            }
        }
        Ok(session)
    }

    pub fn doc_type(&self) -> &str {
        &self.doc_type
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn phase(&self) -> DraftPhase {
        self.phase
    }

    pub fn is_ready(&self) -> bool {
        self.phase == DraftPhase::ReadyToFinalize
    }

    /// Record the one-time structural template and the first interview
    /// question. The template is produced once and never regenerated; the
    /// first question lands as the opening assistant turn and the
    /// interview starts immediately.
    pub fn begin(&mut self, template: String, first_question: String) -> Result<(), ApiError> {
        if self.phase != DraftPhase::SelectingType {
            return Err(ApiError::bad_input("draft already started"));
        }
        self.template = template;
        self.phase = DraftPhase::TemplateAndFirstQuestion;
        self.turns.push(Turn::assistant(first_question));
        self.phase = DraftPhase::Interviewing;
        Ok(())
    }

    pub fn push_user_reply(&mut self, text: impl Into<String>) -> Result<(), ApiError> {
        if self.phase != DraftPhase::Interviewing {
            return Err(ApiError::bad_input("interview is not in progress"));
        }
        self.turns.push(Turn::user(text));
        Ok(())
    }

    /// Append the model's reply verbatim, whether it is the next question
    /// or the readiness phrase. Sentinel containment — not equality —
    /// decides the transition; once ready, all prior turns freeze as
    /// input context.
    pub fn push_assistant(&mut self, text: impl Into<String>) -> Result<(), ApiError> {
        if self.phase != DraftPhase::Interviewing {
            return Err(ApiError::bad_input("interview is not in progress"));
        }
        let text = text.into();
        let ready = contains_sentinel(&text);
        self.turns.push(Turn::assistant(text));
        if ready {
            self.phase = DraftPhase::ReadyToFinalize;
        }
        Ok(())
    }

    /// Close the session after final generation. No further turns accepted.
    pub fn mark_finalized(&mut self) -> Result<(), ApiError> {
        if self.phase != DraftPhase::ReadyToFinalize {
            return Err(ApiError::bad_input("interview is not complete"));
        }
        self.phase = DraftPhase::Finalized;
        Ok(())
    }

    /// Demo path, only legal before the interview starts.
    pub fn mark_random_demo(&mut self) -> Result<(), ApiError> {
        if self.phase != DraftPhase::SelectingType {
            return Err(ApiError::bad_input("draft already started"));
        }
        self.phase = DraftPhase::RandomDemoGenerated;
        Ok(())
    }

    /// The full turn history as one text block for the next model call.
    pub fn conversation(&self) -> String {
        serialize_turns(&self.turns)
    }
}
