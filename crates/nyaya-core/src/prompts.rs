//! Fixed instruction text for each operation. The contract with the model
//! lives in these strings; callers never modify the completion that comes
//! back.

use crate::draft::readiness_sentinel;
use crate::types::Turn;

/// The seven categories the summarizer must classify a document into.
pub const DOCUMENT_CATEGORIES: &[&str] = &[
    "Personal Legal Document",
    "Property & Real Estate Document",
    "Business & Commercial Document",
    "Court & Litigation Document",
    "Taxation & Financial Document",
    "Intellectual Property Document",
    "Government & Regulatory Document",
];

pub fn summarize() -> String {
    let categories = DOCUMENT_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {}", i + 1, c))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "You are an expert in Indian legal documents. Analyze the attached document and \
         produce a clear, detailed explanation in simple language.\n\n\
         Step 1: Classify the document into one of the following categories:\n{categories}\n\n\
         Step 2: Explain its meaning, context and importance in paragraphs, using bullet \
         points for key details (parties, dates, amounts, issuing authority, rights and \
         obligations).\n\n\
         Step 3: Begin with: \"This document is a [TYPE]\".\n\n\
         Step 4: End with a short concluding note: \"In short, this document serves as...\". \
         Keep it readable for a non-lawyer."
    )
}

pub fn detect_issues() -> &'static str {
    "You are a legal assistant AI analyzing Indian legal documents. Carefully read the \
     attached document, identify its type, then scan for potential risks and issues and \
     present them so a non-lawyer can understand.\n\n\
     Rank each risk by severity and impact:\n\
     🔴 High Risk: critical clauses that can cause financial or legal harm.\n\
     🟡 Medium Risk: potentially unfair but negotiable clauses.\n\
     🟢 Low Risk: minor inconveniences or small fees.\n\n\
     Explain every risk in simple language — what it means and how it could affect the \
     person. Finish with an overall fairness map, e.g. \"This contract is 60% fair, 25% \
     medium risk, 15% high risk.\""
}

pub fn chat_turn(question: &str, history: &[Turn]) -> String {
    let history_json = serde_json::to_string(history).unwrap_or_default();
    format!(
        "Answer this question as an Indian Legal Assistant about the attached document: \
         {question}\n\n\
         Answer as a chatbot with short messages and text only (no markdown, tags or \
         symbols).\n\
         Chat history: {history_json}"
    )
}

pub fn compare() -> &'static str {
    "You are a legal assistant AI. Compare two legal documents and provide the differences \
     in a structured format. Follow this exact structure in every response:\n\n\
     1. Document Type:\n\
        - Document A: [type]\n\
        - Document B: [type]\n\
        - Comparison Note: [e.g. \"Both are contracts\" or \"Different legal types\"]\n\n\
     2. Overall Similarity:\n\
        - [State if they are identical, mostly similar, or completely different]\n\n\
     3. Key Differences (list category by category):\n\
        - Parties Involved: [difference or \"Same\"]\n\
        - Dates & Duration: [difference or \"Same\"]\n\
        - Obligations & Duties: [difference or \"Same\"]\n\
        - Rights Granted: [difference or \"Same\"]\n\
        - Restrictions / Limitations: [difference or \"Same\"]\n\
        - Payment Terms: [difference or \"Same\"]\n\
        - Termination Clauses: [difference or \"Same\"]\n\
        - Liabilities & Indemnities: [difference or \"Same\"]\n\
        - Dispute Resolution: [difference or \"Same\"]\n\
        - Confidentiality: [difference or \"Same\"]\n\n\
     4. Practical Legal Impact:\n\
        - [Explain how the differences could affect the parties in plain English]\n\n\
     Make sure the output strictly follows this format every time."
}

pub fn template(doc_type: &str) -> String {
    format!(
        "You are a legal expert in Indian law.\n\
         Create a clean, professional template for a {doc_type}.\n\
         Show placeholders like [NAME], [ADDRESS], [DATE].\n\
         Do not fill them, just show the structure."
    )
}

pub fn interview_start(doc_type: &str) -> String {
    format!(
        "You are a legal expert in Indian law.\n\
         I want to create a {doc_type}.\n\
         Based on placeholders in the template, ask one question at a time \
         (e.g. \"What is your name?\").\n\
         Do NOT generate the final document yet.\n\
         When all info is gathered, say exactly:\n\
         \"{}\"",
        readiness_sentinel(doc_type)
    )
}

pub fn interview_next(doc_type: &str, conversation: &str) -> String {
    format!(
        "Document type: {doc_type}\n\n\
         Conversation so far:\n{conversation}\n\n\
         Rules:\n\
         - If more info is missing, ask ONLY the next specific question.\n\
         - Keep questions short and clear (\"What is your address?\").\n\
         - Do NOT generate the final document yet.\n\
         - When ALL placeholders are filled, say exactly:\n  \"{}\"",
        readiness_sentinel(doc_type)
    )
}

pub fn finalize(doc_type: &str, conversation: &str) -> String {
    format!(
        "Document type: {doc_type}\n\
         Conversation so far:\n{conversation}\n\n\
         Now generate the full and final {doc_type} using the collected details.\n\
         Write it as a proper legal document."
    )
}

pub fn random_demo(doc_type: &str) -> String {
    format!(
        "You are a legal expert in Indian law.\n\
         Generate a fully filled {doc_type} using random but realistic details \
         (fake names, addresses, dates, numbers).\n\
         Ensure it looks like a proper legal document but is only for demo purposes."
    )
}
