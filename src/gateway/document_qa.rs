use super::core::ChatGateway;
use crate::document::Document;
use crate::fallback;
use crate::persona::Persona;
use tracing::{info, warn};

/// Documents longer than this are rejected outright.
pub const DOCUMENT_HARD_LIMIT_CHARS: usize = 5_000_000;

/// Only this many leading characters are sent for analysis.
pub const DOCUMENT_ANALYSIS_LIMIT_CHARS: usize = 32_000;

impl ChatGateway {
    /// Answer `question` using only `document_content`.
    ///
    /// Empty and oversized documents are rejected without a network call.
    /// Documents above [`DOCUMENT_ANALYSIS_LIMIT_CHARS`] are truncated and the
    /// answer ends with a note saying so. Failures produce status-specific
    /// explanations rather than the generic chat fallback.
    pub async fn rag_query(&self, document_content: &str, document_name: &str, question: &str) -> String {
        if document_content.trim().is_empty() {
            warn!(document = document_name, "document content is empty");
            return fallback::document_empty(document_name);
        }

        if exceeds_chars(document_content, DOCUMENT_HARD_LIMIT_CHARS) {
            let chars = document_content.chars().count();
            warn!(document = document_name, chars, "document too large for analysis");
            return fallback::document_too_large(document_name, chars);
        }

        let Some(credential) = self.credential.as_ref() else {
            warn!(document = document_name, "no credential configured for document query");
            return fallback::document_unconfigured(document_name);
        };

        let analyzed = prefix_chars(document_content, DOCUMENT_ANALYSIS_LIMIT_CHARS);
        let truncated = analyzed.len() < document_content.len();
        if truncated {
            info!(
                document = document_name,
                original_bytes = document_content.len(),
                analyzed_bytes = analyzed.len(),
                "document truncated for analysis"
            );
        }

        let persona = Persona::DocumentQa {
            document_name: document_name.to_string(),
        };
        let system = persona.system_prompt(&self.profile);
        let user = format!(
            "Document: \"{document_name}\"\n\nContent:\n{analyzed}\n\nQuestion: {question}\n\nPlease provide a detailed answer based solely on the document content above."
        );
        let request = self.build_request(&persona, system, &[], user);

        match self.dispatch(&persona, &request, credential).await {
            Ok(text) if truncated => format!(
                "{}\n\n{}",
                text,
                fallback::truncation_note(DOCUMENT_ANALYSIS_LIMIT_CHARS)
            ),
            Ok(text) => text,
            Err(err) => {
                warn!(
                    document = document_name,
                    question_len = question.len(),
                    content_len = document_content.len(),
                    class = %err.class(),
                    error = %err,
                    "document query failed"
                );
                fallback::document_failure(document_name, err.class())
            }
        }
    }

    /// [`ChatGateway::rag_query`] over a loaded [`Document`].
    pub async fn ask_document(&self, document: &Document, question: &str) -> String {
        self.rag_query(&document.content, &document.name, question)
            .await
    }
}

fn exceeds_chars(text: &str, limit: usize) -> bool {
    // A char is at least one byte, so short byte lengths settle it early.
    text.len() > limit && text.chars().count() > limit
}

fn prefix_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
