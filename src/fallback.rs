//! Deterministic text returned in place of a model answer.
//!
//! Chat personas pick a template with [`Topic::classify`], a keyword heuristic
//! over the user's text. It is approximate on purpose: "network" contains
//! "work" and lands on the projects template, and that is acceptable for a
//! message whose real job is telling the reader how to enable the model.

use crate::config::CREDENTIAL_ENV;
use crate::error_class::FailureClass;
use crate::persona::Audience;
use crate::profile::Profile;

/// Substituted when the model returns an empty answer.
pub const EMPTY_ANSWER: &str = "I apologize, but I couldn't process that request.";

/// Coarse subject of a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Experience,
    Skills,
    Projects,
    Contact,
    General,
}

const TOPIC_KEYWORDS: [(Topic, &[&str]); 4] = [
    (Topic::Experience, &["experience", "background", "career"]),
    (Topic::Skills, &["skill", "tech", "technology"]),
    (Topic::Projects, &["project", "work", "build"]),
    (Topic::Contact, &["contact", "email", "reach"]),
];

impl Topic {
    /// First topic whose keyword appears anywhere in the lowercased text.
    pub fn classify(text: &str) -> Topic {
        let lower = text.to_lowercase();
        TOPIC_KEYWORDS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            .map(|(topic, _)| *topic)
            .unwrap_or(Topic::General)
    }
}

fn setup_steps() -> String {
    format!(
        "To enable full AI responses, please:\n\
         1. Get a free API key from https://chutes.ai\n\
         2. Add {CREDENTIAL_ENV}=your_api_key_here to a .env.local file in the project root\n\
         3. Restart the gateway"
    )
}

/// Offline answer for the chat personas.
pub fn chat_fallback(topic: Topic, profile: &Profile) -> String {
    let name = &profile.owner_name;
    match topic {
        Topic::Experience => format!(
            "Hi! I'm {name}'s AI assistant. I'd love to tell you about their experience, but I need to be properly configured first.\n\n{}\n\nFor now, here's a quick overview: {}",
            setup_steps(),
            profile.experience_summary
        ),
        Topic::Skills => format!(
            "I'd be happy to discuss {name}'s technical skills! However, I need to be properly configured first.\n\n{}\n\n{}",
            setup_steps(),
            profile.skills_summary
        ),
        Topic::Projects => format!(
            "I'd love to tell you about {name}'s projects! But first, I need to be properly configured.\n\n{}\n\n{}",
            setup_steps(),
            profile.projects_summary
        ),
        Topic::Contact => format!(
            "{}\n\nFor the full AI experience with personalized responses, please set {CREDENTIAL_ENV} as described in the setup guide.",
            profile.contact
        ),
        Topic::General => format!(
            "Hi! I'm {name}'s AI assistant. I'd love to help you, but I need to be properly configured first.\n\n{}\n\nOnce configured, I'll be able to provide detailed, personalized answers about {name}'s experience, skills, projects, and career journey!",
            setup_steps()
        ),
    }
}

/// Offline answer for contact inquiries: the keyword template plus a line
/// aimed at the audience.
pub fn inquiry_fallback(inquiry: &str, audience: Audience, profile: &Profile) -> String {
    let name = &profile.owner_name;
    let closing = match audience {
        Audience::Recruiter => {
            format!("Hiring? {name} is open to software engineering roles and happy to share a resume.")
        }
        Audience::Student => {
            format!("Fellow student? {name} is always glad to share study tips and internship advice.")
        }
        Audience::Collaborator => format!(
            "Interested in building something together? {name} enjoys collaborating on AI and full-stack projects."
        ),
        Audience::General => {
            "For anything else, the contact details on this site are the quickest way to get in touch.".to_string()
        }
    };
    format!(
        "{}\n\n{}",
        chat_fallback(Topic::classify(inquiry), profile),
        closing
    )
}

pub fn document_unconfigured(document_name: &str) -> String {
    format!(
        "I'd love to analyze the document \"{document_name}\" for you, but I need to be properly configured first.\n\n{}\n\nFor now, I can tell you that this appears to be a document analysis request, but I need the API key to provide detailed insights.",
        setup_steps()
    )
}

pub fn document_empty(document_name: &str) -> String {
    format!(
        "I couldn't analyze the document \"{document_name}\" because it appears to be empty. Please check the document content and try again."
    )
}

pub fn document_too_large(document_name: &str, chars: usize) -> String {
    format!(
        "I couldn't analyze the document \"{document_name}\" because it's extremely large ({}KB). Please try with a smaller document or split it into smaller sections.",
        kilobytes(chars)
    )
}

/// Appended to a document answer when only a prefix was sent.
pub fn truncation_note(analyzed_chars: usize) -> String {
    format!(
        "Note: This analysis is based on the first {}KB of the document. For a complete analysis of very large documents, consider splitting them into smaller sections.",
        kilobytes(analyzed_chars)
    )
}

/// Status-specific explanation for a failed document query.
pub fn document_failure(document_name: &str, class: FailureClass) -> String {
    match class {
        FailureClass::InvalidCredential => format!(
            "I couldn't analyze the document \"{document_name}\" because the API key is invalid or expired. Please check your Chutes AI API key and make sure it's correct."
        ),
        FailureClass::RateLimited => format!(
            "I couldn't analyze the document \"{document_name}\" because the API rate limit has been exceeded. Please try again in a few minutes."
        ),
        FailureClass::ServerError => format!(
            "I encountered a server error while analyzing the document \"{document_name}\". This is likely a temporary issue. Please try again in a few minutes."
        ),
        FailureClass::Connectivity => format!(
            "I couldn't connect to the AI service while analyzing the document \"{document_name}\". Please check your internet connection and try again."
        ),
        FailureClass::MalformedResponse | FailureClass::Other => format!(
            "I encountered an error while analyzing the document \"{document_name}\". Please check the gateway logs for more details and try again. If the problem persists, verify your API key is correct."
        ),
    }
}

fn kilobytes(chars: usize) -> usize {
    (chars + 500) / 1000
}
