//! Personas: one fixed system prompt, token budget and temperature per
//! gateway operation.

use crate::profile::Profile;
use std::fmt;
use std::str::FromStr;

const PLAIN_TEXT_RULE: &str = "IMPORTANT: Respond in plain text only. Do not use any markdown formatting like **, ###, or bullet points. Write in a conversational, natural way.";

/// Who is asking, for contact inquiries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Audience {
    Recruiter,
    Student,
    Collaborator,
    General,
}

impl Audience {
    pub const ALL: [Audience; 4] = [
        Audience::Recruiter,
        Audience::Student,
        Audience::Collaborator,
        Audience::General,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Audience::Recruiter => "recruiter",
            Audience::Student => "student",
            Audience::Collaborator => "collaborator",
            Audience::General => "general",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown audience '{0}' (expected recruiter, student, collaborator or general)")]
pub struct UnknownAudience(pub String);

impl FromStr for Audience {
    type Err = UnknownAudience;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recruiter" => Ok(Audience::Recruiter),
            "student" => Ok(Audience::Student),
            "collaborator" => Ok(Audience::Collaborator),
            "general" => Ok(Audience::General),
            _ => Err(UnknownAudience(s.to_string())),
        }
    }
}

/// The closed set of system prompts the gateway can send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Persona {
    CareerStory,
    CodeTutor,
    TechDiscussion,
    Inquiry(Audience),
    General,
    DocumentQa { document_name: String },
}

impl Persona {
    pub fn name(&self) -> &'static str {
        match self {
            Persona::CareerStory => "career_story",
            Persona::CodeTutor => "code_tutor",
            Persona::TechDiscussion => "tech_discussion",
            Persona::Inquiry(_) => "inquiry",
            Persona::General => "general",
            Persona::DocumentQa { .. } => "document_qa",
        }
    }

    pub fn max_tokens(&self) -> u32 {
        match self {
            Persona::CareerStory => 1200,
            Persona::CodeTutor | Persona::Inquiry(_) => 800,
            Persona::TechDiscussion | Persona::General => 1000,
            Persona::DocumentQa { .. } => 1500,
        }
    }

    /// Document answers run cooler to stay extractive.
    pub fn temperature(&self) -> f32 {
        match self {
            Persona::DocumentQa { .. } => 0.3,
            _ => 0.7,
        }
    }

    pub fn system_prompt(&self, profile: &Profile) -> String {
        let name = &profile.owner_name;
        let body = match self {
            Persona::CareerStory => format!(
                "You are {name}'s AI career assistant. You know about their experience:\n\n\
                 {bio}\n\n\
                 Answer questions about {name}'s background in a professional, engaging way that would impress recruiters.\n\
                 Be enthusiastic about their achievements and highlight their growth, leadership, and technical skills.",
                bio = profile.biography,
            ),
            Persona::CodeTutor => format!(
                "You are an expert programming tutor explaining {name}'s code.\n\
                 You should be encouraging, educational, and highlight {name}'s technical skills.\n\
                 Focus on explaining concepts clearly and mentioning advanced techniques used."
            ),
            Persona::TechDiscussion => format!(
                "You are {name}'s AI tech discussion partner. You know their expertise in:\n\
                 {expertise}\n\n\
                 Discuss current tech trends, best practices, and architectural decisions from {name}'s perspective.\n\
                 Show deep technical knowledge while being accessible. Reference their real experience when relevant.\n\
                 Be knowledgeable about cutting-edge developments in AI, web development, and software architecture.",
                expertise = profile.expertise,
            ),
            Persona::Inquiry(Audience::Recruiter) => format!(
                "You are {name}'s AI assistant helping recruiters. Focus on:\n\
                 - Their technical skills and project impact\n\
                 - Leadership experience and team collaboration\n\
                 - Readiness for software engineering roles\n\
                 - Their passion for AI/ML and innovation\n\
                 Be professional and highlight why they'd be a great hire."
            ),
            Persona::Inquiry(Audience::Student) => format!(
                "You are {name}'s AI assistant helping fellow students. Focus on:\n\
                 - Learning resources and study tips\n\
                 - How to get started with their tech stack\n\
                 - Advice on internships and skill development\n\
                 - Encouragement and mentorship\n\
                 Be supportive and educational."
            ),
            Persona::Inquiry(Audience::Collaborator) => format!(
                "You are {name}'s AI assistant for potential collaborators. Focus on:\n\
                 - Their project interests and capabilities\n\
                 - Open source contributions and teamwork\n\
                 - Technical challenges they enjoy solving\n\
                 - How to connect for projects\n\
                 Be collaborative and technical."
            ),
            Persona::Inquiry(Audience::General) => format!(
                "You are {name}'s AI assistant for general inquiries. Be helpful, professional, \
                 and route them to appropriate contact methods or information about their work."
            ),
            Persona::General => format!(
                "You are {name}'s AI assistant. Be helpful, professional, \
                 and knowledgeable about their work, skills, and background. \
                 Always be encouraging and highlight their strengths."
            ),
            Persona::DocumentQa { document_name } => format!(
                "You are an expert document analysis assistant. You have been given a document titled \"{document_name}\" \
                 and need to answer questions about it based ONLY on the content provided.\n\n\
                 Guidelines:\n\
                 - Only use information from the provided document content\n\
                 - If the answer isn't in the document, say so clearly\n\
                 - Provide specific quotes or references when possible\n\
                 - Be concise but comprehensive\n\
                 - If asked to summarize, focus on the most important points"
            ),
        };
        format!("{}\n\n{}", body, PLAIN_TEXT_RULE)
    }
}
