use crate::config::Credential;
use crate::fallback::{self, Topic};
use crate::persona::{Audience, Persona};
use crate::profile::Profile;
use crate::sanitize::sanitize;
use crate::transport::CompletionTransport;
use crate::types::{CompletionRequest, Message};
use crate::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// Persona-driven gateway to the completion endpoint.
///
/// Cheap to clone and safe to share across tasks; nothing inside is mutated
/// after construction.
#[derive(Clone)]
pub struct ChatGateway {
    pub(crate) transport: Arc<dyn CompletionTransport>,
    pub(crate) credential: Option<Credential>,
    pub(crate) model: String,
    pub(crate) profile: Arc<Profile>,
}

impl ChatGateway {
    pub fn builder() -> super::ChatGatewayBuilder {
        super::ChatGatewayBuilder::new()
    }

    /// Build a gateway from process environment configuration.
    pub fn from_env() -> Result<Self> {
        Self::builder()
            .config(crate::config::GatewayConfig::from_env())
            .build()
    }

    /// Whether a credential is present. Without one every call degrades.
    pub fn is_configured(&self) -> bool {
        self.credential.is_some()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Answer a question about the owner's background.
    pub async fn tell_career_story(&self, question: &str) -> String {
        self.answer(Persona::CareerStory, None, &[], question.to_string())
            .await
    }

    /// Explain a code snippet, optionally answering a specific question about it.
    pub async fn explain_code(&self, code: &str, language: &str, question: Option<&str>) -> String {
        let user = match question.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => format!(
                "Explain this {language} code and answer: \"{q}\"\n\nCode:\n{code}"
            ),
            None => format!(
                "Explain this {language} code in a clear, educational way. Highlight any advanced techniques or best practices used:\n\nCode:\n{code}"
            ),
        };
        self.answer(Persona::CodeTutor, None, &[], user).await
    }

    pub async fn discuss_tech(&self, question: &str) -> String {
        self.answer(Persona::TechDiscussion, None, &[], question.to_string())
            .await
    }

    /// Route a contact inquiry through the prompt for its audience.
    pub async fn handle_inquiry(&self, inquiry: &str, audience: Audience) -> String {
        let persona = Persona::Inquiry(audience);
        let system = persona.system_prompt(&self.profile);
        let request = self.build_request(&persona, system, &[], inquiry.to_string());
        self.complete_or(&persona, request, || {
            fallback::inquiry_fallback(inquiry, audience, &self.profile)
        })
        .await
    }

    /// General assistant. `context` replaces the default system prompt.
    pub async fn chat(&self, message: &str, context: Option<&str>) -> String {
        self.answer(Persona::General, context, &[], message.to_string())
            .await
    }

    /// General assistant with caller-held history.
    ///
    /// System entries in `history` are dropped so the request keeps a single
    /// leading system message.
    pub async fn converse(&self, history: &[Message], message: &str, context: Option<&str>) -> String {
        self.answer(Persona::General, context, history, message.to_string())
            .await
    }

    async fn answer(
        &self,
        persona: Persona,
        system_override: Option<&str>,
        history: &[Message],
        user: String,
    ) -> String {
        let system = match system_override.filter(|s| !s.trim().is_empty()) {
            Some(s) => s.to_string(),
            None => persona.system_prompt(&self.profile),
        };
        let request = self.build_request(&persona, system, history, user);
        let topic = Topic::classify(request.last_user_text());
        self.complete_or(&persona, request, || {
            fallback::chat_fallback(topic, &self.profile)
        })
        .await
    }

    pub(crate) fn build_request(
        &self,
        persona: &Persona,
        system: String,
        history: &[Message],
        user: String,
    ) -> CompletionRequest {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message::system(system));
        messages.extend(history.iter().filter(|m| !m.is_system()).cloned());
        messages.push(Message::user(user));

        CompletionRequest::new(self.model.clone(), messages)
            .max_tokens(persona.max_tokens())
            .temperature(persona.temperature())
    }

    /// Run `request` if a credential exists, else (or on any failure) return
    /// the fallback.
    async fn complete_or<F>(&self, persona: &Persona, request: CompletionRequest, fallback: F) -> String
    where
        F: FnOnce() -> String,
    {
        let Some(credential) = self.credential.as_ref() else {
            info!(persona = persona.name(), "no credential configured, using fallback response");
            return fallback();
        };
        match self.dispatch(persona, &request, credential).await {
            Ok(text) => text,
            Err(err) => {
                warn!(
                    persona = persona.name(),
                    class = %err.class(),
                    error = %err,
                    "completion failed, using fallback response"
                );
                fallback()
            }
        }
    }

    /// One network call; returns sanitized model text.
    pub(crate) async fn dispatch(
        &self,
        persona: &Persona,
        request: &CompletionRequest,
        credential: &Credential,
    ) -> Result<String> {
        debug_assert!(request.system_count() <= 1);
        info!(
            persona = persona.name(),
            model = %request.model,
            messages = request.messages.len(),
            max_tokens = request.max_tokens,
            temperature = request.temperature,
            credential = %credential.redacted(),
            "sending completion request"
        );

        let content = self.transport.complete(request, credential).await?;
        if content.trim().is_empty() {
            return Ok(fallback::EMPTY_ANSWER.to_string());
        }
        Ok(sanitize(&content))
    }
}

impl std::fmt::Debug for ChatGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatGateway")
            .field("model", &self.model)
            .field("credential", &self.credential)
            .field("owner", &self.profile.owner_name)
            .finish()
    }
}
