//! # chat-gateway
//!
//! Persona-driven chat gateway for a portfolio site.
//!
//! ## Overview
//!
//! The gateway turns a caller's intent (a persona plus user text, optionally a
//! document) into one request against an OpenAI-compatible
//! `chat/completions` endpoint, and always hands back plain text:
//!
//! - **Personas**: career story, code tutor, tech discussion, contact
//!   inquiries per audience, a general assistant, and document Q&A
//! - **Degraded mode**: without a credential, or when a call fails, callers get
//!   deterministic fallback text instead of an error
//! - **Sanitized output**: stray markdown is stripped from model answers
//! - **Injected configuration**: the credential is read once at startup and
//!   passed in through [`GatewayConfig`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chat_gateway::{Audience, ChatGateway, GatewayConfig};
//!
//! #[tokio::main]
//! async fn main() -> chat_gateway::Result<()> {
//!     let gateway = ChatGateway::builder()
//!         .config(GatewayConfig::from_env())
//!         .build()?;
//!
//!     println!("{}", gateway.tell_career_story("Where did you intern?").await);
//!     println!("{}", gateway.handle_inquiry("Are you hiring-ready?", Audience::Recruiter).await);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`gateway`] | The gateway, its builder, document Q&A and the credential probe |
//! | [`persona`] | Persona and audience enums mapped to system prompts |
//! | [`fallback`] | Keyword classifier and canned degraded responses |
//! | [`sanitize`] | Idempotent markup stripper for model output |
//! | [`config`] | Environment-backed configuration and the redacted credential |
//! | [`profile`] | Portfolio owner facts quoted by personas |
//! | [`document`] | Local text document intake |
//! | [`transport`] | HTTP transport and the seam used by tests |
//! | [`types`] | Messages and completion wire types |

pub mod config;
pub mod document;
pub mod error_class;
pub mod fallback;
pub mod gateway;
pub mod persona;
pub mod profile;
pub mod sanitize;
pub mod transport;
pub mod types;

pub use config::{Credential, GatewayConfig};
pub use document::Document;
pub use gateway::{ChatGateway, ChatGatewayBuilder, ProbeReport};
pub use persona::{Audience, Persona};
pub use profile::Profile;
pub use sanitize::sanitize;
pub use types::message::{Message, MessageRole};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
