//! Core data types exchanged with the completion endpoint.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Message`] | Chat message with role and plain-text content |
//! | [`MessageRole`] | `system`, `user` or `assistant` |
//! | [`CompletionRequest`] | Non-streaming request body |
//! | [`CompletionResponse`] | Success body, read only as far as the first choice |
//!
//! ## Example
//!
//! ```rust
//! use chat_gateway::types::{CompletionRequest, Message};
//!
//! let request = CompletionRequest::new(
//!     "deepseek-ai/DeepSeek-V3-0324",
//!     vec![Message::system("Be brief."), Message::user("Hi")],
//! )
//! .max_tokens(100)
//! .temperature(0.7);
//! assert!(!request.stream);
//! ```

pub mod completion;
pub mod message;

pub use completion::{Choice, ChoiceMessage, CompletionRequest, CompletionResponse};
pub use message::{Message, MessageRole};
