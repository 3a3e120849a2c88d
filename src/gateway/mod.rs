//! The chat gateway: persona operations over one completion endpoint.
//!
//! Every public operation returns plain text and never an error. Failures are
//! logged with their [`crate::error_class::FailureClass`] and replaced by
//! fallback text.

mod builder;
mod core;
mod document_qa;
mod probe;

pub use builder::ChatGatewayBuilder;
pub use self::core::ChatGateway;
pub use document_qa::{DOCUMENT_ANALYSIS_LIMIT_CHARS, DOCUMENT_HARD_LIMIT_CHARS};
pub use probe::ProbeReport;
