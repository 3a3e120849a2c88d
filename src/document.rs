//! Local document intake for document Q&A.

use crate::{Error, ErrorContext, Result};
use std::path::Path;

const SUPPORTED_EXTENSIONS: &[&str] = &["txt", "md", "json", "csv", "xml", "html", "css", "js"];

const SUPPORTED_MIME_TYPES: &[&str] = &[
    "text/plain",
    "text/markdown",
    "text/csv",
    "application/json",
    "application/xml",
    "text/html",
    "text/css",
    "text/javascript",
    "application/javascript",
];

/// A text document ready to be queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub content: String,
}

impl Document {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Whether a file name or MIME type denotes a text format we can read.
    pub fn is_supported(file_name: &str, mime_type: Option<&str>) -> bool {
        let by_mime = mime_type
            .map(|m| {
                let m = m.trim().to_ascii_lowercase();
                SUPPORTED_MIME_TYPES.iter().any(|s| *s == m)
            })
            .unwrap_or(false);
        let by_extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                let e = e.to_ascii_lowercase();
                SUPPORTED_EXTENSIONS.iter().any(|s| *s == e)
            })
            .unwrap_or(false);
        by_mime || by_extension
    }

    /// Read a supported, non-empty UTF-8 file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        if !Self::is_supported(&name, None) {
            return Err(Error::validation_with_context(
                "unsupported document type",
                ErrorContext::new()
                    .with_field_path("document.name")
                    .with_details(format!(
                        "{} (supported: {})",
                        name,
                        SUPPORTED_EXTENSIONS.join(", ")
                    ))
                    .with_source("document_loader"),
            ));
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Err(Error::validation_with_context(
                "document is empty",
                ErrorContext::new()
                    .with_field_path("document.content")
                    .with_details(name)
                    .with_source("document_loader"),
            ));
        }

        Ok(Self { name, content })
    }
}
