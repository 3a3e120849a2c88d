//! Integration tests against a mock HTTP completion endpoint.

mod document_qa;
mod error_handling;
mod mock_server;
mod personas;
mod probe;
