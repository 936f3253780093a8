//! Error types for the post client.
//!
//! # Design
//! Display strings double as the user-facing notice text, so each variant
//! renders exactly the message the workflow shows for that failure path.
//! Variants are split by operation (load/create/delete) rather than by
//! transport detail because notice wording differs per operation, not per
//! status code.

use std::fmt;

/// Input field named by a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

impl Field {
    fn message(self) -> &'static str {
        match self {
            Field::Title => "Title cannot be empty",
            Field::Content => "Content cannot be empty",
        }
    }
}

/// Errors produced by `PostClient` and surfaced through the notice board.
#[derive(Debug)]
pub enum ClientError {
    /// A blank input field, caught before any request is built.
    Validation { field: Field },

    /// The list endpoint returned a non-success status. The body is not
    /// inspected on this path.
    Load { status: u16 },

    /// Create or update returned a non-success status; `message` carries the
    /// server's `{"error": …}` text when present, otherwise a generic one.
    Api { status: u16, message: String },

    /// Delete returned a non-success status.
    Delete { status: u16 },

    /// The request never completed (DNS failure, refused connection, I/O).
    Transport(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// A success response body could not be deserialized into the expected
    /// type.
    Deserialization(String),
}

impl ClientError {
    pub(crate) fn validation(field: Field) -> Self {
        ClientError::Validation { field }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Validation { field } => f.write_str(field.message()),
            ClientError::Load { .. } => f.write_str("Error loading posts"),
            ClientError::Api { message, .. } => f.write_str(message),
            ClientError::Delete { .. } => f.write_str("Error deleting post"),
            ClientError::Transport(msg) => write!(f, "Request failed: {msg}"),
            ClientError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ClientError::Deserialization(_) => f.write_str("Malformed response from server"),
        }
    }
}

impl std::error::Error for ClientError {}
