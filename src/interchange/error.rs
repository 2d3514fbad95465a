//! Error types for program model documents.

use thiserror::Error;

/// Errors that can occur while reading a program model document.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(String),

    /// IO error during read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An id that names no entry of the document.
    #[error("Unresolved reference: {0}")]
    UnresolvedReference(String),

    /// Structurally well-formed JSON describing an inconsistent program.
    #[error("Invalid {kind}: {message}")]
    Invalid { kind: &'static str, message: String },
}

impl InterchangeError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create an unresolved reference error, e.g. `unresolved("symbol", 7, "package net scope")`.
    pub fn unresolved(kind: &str, id: u32, context: impl std::fmt::Display) -> Self {
        Self::UnresolvedReference(format!("{kind} #{id} referenced by {context}"))
    }

    /// Create an invalid package error.
    pub fn invalid_package(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "package",
            message: message.into(),
        }
    }

    /// Create an invalid type error.
    pub fn invalid_type(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "type",
            message: message.into(),
        }
    }

    /// Create an invalid symbol error.
    pub fn invalid_symbol(message: impl Into<String>) -> Self {
        Self::Invalid {
            kind: "symbol",
            message: message.into(),
        }
    }
}
