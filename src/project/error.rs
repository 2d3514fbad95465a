//! Errors raised by external collaborators.

use thiserror::Error;

/// A package lister or front-end failure. Always fatal to the query.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// The lister executable is not on PATH.
    #[error("could not find the '{program}' tool in PATH")]
    ToolNotFound { program: String },

    /// The lister ran but rejected the patterns.
    #[error("{0}")]
    ListFailed(String),

    /// IO error while talking to a collaborator.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A requested package is missing from the loaded program.
    #[error("package '{0}' is not part of the loaded program")]
    UnknownPackage(String),

    /// A requested package has errors and errors are not allowed.
    #[error("package '{package}' had errors:\n  {}", .errors.join("\n  "))]
    PackageErrors {
        package: String,
        errors: Vec<String>,
    },

    /// The program model itself could not be loaded.
    #[error("failed to load program model: {0}")]
    Model(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl CollaboratorError {
    /// Wrap a front-end specific error.
    pub fn model(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Model(Box::new(error))
    }
}
