//! Crate-level error type for a whole query.

use thiserror::Error;

use crate::hir::ResolveError;
use crate::ide::TargetParseError;
use crate::project::CollaboratorError;

/// Any error that aborts a query.
///
/// Render errors are not part of it: they are reported per line and the
/// remaining results still print.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error(transparent)]
    Target(#[from] TargetParseError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

impl QueryError {
    /// Process exit status for a fatal query error.
    pub const EXIT_CODE: i32 = 2;
}
