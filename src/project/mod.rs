//! Project layer: the collaborators that feed the analysis.
//!
//! Package patterns are expanded by a [`PackageLister`]; the resulting
//! package paths are handed to a [`FrontEnd`] which produces a resolved
//! [`Program`](crate::hir::Program).
//!
//! ## Key Types
//!
//! - [`PackageLister`] / [`CommandLister`] - pattern expansion via `go list`
//! - [`FrontEnd`] / [`StaticFrontEnd`] - program loading
//! - [`LoadOptions`] - test-file and error-package policy
//! - [`CollaboratorError`] - fatal collaborator failures

mod error;
mod front_end;
mod lister;

pub use error::CollaboratorError;
pub use front_end::{FrontEnd, LoadOptions, StaticFrontEnd, finish_load};
pub use lister::{CommandLister, PackageLister};
