//! # symsearch
//!
//! Type-aware symbol search and usage ranking over a resolved program model.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! ide          → Queries: target paths, occurrence search, usage ranking
//!   ↓
//! interchange  → JSON program-model documents (feature `interchange`)
//!   ↓
//! project      → Collaborators: package lister, front-end, load options
//!   ↓
//! hir          → Resolved program: symbols, types, lookup, resolver
//!   ↓
//! base         → Primitives (FileId, LineCol, SourceSpan, TextSize)
//! ```

// ============================================================================
// MODULES (dependency order: base → hir → project → interchange → ide)
// ============================================================================

/// Foundation types: FileId, LineIndex, SourceSpan
pub mod base;

/// Resolved program model, member lookup and target resolution
pub mod hir;

/// Package listing and program loading
pub mod project;

/// Program model documents: JSON
#[cfg(feature = "interchange")]
pub mod interchange;

/// Query features: search, rank, render
pub mod ide;

/// Query-level error type
pub mod error;

// Re-export foundation types
pub use base::{FileId, LineCol, LineIndex, SourceSpan, TextSize};
pub use error::QueryError;
