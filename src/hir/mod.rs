//! High-level IR (HIR): the resolved program model.
//!
//! This module holds what a compiler front-end hands over after type
//! checking: symbols with identity, types, per-package scopes and the
//! definition/use occurrence lists. Everything is read-only once built.
//!
//! ## Key Types
//!
//! - [`Program`] - The loaded, immutable program model
//! - [`ProgramBuilder`] - How front-end adapters construct a `Program`
//! - [`SymbolId`] - Identity of one resolved declaration
//! - [`Symbol`] - A declaration: type, func, var, field, ...
//! - [`TypeKind`] - Type descriptors, with identity via [`Program::identical`]
//! - [`Resolver`] - Dotted target → symbol
//!
//! ## Layers
//!
//! ```text
//! ProgramBuilder            ← front-end adapter input
//!     │
//!     ▼
//! Program                   ← symbols, types, packages, occurrences
//!     │
//!     ├── identical(a, b)            type identity
//!     ├── lookup_field_or_method     member lookup with promotion
//!     ▼
//! Resolver::resolve         ← package.Name.member... → SymbolId
//! ```

mod builder;
mod ids;
mod lookup;
mod program;
mod resolve;
mod symbols;
mod types;

pub use builder::ProgramBuilder;
pub use ids::{PackageId, SymbolId, TypeId};
pub use lookup::LookupResult;
pub use program::{Occurrence, OccurrenceKind, Package, Program, SourceFile, SourceFiles};
pub use resolve::{ResolveError, Resolver};
pub use symbols::{Symbol, SymbolKind, is_exported};
pub use types::{ChanDir, Signature, TypeKind};
