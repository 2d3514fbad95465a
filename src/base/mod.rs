//! Foundation types for the symsearch toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`FileId`] - Interned file identifiers
//! - [`TextSize`] - Byte offsets
//! - [`LineCol`], [`LineIndex`] - Line/column positions and line lookup
//! - [`SourceSpan`] - Location of one identifier occurrence
//!
//! This module has NO dependencies on other symsearch modules.

mod file_id;
mod position;
mod span;

pub use file_id::FileId;
pub use position::SourceSpan;
pub use span::{LineCol, LineIndex, TextSize};

// Re-export text-size types for convenience
pub use text_size;
