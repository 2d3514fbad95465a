//! Program model interchange.
//!
//! Front-ends that run out of process hand the resolved program over as a
//! JSON [`ProgramDocument`]. [`load_program`] validates every cross
//! reference and produces a [`Program`](crate::hir::Program);
//! [`JsonFrontEnd`] plugs that into the [`FrontEnd`](crate::project::FrontEnd)
//! seam so the analysis never sees where the model came from.
//!
//! ```text
//! ┌──────────────────┐   from_json   ┌──────────────────┐  load_program  ┌─────────┐
//! │  program.json    │ ────────────▶ │ ProgramDocument  │ ─────────────▶ │ Program │
//! └──────────────────┘               └──────────────────┘                └─────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use symsearch::interchange::JsonFrontEnd;
//! use symsearch::project::{FrontEnd, LoadOptions};
//!
//! let front_end = JsonFrontEnd::new("program.json");
//! let program = front_end.load(&["net/http".to_string()], LoadOptions::default())?;
//! ```

mod document;
mod error;
mod load;

pub use document::{
    ChanDirDocument, FileDocument, OccurrenceDocument, PackageDocument, ProgramDocument,
    SymbolDocument, SymbolKindDocument, TypeDocument,
};
pub use error::InterchangeError;
pub use load::{JsonFrontEnd, load_program, load_program_from_path};
