//! Query features: the two things a user asks of a loaded program.
//!
//! - **search**: where is this declaration used (or defined)?
//! - **rank**: which functions and methods are referenced least?
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: take the program in, return data out
//! 2. **Identity, not names**: every match compares `SymbolId`s
//! 3. **Skip, don't fail**: packages with errors contribute nothing
//!
//! ## Usage
//!
//! The recommended way to use this module is through `AnalysisHost`:
//!
//! ```ignore
//! use symsearch::ide::{AnalysisHost, SearchOptions};
//!
//! let host = AnalysisHost::new(program, vec!["net/http".to_string()]);
//! let uses = host.analysis().search("net.Listen", SearchOptions::default())?;
//! ```

mod analysis;
mod interfaces;
mod references;
mod render;
mod target;
mod usage;

pub use analysis::{Analysis, AnalysisHost, RankOptions, SearchOptions};
pub use interfaces::{InterfaceDescriptor, InterfaceIndex};
pub use references::{find_occurrences, sort_by_position};
pub use render::{RenderError, RenderOptions, render_line, render_occurrence};
pub use target::{TargetParseError, TargetPath};
pub use usage::{DefinitionCount, rank_usages};
