//! AnalysisHost and Analysis: the query entry points.
//!
//! The `AnalysisHost` owns one loaded program and the package list the query
//! was asked about; `Analysis` is a borrowed snapshot answering the two
//! queries over it.
//!
//! ## Usage
//!
//! ```ignore
//! let host = AnalysisHost::load(&CommandLister::go(), &front_end, &patterns, LoadOptions::default())?;
//! let analysis = host.analysis();
//!
//! for occurrence in analysis.search("net.Listen", SearchOptions::default())? {
//!     print!("{}", analysis.render(&occurrence, &RenderOptions::detect())?);
//! }
//! for entry in analysis.rank(RankOptions::default()) {
//!     println!("{entry}");
//! }
//! ```

use crate::error::QueryError;
use crate::hir::{Occurrence, OccurrenceKind, Program, Resolver, SymbolId};
use crate::project::{CollaboratorError, FrontEnd, LoadOptions, PackageLister};

use super::references::{find_occurrences, sort_by_position};
use super::render::{RenderError, RenderOptions, render_occurrence};
use super::target::TargetPath;
use super::usage::{DefinitionCount, rank_usages};

/// Options for [`Analysis::search`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Report definitions of the target instead of its uses.
    pub want_definitions: bool,
}

impl SearchOptions {
    fn kind(self) -> OccurrenceKind {
        if self.want_definitions {
            OccurrenceKind::Definition
        } else {
            OccurrenceKind::Use
        }
    }
}

/// Options for [`Analysis::rank`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankOptions {
    /// Leave out methods that could implement some non-empty interface.
    pub exclude_interface_satisfiers: bool,
}

/// Owns the loaded program for one invocation.
#[derive(Debug, Clone)]
pub struct AnalysisHost {
    program: Program,
    packages: Vec<String>,
}

impl AnalysisHost {
    /// Wrap an already loaded program; `packages` are the paths queries scan.
    pub fn new(program: Program, packages: Vec<String>) -> Self {
        Self { program, packages }
    }

    /// Expand `patterns`, load the listed packages and wrap the result.
    pub fn load(
        lister: &dyn PackageLister,
        front_end: &dyn FrontEnd,
        patterns: &[String],
        options: LoadOptions,
    ) -> Result<Self, CollaboratorError> {
        let packages = lister.list(patterns)?;
        let program = front_end.load(&packages, options)?;
        Ok(Self::new(program, packages))
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    /// Get a snapshot for querying.
    pub fn analysis(&self) -> Analysis<'_> {
        Analysis {
            program: &self.program,
            packages: &self.packages,
        }
    }
}

/// Read-only view of a loaded program and the packages to scan.
#[derive(Clone, Copy, Debug)]
pub struct Analysis<'a> {
    program: &'a Program,
    packages: &'a [String],
}

impl<'a> Analysis<'a> {
    pub fn new(program: &'a Program, packages: &'a [String]) -> Self {
        Self { program, packages }
    }

    pub fn program(&self) -> &'a Program {
        self.program
    }

    /// Resolve a raw target path to its symbol.
    pub fn resolve(&self, target: &str) -> Result<SymbolId, QueryError> {
        let path = TargetPath::parse(target)?;
        let symbol = Resolver::new(self.program).resolve(path.package(), path.name(), path.members())?;
        Ok(symbol)
    }

    /// Every use (or definition) of `target` in the scanned packages, in
    /// source order.
    ///
    /// A malformed or unresolvable target aborts the whole search; packages
    /// with errors contribute nothing.
    pub fn search(&self, target: &str, options: SearchOptions) -> Result<Vec<Occurrence>, QueryError> {
        let symbol = self.resolve(target)?;
        let mut occurrences = find_occurrences(self.program, symbol, self.packages, options.kind());
        sort_by_position(self.program, &mut occurrences);
        tracing::debug!(
            "[SEARCH] '{}' -> {:?}: {} occurrences",
            target,
            symbol,
            occurrences.len()
        );
        Ok(occurrences)
    }

    /// Functions and methods declared in the scanned packages, least used first.
    pub fn rank(&self, options: RankOptions) -> Vec<DefinitionCount> {
        let ranked = rank_usages(self.program, self.packages, options.exclude_interface_satisfiers);
        tracing::debug!("[RANK] {} candidates", ranked.len());
        ranked
    }

    /// The `path:line:text` line for one search result.
    pub fn render(&self, occurrence: &Occurrence, options: &RenderOptions) -> Result<String, RenderError> {
        render_occurrence(self.program, occurrence, options)
    }
}
