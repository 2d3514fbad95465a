//! The resolved program model.
//!
//! A [`Program`] is the read-only snapshot a front-end produces for one
//! invocation: symbol and type arenas, per-package scopes, and the
//! definition/use occurrence lists that map source identifiers to symbols.
//! Nothing in it changes after [`ProgramBuilder::build`](super::ProgramBuilder::build).

use std::sync::Arc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::ids::{PackageId, SymbolId, TypeId};
use super::symbols::Symbol;
use super::types::{Signature, TypeKind};
use crate::base::{FileId, SourceSpan};

// ============================================================================
// OCCURRENCES
// ============================================================================

/// Whether an identifier declares its symbol or refers to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OccurrenceKind {
    Definition,
    Use,
}

/// A place in source where an identifier resolves to a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub symbol: SymbolId,
    pub span: SourceSpan,
    pub kind: OccurrenceKind,
}

// ============================================================================
// SOURCE FILES
// ============================================================================

/// A source file known to the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: Arc<str>,
    /// Test-only source (`*_test.go` and the like).
    pub is_test: bool,
}

/// Map from FileId to file path and test flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceFiles {
    files: IndexMap<FileId, SourceFile>,
}

impl SourceFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file: FileId, path: impl Into<Arc<str>>, is_test: bool) {
        self.files.insert(
            file,
            SourceFile {
                path: path.into(),
                is_test,
            },
        );
    }

    pub fn get(&self, file: FileId) -> Option<&SourceFile> {
        self.files.get(&file)
    }

    /// Get the path for a file.
    pub fn path(&self, file: FileId) -> Option<&str> {
        self.files.get(&file).map(|f| f.path.as_ref())
    }

    pub fn is_test(&self, file: FileId) -> bool {
        self.files.get(&file).is_some_and(|f| f.is_test)
    }

    /// Iterate over all files.
    pub fn iter(&self) -> impl Iterator<Item = (FileId, &SourceFile)> + '_ {
        self.files.iter().map(|(&id, file)| (id, file))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

// ============================================================================
// PACKAGES
// ============================================================================

/// One loaded package.
#[derive(Debug, Clone)]
pub struct Package {
    pub id: PackageId,
    /// Import path, e.g. `net/http`.
    pub path: SmolStr,
    /// Package clause name, e.g. `http`.
    pub name: SmolStr,
    /// Load or type-check errors reported by the front-end.
    pub errors: Vec<String>,
    /// Top-level names declared in the package.
    pub scope: IndexMap<SmolStr, SymbolId>,
    pub defs: Vec<Occurrence>,
    pub uses: Vec<Occurrence>,
}

impl Package {
    /// A package with errors has an unreliable symbol table and occurrence maps.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Look up a top-level name.
    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.scope.get(name).copied()
    }

    /// The definition or use occurrences of this package.
    pub fn occurrences(&self, kind: OccurrenceKind) -> &[Occurrence] {
        match kind {
            OccurrenceKind::Definition => &self.defs,
            OccurrenceKind::Use => &self.uses,
        }
    }
}

// ============================================================================
// PROGRAM
// ============================================================================

/// The full resolved program.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub(crate) symbols: Vec<Symbol>,
    pub(crate) types: Vec<TypeKind>,
    pub(crate) packages: Vec<Package>,
    pub(crate) by_path: FxHashMap<SmolStr, PackageId>,
    pub(crate) files: SourceFiles,
}

impl Program {
    /// Get a symbol by id.
    ///
    /// # Panics
    /// Panics if the id was issued by a different program.
    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    /// Get a type by id.
    pub fn ty(&self, id: TypeId) -> &TypeKind {
        &self.types[id.index()]
    }

    pub fn package(&self, id: PackageId) -> &Package {
        &self.packages[id.index()]
    }

    pub fn package_by_path(&self, path: &str) -> Option<&Package> {
        self.by_path.get(path).map(|&id| self.package(id))
    }

    /// All packages in load order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn files(&self) -> &SourceFiles {
        &self.files
    }

    /// Receiver type of a method; `None` for free functions and non-functions.
    pub fn receiver(&self, symbol: SymbolId) -> Option<TypeId> {
        self.signature_of(symbol).and_then(|sig: &Signature| sig.recv)
    }

    /// Canonical textual form: owning package, declaration, member chain.
    ///
    /// `net.Listen`, `bytes.Buffer.String`, `net/http.Server.Addr`.
    pub fn qualified_name(&self, id: SymbolId) -> String {
        let mut chain = vec![id];
        let mut current = id;
        // A looping parent chain stops once it revisits a symbol.
        while let Some(parent) = self.symbol(current).parent {
            if chain.contains(&parent) {
                break;
            }
            chain.push(parent);
            current = parent;
        }

        let root = self.symbol(current);
        let mut name = match root.package {
            Some(pkg) => format!("{}.{}", self.package(pkg).path, root.name),
            None => root.name.to_string(),
        };
        for &member in chain.iter().rev().skip(1) {
            name.push('.');
            name.push_str(&self.symbol(member).name);
        }
        name
    }

    /// Drop every occurrence located in a test file.
    pub fn without_test_sources(mut self) -> Self {
        let files = &self.files;
        let mut dropped = 0usize;
        for package in &mut self.packages {
            let before = package.defs.len() + package.uses.len();
            package.defs.retain(|occ| !files.is_test(occ.span.file));
            package.uses.retain(|occ| !files.is_test(occ.span.file));
            dropped += before - (package.defs.len() + package.uses.len());
        }
        tracing::debug!("dropped {} occurrences located in test files", dropped);
        self
    }
}
