//! Building a [`Program`] from a [`ProgramDocument`].

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::InterchangeError;
use super::document::{
    ChanDirDocument, OccurrenceDocument, ProgramDocument, SymbolKindDocument, TypeDocument,
};
use crate::base::{FileId, LineCol, SourceSpan, TextSize};
use crate::hir::{
    ChanDir, Occurrence, OccurrenceKind, Package, PackageId, Program, Signature, SourceFiles,
    Symbol, SymbolId, SymbolKind, TypeId, TypeKind, is_exported,
};
use crate::project::{CollaboratorError, FrontEnd, LoadOptions, finish_load};

/// Bounds for every id space of one document.
struct Ids {
    files: usize,
    packages: usize,
    symbols: usize,
    types: usize,
}

impl Ids {
    fn file(&self, id: u32, context: &dyn std::fmt::Display) -> Result<FileId, InterchangeError> {
        check(id, self.files, "file", context).map(FileId::new)
    }

    fn package(&self, id: u32, context: &dyn std::fmt::Display) -> Result<PackageId, InterchangeError> {
        check(id, self.packages, "package", context).map(PackageId::new)
    }

    fn symbol(&self, id: u32, context: &dyn std::fmt::Display) -> Result<SymbolId, InterchangeError> {
        check(id, self.symbols, "symbol", context).map(SymbolId::new)
    }

    fn ty(&self, id: u32, context: &dyn std::fmt::Display) -> Result<TypeId, InterchangeError> {
        check(id, self.types, "type", context).map(TypeId::new)
    }

    fn symbols(&self, ids: &[u32], context: &dyn std::fmt::Display) -> Result<Vec<SymbolId>, InterchangeError> {
        ids.iter().map(|&id| self.symbol(id, context)).collect()
    }

    fn types(&self, ids: &[u32], context: &dyn std::fmt::Display) -> Result<Vec<TypeId>, InterchangeError> {
        ids.iter().map(|&id| self.ty(id, context)).collect()
    }
}

fn check(id: u32, len: usize, kind: &str, context: &dyn std::fmt::Display) -> Result<u32, InterchangeError> {
    if (id as usize) < len {
        Ok(id)
    } else {
        Err(InterchangeError::unresolved(kind, id, context))
    }
}

/// Validate a document and build the program it describes.
///
/// Every numeric reference must name an existing entry; the first dangling
/// one is reported as [`InterchangeError::UnresolvedReference`]. Parent
/// chains that loop, and types that contain themselves without a named type
/// in between, are rejected as [`InterchangeError::Invalid`].
pub fn load_program(document: &ProgramDocument) -> Result<Program, InterchangeError> {
    let ids = Ids {
        files: document.files.len(),
        packages: document.packages.len(),
        symbols: document.symbols.len(),
        types: document.types.len(),
    };

    let mut files = SourceFiles::new();
    for (index, file) in document.files.iter().enumerate() {
        files.insert(FileId::new(index as u32), file.path.as_str(), file.test);
    }

    let symbols = document
        .symbols
        .iter()
        .enumerate()
        .map(|(index, symbol)| {
            let context = format!("symbol #{index} '{}'", symbol.name);
            Ok::<_, InterchangeError>(Symbol {
                id: SymbolId::new(index as u32),
                name: SmolStr::new(&symbol.name),
                kind: symbol_kind(symbol.kind),
                package: symbol
                    .package
                    .map(|id| ids.package(id, &context))
                    .transpose()?,
                ty: ids.ty(symbol.ty, &context)?,
                parent: symbol
                    .parent
                    .map(|id| ids.symbol(id, &context))
                    .transpose()?,
                exported: symbol.exported.unwrap_or_else(|| is_exported(&symbol.name)),
            })
        })
        .collect::<Result<Vec<_>, InterchangeError>>()?;

    let types = document
        .types
        .iter()
        .enumerate()
        .map(|(index, ty)| type_kind(&ids, index, ty))
        .collect::<Result<Vec<_>, InterchangeError>>()?;

    check_parent_chains(&symbols)?;
    check_type_cycles(&symbols, &types)?;

    let mut packages = Vec::with_capacity(document.packages.len());
    let mut by_path = FxHashMap::default();
    for (index, package) in document.packages.iter().enumerate() {
        let id = PackageId::new(index as u32);
        if by_path.insert(SmolStr::new(&package.path), id).is_some() {
            return Err(InterchangeError::invalid_package(format!(
                "duplicate package path '{}'",
                package.path
            )));
        }
        let context = format!("package '{}'", package.path);

        let scope = package
            .scope
            .iter()
            .map(|(name, &symbol)| Ok::<_, InterchangeError>((SmolStr::new(name), ids.symbol(symbol, &context)?)))
            .collect::<Result<IndexMap<_, _>, InterchangeError>>()?;

        packages.push(Package {
            id,
            path: SmolStr::new(&package.path),
            name: SmolStr::new(&package.name),
            errors: package.errors.clone(),
            scope,
            defs: occurrences(&ids, &package.defs, OccurrenceKind::Definition, &context)?,
            uses: occurrences(&ids, &package.uses, OccurrenceKind::Use, &context)?,
        });
    }

    tracing::debug!(
        "loaded program document: {} packages, {} symbols, {} types, {} files",
        packages.len(),
        symbols.len(),
        types.len(),
        files.len()
    );
    Ok(Program {
        symbols,
        types,
        packages,
        by_path,
        files,
    })
}

/// Read, parse and load a document from disk.
pub fn load_program_from_path(path: &Path) -> Result<Program, InterchangeError> {
    let text = std::fs::read_to_string(path)?;
    let document = ProgramDocument::from_json(&text)?;
    load_program(&document)
}

fn symbol_kind(kind: SymbolKindDocument) -> SymbolKind {
    match kind {
        SymbolKindDocument::TypeName => SymbolKind::TypeName,
        SymbolKindDocument::Func => SymbolKind::Func,
        SymbolKindDocument::Var => SymbolKind::Var,
        SymbolKindDocument::Const => SymbolKind::Const,
        SymbolKindDocument::Field => SymbolKind::Field { embedded: false },
        SymbolKindDocument::EmbeddedField => SymbolKind::Field { embedded: true },
        SymbolKindDocument::PkgName => SymbolKind::PkgName,
        SymbolKindDocument::Label => SymbolKind::Label,
        SymbolKindDocument::Builtin => SymbolKind::Builtin,
        SymbolKindDocument::Nil => SymbolKind::Nil,
    }
}

fn type_kind(ids: &Ids, index: usize, ty: &TypeDocument) -> Result<TypeKind, InterchangeError> {
    let context = format!("type #{index}");
    let context = &context;
    Ok(match ty {
        TypeDocument::Basic { name } => TypeKind::Basic(SmolStr::new(name)),
        TypeDocument::Named {
            obj,
            underlying,
            methods,
        } => TypeKind::Named {
            obj: ids.symbol(*obj, context)?,
            underlying: ids.ty(*underlying, context)?,
            methods: ids.symbols(methods, context)?,
        },
        TypeDocument::Pointer { elem } => TypeKind::Pointer(ids.ty(*elem, context)?),
        TypeDocument::Slice { elem } => TypeKind::Slice(ids.ty(*elem, context)?),
        TypeDocument::Array { len, elem } => TypeKind::Array {
            len: *len,
            elem: ids.ty(*elem, context)?,
        },
        TypeDocument::Map { key, value } => TypeKind::Map {
            key: ids.ty(*key, context)?,
            value: ids.ty(*value, context)?,
        },
        TypeDocument::Chan { dir, elem } => TypeKind::Chan {
            dir: match dir {
                ChanDirDocument::Both => ChanDir::Both,
                ChanDirDocument::Send => ChanDir::Send,
                ChanDirDocument::Recv => ChanDir::Recv,
            },
            elem: ids.ty(*elem, context)?,
        },
        TypeDocument::Signature {
            recv,
            params,
            results,
            variadic,
        } => {
            if *variadic && params.is_empty() {
                return Err(InterchangeError::invalid_type(format!(
                    "{context}: variadic signature without parameters"
                )));
            }
            let mut signature = Signature::new(ids.types(params, context)?, ids.types(results, context)?, *variadic);
            signature.recv = recv.map(|recv| ids.ty(recv, context)).transpose()?;
            TypeKind::Signature(signature)
        }
        TypeDocument::Struct { fields } => TypeKind::Struct {
            fields: ids.symbols(fields, context)?,
        },
        TypeDocument::Interface { methods, embedded } => TypeKind::Interface {
            methods: ids.symbols(methods, context)?,
            embedded: ids.types(embedded, context)?,
        },
        TypeDocument::Tuple { elems } => TypeKind::Tuple(ids.types(elems, context)?),
    })
}

// ============================================================================
// CYCLES
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Active,
    Done,
}

/// A parent chain ends at a symbol with no parent (or itself as parent).
fn check_parent_chains(symbols: &[Symbol]) -> Result<(), InterchangeError> {
    let mut marks = vec![Mark::Unvisited; symbols.len()];
    for start in 0..symbols.len() {
        let mut chain = Vec::new();
        let mut current = start;
        loop {
            match marks[current] {
                Mark::Done => break,
                Mark::Active => {
                    return Err(InterchangeError::invalid_symbol(format!(
                        "symbol #{current} '{}' is its own ancestor",
                        symbols[current].name
                    )));
                }
                Mark::Unvisited => {}
            }
            marks[current] = Mark::Active;
            chain.push(current);
            match symbols[current].parent {
                Some(parent) if parent.index() != current => current = parent.index(),
                _ => break,
            }
        }
        for index in chain {
            marks[index] = Mark::Done;
        }
    }
    Ok(())
}

/// Types reachable from `ty` through anything but a named type.
fn type_edges(symbols: &[Symbol], ty: &TypeKind) -> Vec<TypeId> {
    match ty {
        TypeKind::Basic(_) | TypeKind::Named { .. } => Vec::new(),
        TypeKind::Pointer(elem) | TypeKind::Slice(elem) => vec![*elem],
        TypeKind::Array { elem, .. } | TypeKind::Chan { elem, .. } => vec![*elem],
        TypeKind::Map { key, value } => vec![*key, *value],
        TypeKind::Signature(sig) => sig
            .recv
            .iter()
            .chain(&sig.params)
            .chain(&sig.results)
            .copied()
            .collect(),
        TypeKind::Struct { fields } => fields.iter().map(|f| symbols[f.index()].ty).collect(),
        TypeKind::Interface { methods, embedded } => methods
            .iter()
            .map(|m| symbols[m.index()].ty)
            .chain(embedded.iter().copied())
            .collect(),
        TypeKind::Tuple(elems) => elems.clone(),
    }
}

/// Every recursive type must recurse through a named type.
fn check_type_cycles(symbols: &[Symbol], types: &[TypeKind]) -> Result<(), InterchangeError> {
    let mut marks = vec![Mark::Unvisited; types.len()];
    for root in 0..types.len() {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::Active;
        // (type, its edges, next edge to visit)
        let mut stack = vec![(root, type_edges(symbols, &types[root]), 0usize)];
        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let Some(child) = frame.1.get(frame.2).map(|ty| ty.index()) else {
                marks[node] = Mark::Done;
                stack.pop();
                continue;
            };
            frame.2 += 1;
            match marks[child] {
                Mark::Active => {
                    return Err(InterchangeError::invalid_type(format!(
                        "type #{child} contains itself without a named type in between"
                    )));
                }
                Mark::Unvisited => {
                    marks[child] = Mark::Active;
                    stack.push((child, type_edges(symbols, &types[child]), 0));
                }
                Mark::Done => {}
            }
        }
    }
    Ok(())
}

fn occurrences(
    ids: &Ids,
    occurrences: &[OccurrenceDocument],
    kind: OccurrenceKind,
    context: &str,
) -> Result<Vec<Occurrence>, InterchangeError> {
    occurrences
        .iter()
        .map(|occ| {
            let span = SourceSpan::new(
                ids.file(occ.file, &context)?,
                TextSize::from(occ.offset),
                LineCol::new(occ.line, occ.col),
                LineCol::new(occ.end_line.unwrap_or(occ.line), occ.end_col),
            );
            Ok::<_, InterchangeError>(Occurrence {
                symbol: ids.symbol(occ.symbol, &context)?,
                span,
                kind,
            })
        })
        .collect()
}

// ============================================================================
// FRONT-END
// ============================================================================

/// A front-end reading the program model from a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFrontEnd {
    path: PathBuf,
}

impl JsonFrontEnd {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FrontEnd for JsonFrontEnd {
    fn load(&self, packages: &[String], options: LoadOptions) -> Result<Program, CollaboratorError> {
        tracing::debug!("reading program model from {}", self.path.display());
        let program = load_program_from_path(&self.path).map_err(CollaboratorError::model)?;
        finish_load(program, packages, options)
    }
}
