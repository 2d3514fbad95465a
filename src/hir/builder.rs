//! Incremental construction of a [`Program`].
//!
//! Front-end adapters (and tests) describe a resolved program through this
//! builder: packages and files first, then types and declarations, then the
//! definition/use occurrences. `build` freezes the result.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;

use super::ids::{PackageId, SymbolId, TypeId};
use super::program::{Occurrence, OccurrenceKind, Package, Program, SourceFiles};
use super::symbols::{Symbol, SymbolKind, is_exported};
use super::types::{ChanDir, Signature, TypeKind};
use crate::base::{FileId, SourceSpan};

/// Builder for [`Program`].
#[derive(Debug, Default)]
pub struct ProgramBuilder {
    symbols: Vec<Symbol>,
    types: Vec<TypeKind>,
    packages: Vec<Package>,
    by_path: FxHashMap<SmolStr, PackageId>,
    basics: FxHashMap<SmolStr, TypeId>,
    files: SourceFiles,
    next_file: u32,
}

impl ProgramBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Packages and files
    // ------------------------------------------------------------------

    /// Add a package, or return the existing one with the same path.
    pub fn package(&mut self, path: &str, name: &str) -> PackageId {
        if let Some(&id) = self.by_path.get(path) {
            return id;
        }
        let id = PackageId::new(self.packages.len() as u32);
        self.packages.push(Package {
            id,
            path: SmolStr::new(path),
            name: SmolStr::new(name),
            errors: Vec::new(),
            scope: Default::default(),
            defs: Vec::new(),
            uses: Vec::new(),
        });
        self.by_path.insert(SmolStr::new(path), id);
        id
    }

    /// Record a load or type-check error against a package.
    pub fn package_error(&mut self, package: PackageId, message: impl Into<String>) {
        self.packages[package.index()].errors.push(message.into());
    }

    pub fn file(&mut self, path: &str, is_test: bool) -> FileId {
        let id = FileId::new(self.next_file);
        self.next_file += 1;
        self.files.insert(id, path, is_test);
        id
    }

    // ------------------------------------------------------------------
    // Types
    // ------------------------------------------------------------------

    fn push_type(&mut self, kind: TypeKind) -> TypeId {
        let id = TypeId::new(self.types.len() as u32);
        self.types.push(kind);
        id
    }

    fn push_symbol(
        &mut self,
        name: &str,
        kind: SymbolKind,
        package: Option<PackageId>,
        ty: TypeId,
    ) -> SymbolId {
        let id = SymbolId::new(self.symbols.len() as u32);
        self.symbols.push(Symbol {
            id,
            name: SmolStr::new(name),
            kind,
            package,
            ty,
            parent: None,
            exported: is_exported(name),
        });
        id
    }

    /// A predeclared type; interned by name.
    pub fn basic(&mut self, name: &str) -> TypeId {
        if let Some(&id) = self.basics.get(name) {
            return id;
        }
        let id = self.push_type(TypeKind::Basic(SmolStr::new(name)));
        self.basics.insert(SmolStr::new(name), id);
        id
    }

    pub fn pointer(&mut self, elem: TypeId) -> TypeId {
        self.push_type(TypeKind::Pointer(elem))
    }

    pub fn slice(&mut self, elem: TypeId) -> TypeId {
        self.push_type(TypeKind::Slice(elem))
    }

    pub fn array(&mut self, len: u64, elem: TypeId) -> TypeId {
        self.push_type(TypeKind::Array { len, elem })
    }

    pub fn map(&mut self, key: TypeId, value: TypeId) -> TypeId {
        self.push_type(TypeKind::Map { key, value })
    }

    pub fn chan(&mut self, dir: ChanDir, elem: TypeId) -> TypeId {
        self.push_type(TypeKind::Chan { dir, elem })
    }

    pub fn tuple(&mut self, elems: Vec<TypeId>) -> TypeId {
        self.push_type(TypeKind::Tuple(elems))
    }

    /// A receiver-less signature.
    pub fn signature(&mut self, params: Vec<TypeId>, results: Vec<TypeId>, variadic: bool) -> TypeId {
        self.push_type(TypeKind::Signature(Signature::new(params, results, variadic)))
    }

    /// A struct type. Each field is `(name, type, embedded)`.
    pub fn struct_type(&mut self, package: PackageId, fields: &[(&str, TypeId, bool)]) -> TypeId {
        let fields = fields
            .iter()
            .map(|&(name, ty, embedded)| {
                self.push_symbol(name, SymbolKind::Field { embedded }, Some(package), ty)
            })
            .collect();
        self.push_type(TypeKind::Struct { fields })
    }

    /// An interface type. Each method is `(name, signature)`; `embedded`
    /// lists embedded interface types.
    pub fn interface_type(
        &mut self,
        package: PackageId,
        methods: &[(&str, TypeId)],
        embedded: &[TypeId],
    ) -> TypeId {
        let id = self.push_type(TypeKind::Interface {
            methods: Vec::new(),
            embedded: embedded.to_vec(),
        });
        let method_ids: Vec<_> = methods
            .iter()
            .map(|&(name, sig)| {
                let sig = self.with_receiver(sig, id);
                self.push_symbol(name, SymbolKind::Func, Some(package), sig)
            })
            .collect();
        if let TypeKind::Interface { methods, .. } = &mut self.types[id.index()] {
            *methods = method_ids;
        }
        id
    }

    /// Copy a signature, setting its receiver.
    fn with_receiver(&mut self, sig: TypeId, recv: TypeId) -> TypeId {
        let mut signature = match &self.types[sig.index()] {
            TypeKind::Signature(s) => s.clone(),
            _ => Signature::new(Vec::new(), Vec::new(), false),
        };
        signature.recv = Some(recv);
        self.push_type(TypeKind::Signature(signature))
    }

    fn underlying(&self, mut ty: TypeId) -> TypeId {
        while let TypeKind::Named { underlying, .. } = &self.types[ty.index()] {
            if *underlying == ty {
                break;
            }
            ty = *underlying;
        }
        ty
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    /// Declare `type name <underlying>` at package level.
    ///
    /// Returns the type name symbol and the named type. Fields and interface
    /// methods of an anonymous underlying type are parented to the new name.
    pub fn declare_type(&mut self, package: PackageId, name: &str, underlying: TypeId) -> (SymbolId, TypeId) {
        let underlying = self.underlying(underlying);
        let named = TypeId::new(self.types.len() as u32);
        let obj = self.push_symbol(name, SymbolKind::TypeName, Some(package), named);
        self.push_type(TypeKind::Named {
            obj,
            underlying,
            methods: Vec::new(),
        });

        let members = match &self.types[underlying.index()] {
            TypeKind::Struct { fields } => fields.clone(),
            TypeKind::Interface { methods, .. } => methods.clone(),
            _ => Vec::new(),
        };
        for member in members {
            let symbol = &mut self.symbols[member.index()];
            if symbol.parent.is_none() {
                symbol.parent = Some(obj);
            }
        }

        self.declare_in_scope(package, name, obj);
        (obj, named)
    }

    /// Declare a package-level function.
    pub fn declare_func(&mut self, package: PackageId, name: &str, sig: TypeId) -> SymbolId {
        let id = self.push_symbol(name, SymbolKind::Func, Some(package), sig);
        self.declare_in_scope(package, name, id);
        id
    }

    /// Declare a method on a named type, with a pointer or value receiver.
    ///
    /// A receiver that is not a named type yields a method reachable from
    /// nowhere but its own occurrences.
    pub fn declare_method(&mut self, named: TypeId, pointer: bool, name: &str, sig: TypeId) -> SymbolId {
        let obj = match &self.types[named.index()] {
            TypeKind::Named { obj, .. } => Some(*obj),
            _ => None,
        };
        let package = obj.and_then(|obj| self.symbols[obj.index()].package);
        let recv = if pointer { self.pointer(named) } else { named };
        let sig = self.with_receiver(sig, recv);
        let id = self.push_symbol(name, SymbolKind::Func, package, sig);
        self.symbols[id.index()].parent = obj;
        if let TypeKind::Named { methods, .. } = &mut self.types[named.index()] {
            methods.push(id);
        }
        id
    }

    pub fn declare_var(&mut self, package: PackageId, name: &str, ty: TypeId) -> SymbolId {
        let id = self.push_symbol(name, SymbolKind::Var, Some(package), ty);
        self.declare_in_scope(package, name, id);
        id
    }

    pub fn declare_const(&mut self, package: PackageId, name: &str, ty: TypeId) -> SymbolId {
        let id = self.push_symbol(name, SymbolKind::Const, Some(package), ty);
        self.declare_in_scope(package, name, id);
        id
    }

    /// A symbol that is not entered in any package scope (locals,
    /// parameters, labels, imported package names).
    pub fn local(&mut self, package: PackageId, name: &str, kind: SymbolKind, ty: TypeId) -> SymbolId {
        self.push_symbol(name, kind, Some(package), ty)
    }

    /// A predeclared object with no owning package.
    pub fn universe(&mut self, name: &str, kind: SymbolKind, ty: TypeId) -> SymbolId {
        self.push_symbol(name, kind, None, ty)
    }

    /// Override the exported flag computed from the name.
    pub fn set_exported(&mut self, symbol: SymbolId, exported: bool) {
        self.symbols[symbol.index()].exported = exported;
    }

    /// Override the parent recorded for a symbol.
    pub fn set_parent(&mut self, symbol: SymbolId, parent: Option<SymbolId>) {
        self.symbols[symbol.index()].parent = parent;
    }

    fn declare_in_scope(&mut self, package: PackageId, name: &str, symbol: SymbolId) {
        self.packages[package.index()]
            .scope
            .insert(SmolStr::new(name), symbol);
    }

    // ------------------------------------------------------------------
    // Occurrences
    // ------------------------------------------------------------------

    /// Record an identifier in `package` that declares `symbol`.
    pub fn record_def(&mut self, package: PackageId, symbol: SymbolId, span: SourceSpan) {
        self.packages[package.index()].defs.push(Occurrence {
            symbol,
            span,
            kind: OccurrenceKind::Definition,
        });
    }

    /// Record an identifier in `package` that refers to `symbol`.
    pub fn record_use(&mut self, package: PackageId, symbol: SymbolId, span: SourceSpan) {
        self.packages[package.index()].uses.push(Occurrence {
            symbol,
            span,
            kind: OccurrenceKind::Use,
        });
    }

    pub fn build(self) -> Program {
        tracing::debug!(
            "built program: {} packages, {} symbols, {} types, {} files",
            self.packages.len(),
            self.symbols.len(),
            self.types.len(),
            self.files.len()
        );
        Program {
            symbols: self.symbols,
            types: self.types,
            packages: self.packages,
            by_path: self.by_path,
            files: self.files,
        }
    }
}
