//! Interface satisfaction analysis.
//!
//! A method whose signature matches a method required by some interface may
//! be called through dynamic dispatch, so zero textual uses does not make it
//! dead. The index collects every definition whose type is a non-empty
//! interface: declared interface types, but also variables, parameters and
//! fields of anonymous interface type such as `x interface{ Do() }`.
//! [`InterfaceIndex::satisfies`] answers whether a function could be one of
//! those required methods.

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::hir::{PackageId, Program, SymbolId};

/// A non-empty interface type, as seen by the satisfaction check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    /// The defining symbol: a type name, or a variable or field whose type
    /// is an interface. Its package and visibility apply to the interface.
    pub symbol: SymbolId,
    pub package: Option<PackageId>,
    pub exported: bool,
    /// Complete required method set, embedded interfaces included.
    pub methods: Vec<SymbolId>,
}

/// Every non-empty interface defined in the loaded program.
#[derive(Debug, Clone, Default)]
pub struct InterfaceIndex {
    interfaces: Vec<InterfaceDescriptor>,
}

impl InterfaceIndex {
    /// Scan every package's definitions for interface types.
    ///
    /// Packages with errors are skipped. Interfaces with no methods are left
    /// out: every method would trivially match them.
    pub fn build(program: &Program) -> Self {
        let found: Vec<Vec<InterfaceDescriptor>> = program
            .packages()
            .par_iter()
            .filter(|package| !package.has_errors())
            .map(|package| {
                package
                    .defs
                    .iter()
                    .filter_map(|occ| describe(program, occ.symbol))
                    .collect()
            })
            .collect();

        let mut seen = FxHashSet::default();
        let interfaces: Vec<_> = found
            .into_iter()
            .flatten()
            .filter(|descriptor| seen.insert(descriptor.symbol))
            .collect();

        tracing::debug!("indexed {} non-empty interfaces", interfaces.len());
        Self { interfaces }
    }

    pub fn iter(&self) -> impl Iterator<Item = &InterfaceDescriptor> {
        self.interfaces.iter()
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }

    pub fn contains(&self, symbol: SymbolId) -> bool {
        self.interfaces.iter().any(|d| d.symbol == symbol)
    }

    /// Whether `func` could satisfy a method of any indexed interface.
    ///
    /// Free functions never do. Across package boundaries only exported
    /// interfaces and exported method names are considered. A candidate
    /// matches when its signature is identical to a required method's.
    pub fn satisfies(&self, program: &Program, func: SymbolId) -> bool {
        let Some(signature) = program.signature_of(func) else {
            return false;
        };
        if signature.recv.is_none() {
            return false;
        }
        let symbol = program.symbol(func);

        self.interfaces.iter().any(|interface| {
            let same_package = interface.package.is_some() && interface.package == symbol.package;
            if !same_package && (!interface.exported || !symbol.exported) {
                return false;
            }
            interface.methods.iter().any(|&method| {
                program
                    .signature_of(method)
                    .is_some_and(|required| program.identical_signatures(signature, required))
            })
        })
    }
}

fn describe(program: &Program, symbol: SymbolId) -> Option<InterfaceDescriptor> {
    let sym = program.symbol(symbol);
    let methods = program.interface_methods(sym.ty)?;
    if methods.is_empty() {
        return None;
    }
    Some(InterfaceDescriptor {
        symbol,
        package: sym.package,
        exported: sym.exported,
        methods,
    })
}
