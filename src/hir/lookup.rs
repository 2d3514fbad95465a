//! Field and method lookup through a type, including promoted members.

use rustc_hash::FxHashSet;

use super::ids::{SymbolId, TypeId};
use super::program::Program;
use super::types::TypeKind;

/// Outcome of a member lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupResult {
    /// Exactly one member at the shallowest embedding depth.
    Found(SymbolId),
    /// Several members with the name at the same depth.
    Ambiguous,
    NotFound,
}

impl LookupResult {
    pub fn symbol(self) -> Option<SymbolId> {
        match self {
            LookupResult::Found(symbol) => Some(symbol),
            _ => None,
        }
    }
}

impl Program {
    /// Look up a field or method named `name` on `ty`.
    ///
    /// One level of pointer indirection is removed first. The search then
    /// walks embedded struct fields breadth-first: members at depth 0 shadow
    /// promoted ones, and two hits at the same depth are ambiguous. The
    /// operand is treated as addressable, so pointer-receiver methods are
    /// found on value types too.
    pub fn lookup_field_or_method(&self, ty: TypeId, name: &str) -> LookupResult {
        let start = match self.ty(ty) {
            TypeKind::Pointer(elem) => *elem,
            _ => ty,
        };

        let mut current = vec![start];
        let mut seen_named: FxHashSet<TypeId> = FxHashSet::default();

        while !current.is_empty() {
            let mut found: Option<SymbolId> = None;
            let mut hits = 0usize;
            let mut next = Vec::new();

            for ty in current {
                let mut ty = ty;
                if let TypeKind::Named {
                    underlying,
                    methods,
                    ..
                } = self.ty(ty)
                {
                    if !seen_named.insert(ty) {
                        continue;
                    }
                    if let Some(&method) = methods.iter().find(|&&m| self.symbol(m).name == name) {
                        found = Some(method);
                        hits += 1;
                        continue;
                    }
                    ty = *underlying;
                }

                match self.ty(ty) {
                    TypeKind::Struct { fields } => {
                        for &field in fields {
                            let symbol = self.symbol(field);
                            if symbol.name == name {
                                found = Some(field);
                                hits += 1;
                                continue;
                            }
                            if symbol.kind.is_embedded_field() {
                                next.push(match self.ty(symbol.ty) {
                                    TypeKind::Pointer(elem) => *elem,
                                    _ => symbol.ty,
                                });
                            }
                        }
                    }
                    TypeKind::Interface { .. } => {
                        let methods = self.interface_methods(ty).unwrap_or_default();
                        if let Some(&method) = methods.iter().find(|&&m| self.symbol(m).name == name) {
                            found = Some(method);
                            hits += 1;
                        }
                    }
                    _ => {}
                }
            }

            match (hits, found) {
                (1, Some(symbol)) => return LookupResult::Found(symbol),
                (0, _) => current = next,
                _ => return LookupResult::Ambiguous,
            }
        }

        LookupResult::NotFound
    }
}
