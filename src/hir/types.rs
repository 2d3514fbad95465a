//! Type descriptors and type identity.
//!
//! Types live in the program's arena and are referred to by [`TypeId`].
//! Identity follows the host type system: named types are nominal, every
//! other type is compared structurally.

use smol_str::SmolStr;

use super::ids::{SymbolId, TypeId};
use super::program::Program;

/// Channel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

/// A function signature.
///
/// The receiver is recorded for methods but never takes part in identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub recv: Option<TypeId>,
    pub params: Vec<TypeId>,
    pub results: Vec<TypeId>,
    pub variadic: bool,
}

impl Signature {
    pub fn new(params: Vec<TypeId>, results: Vec<TypeId>, variadic: bool) -> Self {
        Self {
            recv: None,
            params,
            results,
            variadic,
        }
    }
}

/// One entry in the type arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    /// A predeclared type such as `int` or `string`.
    Basic(SmolStr),
    /// A declared type. `obj` is its type name symbol.
    Named {
        obj: SymbolId,
        underlying: TypeId,
        methods: Vec<SymbolId>,
    },
    Pointer(TypeId),
    Slice(TypeId),
    Array {
        len: u64,
        elem: TypeId,
    },
    Map {
        key: TypeId,
        value: TypeId,
    },
    Chan {
        dir: ChanDir,
        elem: TypeId,
    },
    Signature(Signature),
    /// Fields are `SymbolKind::Field` symbols, in declaration order.
    Struct {
        fields: Vec<SymbolId>,
    },
    /// Explicitly declared methods plus embedded interface types.
    Interface {
        methods: Vec<SymbolId>,
        embedded: Vec<TypeId>,
    },
    Tuple(Vec<TypeId>),
}

impl Program {
    /// Follow named types down to their underlying type.
    pub fn underlying(&self, mut ty: TypeId) -> TypeId {
        // Named types never chain more deeply than the arena is long.
        for _ in 0..=self.types.len() {
            match self.ty(ty) {
                TypeKind::Named { underlying, .. } => ty = *underlying,
                _ => return ty,
            }
        }
        ty
    }

    /// The signature of a function-typed symbol.
    pub fn signature_of(&self, symbol: SymbolId) -> Option<&Signature> {
        match self.ty(self.symbol(symbol).ty) {
            TypeKind::Signature(sig) => Some(sig),
            _ => None,
        }
    }

    /// Complete method set of an interface type, embedded interfaces
    /// flattened, sorted by name. Returns `None` when `ty` is not an interface.
    pub fn interface_methods(&self, ty: TypeId) -> Option<Vec<SymbolId>> {
        let TypeKind::Interface { .. } = self.ty(self.underlying(ty)) else {
            return None;
        };

        let mut methods = Vec::new();
        let mut visited = Vec::new();
        let mut stack = vec![self.underlying(ty)];
        while let Some(current) = stack.pop() {
            if visited.contains(&current) {
                continue;
            }
            visited.push(current);
            if let TypeKind::Interface {
                methods: declared,
                embedded,
            } = self.ty(current)
            {
                for &method in declared {
                    let name = &self.symbol(method).name;
                    if !methods
                        .iter()
                        .any(|&m: &SymbolId| &self.symbol(m).name == name)
                    {
                        methods.push(method);
                    }
                }
                stack.extend(embedded.iter().map(|&e| self.underlying(e)));
            }
        }

        methods.sort_by(|&a, &b| self.symbol(a).name.cmp(&self.symbol(b).name));
        Some(methods)
    }

    /// Type identity.
    pub fn identical(&self, a: TypeId, b: TypeId) -> bool {
        if a == b {
            return true;
        }
        match (self.ty(a), self.ty(b)) {
            (TypeKind::Basic(x), TypeKind::Basic(y)) => x == y,
            // Distinct named types are never identical.
            (TypeKind::Named { .. }, _) | (_, TypeKind::Named { .. }) => false,
            (TypeKind::Pointer(x), TypeKind::Pointer(y))
            | (TypeKind::Slice(x), TypeKind::Slice(y)) => self.identical(*x, *y),
            (
                TypeKind::Array { len: la, elem: ea },
                TypeKind::Array { len: lb, elem: eb },
            ) => la == lb && self.identical(*ea, *eb),
            (
                TypeKind::Map { key: ka, value: va },
                TypeKind::Map { key: kb, value: vb },
            ) => self.identical(*ka, *kb) && self.identical(*va, *vb),
            (
                TypeKind::Chan { dir: da, elem: ea },
                TypeKind::Chan { dir: db, elem: eb },
            ) => da == db && self.identical(*ea, *eb),
            (TypeKind::Signature(x), TypeKind::Signature(y)) => self.identical_signatures(x, y),
            (TypeKind::Tuple(x), TypeKind::Tuple(y)) => self.identical_lists(x, y),
            (TypeKind::Struct { fields: fa }, TypeKind::Struct { fields: fb }) => {
                fa.len() == fb.len()
                    && fa.iter().zip(fb).all(|(&x, &y)| {
                        let (x, y) = (self.symbol(x), self.symbol(y));
                        x.name == y.name && x.kind == y.kind && self.identical(x.ty, y.ty)
                    })
            }
            (TypeKind::Interface { .. }, TypeKind::Interface { .. }) => {
                match (self.interface_methods(a), self.interface_methods(b)) {
                    (Some(ma), Some(mb)) => {
                        ma.len() == mb.len()
                            && ma.iter().zip(&mb).all(|(&x, &y)| {
                                let (x, y) = (self.symbol(x), self.symbol(y));
                                x.name == y.name && self.identical(x.ty, y.ty)
                            })
                    }
                    _ => false,
                }
            }
            _ => false,
        }
    }

    /// Signature identity: parameters, results and variadic-ness. The
    /// receiver is ignored.
    pub fn identical_signatures(&self, a: &Signature, b: &Signature) -> bool {
        a.variadic == b.variadic
            && self.identical_lists(&a.params, &b.params)
            && self.identical_lists(&a.results, &b.results)
    }

    fn identical_lists(&self, a: &[TypeId], b: &[TypeId]) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| self.identical(x, y))
    }
}
