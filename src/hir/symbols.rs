//! Resolved declarations.
//!
//! A [`Symbol`] is the program model's record of one declaration: a
//! package-level type, function, variable or constant, or a member (field or
//! method) reached through a type. Symbols are created once by the
//! [`ProgramBuilder`](super::ProgramBuilder) and never mutated afterwards.

use smol_str::SmolStr;

use super::ids::{PackageId, SymbolId, TypeId};

/// What kind of declaration a symbol is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// A declared type name (`type T ...`).
    TypeName,
    /// A function or method (methods have a receiver in their signature).
    Func,
    /// A variable (package-level or local) or parameter.
    Var,
    /// A constant.
    Const,
    /// A struct field; `embedded` fields promote their members.
    Field { embedded: bool },
    /// An imported package name.
    PkgName,
    /// A statement label.
    Label,
    /// A predeclared function such as `len`.
    Builtin,
    /// The predeclared `nil`.
    Nil,
}

impl SymbolKind {
    pub fn is_func(&self) -> bool {
        matches!(self, SymbolKind::Func)
    }

    pub fn is_type_name(&self) -> bool {
        matches!(self, SymbolKind::TypeName)
    }

    pub fn is_field(&self) -> bool {
        matches!(self, SymbolKind::Field { .. })
    }

    /// Embedded struct fields are the only ones whose members get promoted.
    pub fn is_embedded_field(&self) -> bool {
        matches!(self, SymbolKind::Field { embedded: true })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::TypeName => "type",
            SymbolKind::Func => "func",
            SymbolKind::Var => "var",
            SymbolKind::Const => "const",
            SymbolKind::Field { .. } => "field",
            SymbolKind::PkgName => "package",
            SymbolKind::Label => "label",
            SymbolKind::Builtin => "builtin",
            SymbolKind::Nil => "nil",
        }
    }
}

/// One resolved declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub id: SymbolId,
    pub name: SmolStr,
    pub kind: SymbolKind,
    /// Owning package; `None` for predeclared (universe) objects.
    pub package: Option<PackageId>,
    /// Declared type. For a `TypeName` this is the named type itself.
    pub ty: TypeId,
    /// Enclosing declaration: a method's receiver type name, or the named
    /// struct declaring a field.
    pub parent: Option<SymbolId>,
    /// Whether the name is visible outside its package.
    pub exported: bool,
}

/// Exported-name rule: the first character is an upper-case letter.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}
