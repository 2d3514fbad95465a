//! Serialized form of a resolved program.
//!
//! A front-end that runs out of process (for instance a small exporter built
//! on the host language's type checker) writes one JSON document per
//! invocation. Every cross reference is a numeric index into the matching
//! top-level array: `symbol` into `symbols`, `type` into `types`, `package`
//! into `packages`, `file` into `files`.
//!
//! ```json
//! {
//!   "files": [{ "path": "/src/app/main.go" }],
//!   "packages": [{
//!     "path": "app", "name": "main",
//!     "scope": { "main": 0 },
//!     "defs": [{ "symbol": 0, "file": 0, "offset": 18, "line": 2, "col": 5, "end_col": 9 }]
//!   }],
//!   "symbols": [
//!     { "name": "main", "kind": "func", "package": 0, "type": 0 }
//!   ],
//!   "types": [{ "kind": "signature" }]
//! }
//! ```
//!
//! Lines and columns are zero-based; columns count bytes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::InterchangeError;

/// Top-level document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramDocument {
    #[serde(default)]
    pub files: Vec<FileDocument>,
    #[serde(default)]
    pub packages: Vec<PackageDocument>,
    #[serde(default)]
    pub symbols: Vec<SymbolDocument>,
    #[serde(default)]
    pub types: Vec<TypeDocument>,
}

/// One source file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FileDocument {
    pub path: String,
    /// Test-only source.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub test: bool,
}

/// One loaded package with its scope and occurrence lists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageDocument {
    /// Import path.
    pub path: String,
    /// Package clause name.
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// Top-level name → symbol index.
    #[serde(default)]
    pub scope: IndexMap<String, u32>,
    #[serde(default)]
    pub defs: Vec<OccurrenceDocument>,
    #[serde(default)]
    pub uses: Vec<OccurrenceDocument>,
}

/// An identifier resolving to a symbol.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OccurrenceDocument {
    pub symbol: u32,
    pub file: u32,
    /// Byte offset of the identifier start.
    pub offset: u32,
    pub line: u32,
    pub col: u32,
    /// Defaults to `line`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_line: Option<u32>,
    pub end_col: u32,
}

/// One declaration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymbolDocument {
    pub name: String,
    pub kind: SymbolKindDocument,
    /// Owning package; absent for predeclared objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<u32>,
    #[serde(rename = "type")]
    pub ty: u32,
    /// Receiver type name of a method, declaring struct of a field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<u32>,
    /// Defaults to the exported-name rule applied to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported: Option<bool>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKindDocument {
    TypeName,
    Func,
    Var,
    Const,
    Field,
    EmbeddedField,
    PkgName,
    Label,
    Builtin,
    Nil,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanDirDocument {
    #[default]
    Both,
    Send,
    Recv,
}

/// One entry of the type arena.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeDocument {
    Basic {
        name: String,
    },
    Named {
        obj: u32,
        underlying: u32,
        #[serde(default)]
        methods: Vec<u32>,
    },
    Pointer {
        elem: u32,
    },
    Slice {
        elem: u32,
    },
    Array {
        len: u64,
        elem: u32,
    },
    Map {
        key: u32,
        value: u32,
    },
    Chan {
        #[serde(default)]
        dir: ChanDirDocument,
        elem: u32,
    },
    Signature {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        recv: Option<u32>,
        #[serde(default)]
        params: Vec<u32>,
        #[serde(default)]
        results: Vec<u32>,
        #[serde(default)]
        variadic: bool,
    },
    Struct {
        #[serde(default)]
        fields: Vec<u32>,
    },
    Interface {
        #[serde(default)]
        methods: Vec<u32>,
        #[serde(default)]
        embedded: Vec<u32>,
    },
    Tuple {
        #[serde(default)]
        elems: Vec<u32>,
    },
}

impl ProgramDocument {
    /// Parse a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, InterchangeError> {
        serde_json::from_str(text).map_err(|e| InterchangeError::json(format!("Parse error: {e}")))
    }

    /// Pretty-printed JSON; defaulted fields are left out.
    pub fn to_json(&self) -> Result<String, InterchangeError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| InterchangeError::json(format!("Serialization error: {e}")))
    }
}
