//! Common type definitions for resolved modules
//!
//! These records are produced by a front end (see `io::loader`) and consumed
//! as inert data by the graph and metrics engine. Nothing here inspects
//! source text: whether a type is a behavioral contract or a concrete type is
//! decided once, at the loader boundary, and carried as a [`TypeKind`] tag.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

/// Unique identifier of a module (package path, crate path, namespace...)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ModuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ModuleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ModuleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Whether a named type is purely a behavioral contract or a concrete type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Method signatures only, no data
    Contract,
    /// Anything else: structs, aliases, enums, named primitives
    Concrete,
}

/// A top-level declaration of a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Function {
        name: String,
    },
    Type {
        name: String,
        #[serde(default)]
        exported: bool,
        #[serde(rename = "type_kind")]
        kind: TypeKind,
    },
    Constant {
        name: String,
    },
    Variable {
        name: String,
    },
    /// A recognized declaration that fits none of the other buckets
    Other {
        #[serde(default)]
        description: String,
    },
    /// Any declaration tag the loader does not understand
    #[serde(other)]
    Unrecognized,
}

impl Declaration {
    pub fn function(name: impl Into<String>) -> Self {
        Self::Function { name: name.into() }
    }

    pub fn contract(name: impl Into<String>, exported: bool) -> Self {
        Self::Type {
            name: name.into(),
            exported,
            kind: TypeKind::Contract,
        }
    }

    pub fn concrete(name: impl Into<String>, exported: bool) -> Self {
        Self::Type {
            name: name.into(),
            exported,
            kind: TypeKind::Concrete,
        }
    }
}

/// A single method: its name and a normalized signature string
///
/// Signatures are compared verbatim, so the front end must normalize
/// parameter names away (`(p []byte) (n int)` and `([]byte) int` differ).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MethodSig {
    pub name: String,
    #[serde(default)]
    pub signature: String,
}

impl MethodSig {
    pub fn new(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
        }
    }
}

/// Descriptor of a behavioral contract (interface, trait, protocol)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractType {
    pub name: String,
    /// Required operations
    #[serde(default)]
    pub methods: Vec<MethodSig>,
}

impl ContractType {
    /// An empty contract is satisfied by everything and carries no coupling.
    pub fn is_meaningful(&self) -> bool {
        !self.methods.is_empty()
    }
}

/// Descriptor of a concrete type and its method sets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcreteType {
    pub name: String,
    /// Methods callable on a value of the type
    #[serde(default)]
    pub value_methods: Vec<MethodSig>,
    /// Methods callable only through a reference/pointer to the type
    #[serde(default)]
    pub reference_methods: Vec<MethodSig>,
}

/// Type information needed by the structural coupling phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    #[serde(default)]
    pub contracts: Vec<ContractType>,
    #[serde(default)]
    pub concretes: Vec<ConcreteType>,
}

/// A resolved module: identity, direct imports, declarations and types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: ModuleId,
    #[serde(default)]
    pub imports: BTreeSet<ModuleId>,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
    /// `None` when the front end could not resolve type information
    #[serde(default)]
    pub types: Option<TypeInfo>,
    /// Member of the standard baseline (counted for Ca, hidden by default)
    #[serde(default)]
    pub standard: bool,
}

impl Module {
    pub fn new(id: impl Into<ModuleId>) -> Self {
        Self {
            id: id.into(),
            imports: BTreeSet::new(),
            declarations: Vec::new(),
            types: None,
            standard: false,
        }
    }

    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<ModuleId>,
    {
        self.imports.extend(imports.into_iter().map(Into::into));
        self
    }

    pub fn with_declarations(mut self, declarations: Vec<Declaration>) -> Self {
        self.declarations = declarations;
        self
    }

    pub fn with_types(mut self, types: TypeInfo) -> Self {
        self.types = Some(types);
        self
    }

    pub fn standard(mut self) -> Self {
        self.standard = true;
        self
    }

    pub fn imports(&self, id: &str) -> bool {
        self.imports.contains(id)
    }
}
