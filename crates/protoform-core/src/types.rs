use serde::{Deserialize, Serialize};

use crate::catalogs::{FLOAT_KINDS, INTEGER_KINDS};

// ---------------------------------------------------------------------------
// Type references (as reported by the type information provider)
// ---------------------------------------------------------------------------

/// A host-language type expression attached to a declaration or struct member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    /// Predeclared type such as `int`, `string` or `float64`.
    Basic { name: String },
    /// A declared (named) type together with what it is declared as.
    Named {
        package: String,
        name: String,
        underlying: Box<TypeRef>,
    },
    Pointer { elem: Box<TypeRef> },
    Slice { elem: Box<TypeRef> },
    Map { key: Box<TypeRef>, elem: Box<TypeRef> },
    Struct {
        #[serde(default)]
        fields: Vec<StructField>,
    },
    /// Anything the provider cannot describe structurally (funcs, chans, interfaces).
    Other { repr: String },
}

/// Underlying shape discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Struct,
    Integer,
    Float,
    Basic,
    Sequence,
    Map,
    Pointer,
    Other,
}

impl TypeRef {
    pub fn basic(name: &str) -> Self {
        TypeRef::Basic { name: name.into() }
    }

    pub fn named(package: &str, name: &str, underlying: TypeRef) -> Self {
        TypeRef::Named {
            package: package.into(),
            name: name.into(),
            underlying: Box::new(underlying),
        }
    }

    pub fn pointer(elem: TypeRef) -> Self {
        TypeRef::Pointer {
            elem: Box::new(elem),
        }
    }

    pub fn slice(elem: TypeRef) -> Self {
        TypeRef::Slice {
            elem: Box::new(elem),
        }
    }

    pub fn map(key: TypeRef, elem: TypeRef) -> Self {
        TypeRef::Map {
            key: Box::new(key),
            elem: Box::new(elem),
        }
    }

    pub fn structure(fields: Vec<StructField>) -> Self {
        TypeRef::Struct { fields }
    }

    /// Follow named types down to their base representation.
    pub fn underlying(&self) -> &TypeRef {
        match self {
            TypeRef::Named { underlying, .. } => underlying.underlying(),
            other => other,
        }
    }

    pub fn shape(&self) -> Shape {
        match self.underlying() {
            TypeRef::Basic { name } if INTEGER_KINDS.contains(name.as_str()) => Shape::Integer,
            TypeRef::Basic { name } if FLOAT_KINDS.contains(name.as_str()) => Shape::Float,
            TypeRef::Basic { .. } => Shape::Basic,
            TypeRef::Struct { .. } => Shape::Struct,
            TypeRef::Slice { .. } => Shape::Sequence,
            TypeRef::Map { .. } => Shape::Map,
            TypeRef::Pointer { .. } => Shape::Pointer,
            TypeRef::Named { .. } | TypeRef::Other { .. } => Shape::Other,
        }
    }

    /// Owning package path of a named type, looking through pointers.
    pub fn package(&self) -> Option<&str> {
        match self {
            TypeRef::Named { package, .. } if !package.is_empty() => Some(package),
            TypeRef::Pointer { elem } => elem.package(),
            _ => None,
        }
    }

    /// Unqualified name: `pkg/path.User` and `*pkg/path.User` both give `User`.
    pub fn simple_name(&self) -> String {
        match self {
            TypeRef::Named { name, .. } => name.clone(),
            TypeRef::Pointer { elem } => elem.simple_name(),
            other => other.type_string(),
        }
    }

    /// Qualified textual form, e.g. `[]*example.com/shop.Item` or `map[string]int`.
    ///
    /// This is the signature used to deduplicate struct declarations and the
    /// literal fallback for fields whose shape has no IDL mapping.
    pub fn type_string(&self) -> String {
        match self {
            TypeRef::Basic { name } => name.clone(),
            TypeRef::Named { package, name, .. } => {
                if package.is_empty() {
                    name.clone()
                } else {
                    format!("{package}.{name}")
                }
            }
            TypeRef::Pointer { elem } => format!("*{}", elem.type_string()),
            TypeRef::Slice { elem } => format!("[]{}", elem.type_string()),
            TypeRef::Map { key, elem } => {
                format!("map[{}]{}", key.type_string(), elem.type_string())
            }
            TypeRef::Struct { fields } => {
                let members: Vec<String> = fields
                    .iter()
                    .map(|f| format!("{} {}", f.name, f.ty.type_string()))
                    .collect();
                format!("struct{{{}}}", members.join("; "))
            }
            TypeRef::Other { repr } => repr.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Struct members
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructField {
    pub name: String,
    /// Defaults to the host-language rule: exported iff the name starts uppercase.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported: Option<bool>,
    /// Raw serialization tag text, e.g. `json:"user_id,omitempty"`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

impl StructField {
    pub fn new(name: &str, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            exported: None,
            tag: String::new(),
            ty,
        }
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn is_exported(&self) -> bool {
        self.exported.unwrap_or_else(|| starts_uppercase(&self.name))
    }
}

// ---------------------------------------------------------------------------
// Declarations
// ---------------------------------------------------------------------------

/// One exported type or constant as reported by the type information provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Simple (unqualified) identifier.
    pub name: String,
    /// Path of the package the declaration lives in.
    pub package: String,
    /// The provider lists exported declarations only, so absent means exported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported: Option<bool>,
    #[serde(flatten)]
    pub kind: DeclarationKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decl", rename_all = "lowercase")]
pub enum DeclarationKind {
    /// A type declaration; `ty` is the declared type (for aliases, the aliased one).
    Type {
        #[serde(rename = "type")]
        ty: TypeRef,
    },
    /// A constant with its literal value text and the type it belongs to.
    Const {
        #[serde(rename = "type")]
        ty: TypeRef,
        value: String,
    },
}

impl Declaration {
    pub fn new_type(package: &str, name: &str, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            exported: None,
            kind: DeclarationKind::Type { ty },
        }
    }

    pub fn new_const(package: &str, name: &str, ty: TypeRef, value: &str) -> Self {
        Self {
            name: name.into(),
            package: package.into(),
            exported: None,
            kind: DeclarationKind::Const {
                ty,
                value: value.into(),
            },
        }
    }

    pub fn ty(&self) -> &TypeRef {
        match &self.kind {
            DeclarationKind::Type { ty } | DeclarationKind::Const { ty, .. } => ty,
        }
    }

    pub fn is_exported(&self) -> bool {
        self.exported.unwrap_or(true)
    }

    /// Package that owns the declared type: the type's own package when it
    /// names one, otherwise the declaration's.
    pub fn owner(&self) -> &str {
        self.ty().package().unwrap_or(self.package.as_str())
    }
}

/// Everything the provider reports for one source package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    /// Short package name, used for the `package` statement and the file name.
    pub name: String,
    /// Full import path.
    pub path: String,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl PackageManifest {
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn starts_uppercase(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: String,
    pub severity: DiagnosticSeverity,
    /// Offending declaration, by simple name.
    pub declaration: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}
