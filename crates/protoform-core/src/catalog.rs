//! Per-package type catalog: ingestion, dedupe and canonicalization.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalogs::ENUM_BASE_KINDS;
use crate::classifier::{classify, DeclarationClass};
use crate::enums::{Enum, EnumValue};
use crate::error::CatalogError;
use crate::maps::Map;
use crate::message::{create_message, Message};
use crate::strategy::{NamingStrategy, ProtoNaming};
use crate::type_map::TypeMapper;
use crate::types::{Declaration, DeclarationKind, Diagnostic, PackageManifest, Shape, TypeRef};

/// What a single `ingest` call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ingested {
    Message(String),
    EnumValue { enum_name: String, value: String },
    Map(String),
    /// Foreign struct type; only its package was recorded as an import.
    Import(String),
    /// Already processed (same struct signature or map name).
    Duplicate,
    /// Not a schema-relevant declaration.
    Skipped,
}

/// Schema model for one source package.
///
/// Created empty, filled by `ingest`, finalized once by `canonicalize`.
#[derive(Serialize)]
pub struct TypeCatalog {
    name: String,
    path: String,
    messages: Vec<Message>,
    enums: BTreeMap<String, Enum>,
    maps: BTreeMap<String, Map>,
    imports: Vec<String>,
    diagnostics: Vec<Diagnostic>,
    #[serde(skip)]
    seen: HashSet<String>,
    #[serde(skip)]
    naming: Box<dyn NamingStrategy>,
}

impl TypeCatalog {
    pub fn new(name: &str, path: &str) -> Self {
        Self::with_naming(name, path, Box::new(ProtoNaming))
    }

    pub fn with_naming(name: &str, path: &str, naming: Box<dyn NamingStrategy>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            messages: Vec::new(),
            enums: BTreeMap::new(),
            maps: BTreeMap::new(),
            imports: Vec::new(),
            diagnostics: Vec::new(),
            seen: HashSet::new(),
            naming,
        }
    }

    /// Ingest every declaration of a manifest and canonicalize.
    pub fn from_manifest(manifest: &PackageManifest) -> Self {
        Self::from_manifest_with(manifest, Box::new(ProtoNaming))
    }

    pub fn from_manifest_with(manifest: &PackageManifest, naming: Box<dyn NamingStrategy>) -> Self {
        let mut catalog = Self::with_naming(&manifest.name, &manifest.path, naming);
        catalog.ingest_all(&manifest.declarations);
        catalog.canonicalize();
        catalog
    }

    // -- ingestion ----------------------------------------------------------

    /// Classify one declaration and route it to the matching builder.
    ///
    /// Errors are returned and also recorded as diagnostics; the catalog stays
    /// usable for the remaining declarations.
    pub fn ingest(&mut self, decl: &Declaration) -> Result<Ingested, CatalogError> {
        if !decl.is_exported() {
            return Ok(Ingested::Skipped);
        }

        let outcome = match classify(decl) {
            DeclarationClass::Struct => Ok(self.add_message(decl)),
            DeclarationClass::Constant => self.add_enum_value(decl),
            DeclarationClass::Map => self.add_map(decl),
            DeclarationClass::Other => Ok(Ingested::Skipped),
        };

        if let Err(err) = &outcome {
            self.report(decl, err);
        }
        outcome
    }

    /// Ingest declarations in order, never stopping at a failure. Returns the
    /// number of declarations that produced a diagnostic.
    pub fn ingest_all<'a, I>(&mut self, decls: I) -> usize
    where
        I: IntoIterator<Item = &'a Declaration>,
    {
        decls
            .into_iter()
            .filter(|decl| self.ingest(decl).is_err())
            .count()
    }

    /// Build a message for a struct declaration of this package.
    ///
    /// Structs are deduplicated on their qualified type string. A struct owned
    /// by another package only contributes an import.
    pub fn add_message(&mut self, decl: &Declaration) -> Ingested {
        let ty = decl.ty();
        if !self.seen.insert(ty.type_string()) {
            return Ingested::Duplicate;
        }

        let owner = decl.owner();
        if !owner.is_empty() && owner != self.path {
            let owner = owner.to_string();
            debug!(declaration = %decl.name, import = %owner, "foreign struct recorded as import");
            self.add_import(&owner);
            return Ingested::Import(owner);
        }

        let TypeRef::Struct { fields } = ty.underlying() else {
            return Ingested::Skipped;
        };

        let mut message = create_message(&decl.name, fields, &TypeMapper::new(&self.path));
        for field in message.fields() {
            for package in field.references() {
                self.add_import(package);
            }
        }

        self.naming.on_message(self, &mut message);
        for field in message.fields_mut() {
            self.naming.on_field(self, field);
        }

        debug!(name = %message.name, fields = message.fields().len(), "message added");
        let name = message.name.clone();
        self.messages.push(message);
        Ingested::Message(name)
    }

    /// Add a typed integer constant to its enum.
    ///
    /// Only constants of a named type owned by this package with an `int`,
    /// `int32` or `int64` base are admitted. The enum is created on first
    /// sight even if this value then fails to parse.
    pub fn add_enum_value(&mut self, decl: &Declaration) -> Result<Ingested, CatalogError> {
        let DeclarationKind::Const { ty, value } = &decl.kind else {
            return Ok(Ingested::Skipped);
        };
        if !self.is_enum_type(decl) {
            return Ok(Ingested::Skipped);
        }

        let enum_name = ty.simple_name();
        self.get_or_create_enum(&enum_name);

        let mut parsed = EnumValue::parse(&decl.name, value)?;
        self.naming.on_enum_value(self, &mut parsed);

        debug!(enum_type = %enum_name, value = %parsed.name, "enum value added");
        let value_name = parsed.name.clone();
        self.get_or_create_enum(&enum_name).push_value(parsed);
        Ok(Ingested::EnumValue {
            enum_name,
            value: value_name,
        })
    }

    /// Register a named map declaration once per name.
    pub fn add_map(&mut self, decl: &Declaration) -> Result<Ingested, CatalogError> {
        if self.maps.contains_key(&decl.name) {
            return Ok(Ingested::Duplicate);
        }

        let mut map = Map::from_type(&decl.name, decl.ty())?;
        self.naming.on_map(self, &mut map);

        debug!(map = %decl.name, key = %map.key_type, elem = %map.elem_type, "map added");
        self.maps.insert(decl.name.clone(), map);
        Ok(Ingested::Map(decl.name.clone()))
    }

    /// Enum for `name`, inserted empty if absent.
    pub fn get_or_create_enum(&mut self, name: &str) -> &mut Enum {
        self.enums
            .entry(name.to_string())
            .or_insert_with(|| Enum::new(name))
    }

    // -- finalization -------------------------------------------------------

    /// Sort and flag every enum, then order messages by name.
    pub fn canonicalize(&mut self) {
        for e in self.enums.values_mut() {
            e.canonicalize();
        }
        self.messages.sort_by(|a, b| a.name.cmp(&b.name));
    }

    // -- accessors ----------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message(&self, name: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.name == name)
    }

    /// Enums ordered by type name.
    pub fn enums(&self) -> impl Iterator<Item = &Enum> {
        self.enums.values()
    }

    pub fn enum_by_name(&self, name: &str) -> Option<&Enum> {
        self.enums.get(name)
    }

    pub fn maps(&self) -> impl Iterator<Item = &Map> {
        self.maps.values()
    }

    pub fn map_by_name(&self, name: &str) -> Option<&Map> {
        self.maps.get(name)
    }

    /// Foreign package paths in first-seen order.
    pub fn imports(&self) -> &[String] {
        &self.imports
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    // -- internals ----------------------------------------------------------

    fn is_enum_type(&self, decl: &Declaration) -> bool {
        let ty = decl.ty();
        let integer_base = ty.shape() == Shape::Integer
            && matches!(
                ty.underlying(),
                TypeRef::Basic { name } if ENUM_BASE_KINDS.contains(name.as_str())
            );
        matches!(ty, TypeRef::Named { .. }) && integer_base && decl.owner() == self.path
    }

    fn add_import(&mut self, package: &str) {
        if !self.imports.iter().any(|p| p == package) {
            self.imports.push(package.to_string());
        }
    }

    fn report(&mut self, decl: &Declaration, err: &CatalogError) {
        warn!(
            declaration = %decl.name,
            package = %self.path,
            code = err.code(),
            "{err}"
        );
        self.diagnostics.push(Diagnostic {
            code: err.code().into(),
            severity: err.severity(),
            declaration: decl.name.clone(),
            message: err.to_string(),
        });
    }
}

impl fmt::Debug for TypeCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeCatalog")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("messages", &self.messages)
            .field("enums", &self.enums)
            .field("maps", &self.maps)
            .field("imports", &self.imports)
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}
