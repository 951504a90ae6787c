//! Standalone named map declarations.

use serde::Serialize;

use crate::error::CatalogError;
use crate::types::TypeRef;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Map {
    pub name: String,
    pub key_type: String,
    pub elem_type: String,
    underlying_key_type: String,
    underlying_elem_type: String,
}

impl Map {
    /// Capture key/elem types of a map-shaped declaration.
    ///
    /// Fails with `CatalogError::NotAMap` if `ty` has no map shape, which means
    /// the caller skipped classification.
    pub fn from_type(name: &str, ty: &TypeRef) -> Result<Self, CatalogError> {
        match ty.underlying() {
            TypeRef::Map { key, elem } => Ok(Self {
                name: name.into(),
                key_type: key.type_string(),
                elem_type: elem.type_string(),
                underlying_key_type: key.underlying().type_string(),
                underlying_elem_type: elem.underlying().type_string(),
            }),
            other => Err(CatalogError::NotAMap {
                name: name.into(),
                found: other.type_string(),
            }),
        }
    }

    pub fn underlying_key_type(&self) -> &str {
        &self.underlying_key_type
    }

    pub fn underlying_elem_type(&self) -> &str {
        &self.underlying_elem_type
    }
}
