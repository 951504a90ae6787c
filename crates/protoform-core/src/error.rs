use std::num::ParseIntError;

use thiserror::Error;

use crate::catalogs::{CODE_INVALID_ENUM_LITERAL, CODE_NOT_A_MAP};
use crate::types::DiagnosticSeverity;

/// Per-declaration failures raised while ingesting into a `TypeCatalog`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The constant's literal text is not a base-prefixed signed 64-bit integer.
    #[error("unable to add enum value '{name}' to enum: invalid literal '{literal}': {source}")]
    InvalidEnumLiteral {
        name: String,
        literal: String,
        #[source]
        source: ParseIntError,
    },

    /// A declaration reached the map builder without a map shape. This is a
    /// classifier/builder mismatch, not bad input data.
    #[error("declaration '{name}' is not a map type (found {found})")]
    NotAMap { name: String, found: String },
}

impl CatalogError {
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::InvalidEnumLiteral { .. } => CODE_INVALID_ENUM_LITERAL,
            CatalogError::NotAMap { .. } => CODE_NOT_A_MAP,
        }
    }

    pub fn severity(&self) -> DiagnosticSeverity {
        match self {
            CatalogError::InvalidEnumLiteral { .. } => DiagnosticSeverity::Warning,
            CatalogError::NotAMap { .. } => DiagnosticSeverity::Error,
        }
    }

    /// True for contract violations between classifier and builders.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, CatalogError::NotAMap { .. })
    }
}
