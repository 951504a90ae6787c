//! Naming strategy hooks.
//!
//! A strategy runs once per artifact during ingestion, after the structural
//! model is built and before it is stored in the catalog. Hooks may rewrite
//! display names and type names; order, repeatedness, values and JSON names
//! are not reachable through `&mut`.

use crate::catalog::TypeCatalog;
use crate::enums::EnumValue;
use crate::maps::Map;
use crate::message::{Field, Message};
use crate::naming::{to_enum_value_name, to_field_name};
use crate::type_map::TypeMapper;

pub trait NamingStrategy: Send + Sync {
    fn on_message(&self, _catalog: &TypeCatalog, _message: &mut Message) {}

    fn on_field(&self, _catalog: &TypeCatalog, _field: &mut Field) {}

    fn on_enum_value(&self, _catalog: &TypeCatalog, _value: &mut EnumValue) {}

    fn on_map(&self, _catalog: &TypeCatalog, _map: &mut Map) {}
}

/// Protobuf naming: snake_case fields (two-letter names lower-cased verbatim),
/// SCREAMING_SNAKE_CASE enum values, types resolved against the catalog's package.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProtoNaming;

impl NamingStrategy for ProtoNaming {
    fn on_field(&self, catalog: &TypeCatalog, field: &mut Field) {
        field.name = to_field_name(field.source_name());
        field.type_name = TypeMapper::new(catalog.path()).field_type(field.ty()).type_name;
    }

    fn on_enum_value(&self, _catalog: &TypeCatalog, value: &mut EnumValue) {
        value.name = to_enum_value_name(value.source_name());
    }
}
