//! Protoform core: turns exported type declarations into a canonical
//! schema model and renders it as a proto3 document.

pub mod catalog;
pub mod catalogs;
pub mod classifier;
pub mod enums;
pub mod error;
pub mod maps;
pub mod message;
pub mod naming;
pub mod render;
pub mod strategy;
pub mod tags;
pub mod type_map;
pub mod types;

pub use catalog::{Ingested, TypeCatalog};
pub use catalogs::GENERATOR_VERSION;
pub use classifier::{classify, DeclarationClass};
pub use enums::{Enum, EnumValue};
pub use error::CatalogError;
pub use maps::Map;
pub use message::{create_message, Field, Message};
pub use render::{output_file_name, render_proto, RenderOptions};
pub use strategy::{NamingStrategy, ProtoNaming};
pub use type_map::{ResolvedType, TypeMapper};
pub use types::*;
