//! Declaration classification.
//!
//! Pure predicates over a declaration's static shape; exactly one class applies.

use crate::types::{Declaration, DeclarationKind, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationClass {
    Struct,
    Constant,
    Map,
    Other,
}

pub fn is_struct(decl: &Declaration) -> bool {
    matches!(decl.kind, DeclarationKind::Type { .. }) && decl.ty().shape() == Shape::Struct
}

pub fn is_const(decl: &Declaration) -> bool {
    matches!(decl.kind, DeclarationKind::Const { .. })
}

pub fn is_map(decl: &Declaration) -> bool {
    matches!(decl.kind, DeclarationKind::Type { .. }) && decl.ty().shape() == Shape::Map
}

pub fn classify(decl: &Declaration) -> DeclarationClass {
    if is_struct(decl) {
        DeclarationClass::Struct
    } else if is_const(decl) {
        DeclarationClass::Constant
    } else if is_map(decl) {
        DeclarationClass::Map
    } else {
        DeclarationClass::Other
    }
}
