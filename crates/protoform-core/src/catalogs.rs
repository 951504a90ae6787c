use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Host primitive → proto3 scalar. Anything absent passes through unchanged.
pub static PRIMITIVE_TYPES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();
    m.insert("int", PROTO_TYPE_INT64);
    m.insert("int32", PROTO_TYPE_INT64);
    m.insert("int64", PROTO_TYPE_INT64);
    m.insert("float32", PROTO_TYPE_FLOAT);
    m.insert("float64", PROTO_TYPE_DOUBLE);
    m
});

/// Base representations a constant's type may have to be admitted into an enum.
pub static ENUM_BASE_KINDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HashSet::from(["int", "int32", "int64"]));

/// Predeclared integer kinds (classified as `Shape::Integer`).
pub static INTEGER_KINDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "int", "int8", "int16", "int32", "int64", "uint", "uint8", "uint16", "uint32", "uint64",
        "uintptr", "byte", "rune",
    ])
});

/// Predeclared floating point kinds (classified as `Shape::Float`).
pub static FLOAT_KINDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HashSet::from(["float32", "float64"]));

pub const PROTO_TYPE_INT64: &str = "int64";
pub const PROTO_TYPE_FLOAT: &str = "float";
pub const PROTO_TYPE_DOUBLE: &str = "double";

pub const PROTO_SYNTAX: &str = "proto3";
pub const DEFAULT_GO_PACKAGE_PREFIX: &str = "proto/";

/// Name of the zero member synthesized for enums without one (spelling is
/// part of the generated output).
pub const MISSING_DEFAULT_NAME: &str = "UNKOWN";

// Diagnostic codes
pub const CODE_INVALID_ENUM_LITERAL: &str = "PF-W001";
pub const CODE_NOT_A_MAP: &str = "PF-E001";

pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");
