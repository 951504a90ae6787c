//! Host type → proto type name resolution.

use serde::Serialize;

use crate::catalogs::PRIMITIVE_TYPES;
use crate::types::TypeRef;

/// Map a predeclared primitive to its proto scalar; unknown names pass through.
pub fn map_primitive(name: &str) -> &str {
    PRIMITIVE_TYPES.get(name).copied().unwrap_or(name)
}

/// Outcome of resolving one struct member's type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedType {
    pub type_name: String,
    pub is_repeated: bool,
    /// Foreign package paths emitted as qualified references, first-seen order.
    pub imports: Vec<String>,
}

/// Resolves type references relative to the package being generated.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    package: &'a str,
}

impl<'a> TypeMapper<'a> {
    pub fn new(package: &'a str) -> Self {
        Self { package }
    }

    pub fn package(&self) -> &str {
        self.package
    }

    /// Resolve a struct member type.
    ///
    /// Dispatch is on the underlying shape: sequences become repeated fields
    /// of their element type, maps become `map<K,V>`, basics/structs/pointers
    /// go through scalar resolution and anything else is emitted as its
    /// literal declared type string.
    pub fn field_type(&self, ty: &TypeRef) -> ResolvedType {
        let mut imports = Vec::new();
        let (type_name, is_repeated) = match ty.underlying() {
            TypeRef::Slice { elem } => (self.scalar(elem, &mut imports), true),
            TypeRef::Map { key, elem } => (self.map_entry(key, elem, &mut imports), false),
            TypeRef::Basic { .. } | TypeRef::Struct { .. } | TypeRef::Pointer { .. } => {
                (self.scalar(ty, &mut imports), false)
            }
            TypeRef::Named { .. } | TypeRef::Other { .. } => (ty.type_string(), false),
        };
        ResolvedType {
            type_name,
            is_repeated,
            imports,
        }
    }

    /// Bare name for local types, `package.Name` for foreign ones.
    pub fn reference(&self, package: &str, name: &str) -> String {
        if package.is_empty() || package == self.package {
            name.to_string()
        } else {
            format!("{package}.{name}")
        }
    }

    pub fn is_foreign(&self, package: &str) -> bool {
        !package.is_empty() && package != self.package
    }

    fn scalar(&self, ty: &TypeRef, imports: &mut Vec<String>) -> String {
        match ty {
            TypeRef::Basic { name } => map_primitive(name).to_string(),
            TypeRef::Named { package, name, .. } => {
                if self.is_foreign(package) && !imports.contains(package) {
                    imports.push(package.clone());
                }
                self.reference(package, name)
            }
            TypeRef::Pointer { elem } | TypeRef::Slice { elem } => self.scalar(elem, imports),
            TypeRef::Map { key, elem } => self.map_entry(key, elem, imports),
            TypeRef::Struct { .. } | TypeRef::Other { .. } => ty.type_string(),
        }
    }

    fn map_entry(&self, key: &TypeRef, elem: &TypeRef, imports: &mut Vec<String>) -> String {
        let key = self.scalar(key, imports);
        let elem = self.scalar(elem, imports);
        format!("map<{key},{elem}>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PKG: &str = "example.com/shop";
    const OTHER: &str = "example.com/billing";

    fn local(name: &str) -> TypeRef {
        TypeRef::named(PKG, name, TypeRef::structure(vec![]))
    }

    fn foreign(name: &str) -> TypeRef {
        TypeRef::named(OTHER, name, TypeRef::structure(vec![]))
    }

    #[test]
    fn primitive_table_is_exact() {
        assert_eq!(map_primitive("int"), "int64");
        assert_eq!(map_primitive("int32"), "int64");
        assert_eq!(map_primitive("int64"), "int64");
        assert_eq!(map_primitive("float32"), "float");
        assert_eq!(map_primitive("float64"), "double");
        assert_eq!(map_primitive("string"), "string");
        assert_eq!(map_primitive("bool"), "bool");
        assert_eq!(map_primitive("uint8"), "uint8");
        assert_eq!(map_primitive("Int"), "Int");
    }

    #[test]
    fn local_struct_and_pointer_are_bare() {
        let mapper = TypeMapper::new(PKG);
        assert_eq!(mapper.field_type(&local("Address")).type_name, "Address");
        let ptr = mapper.field_type(&TypeRef::pointer(local("Address")));
        assert_eq!(ptr.type_name, "Address");
        assert!(ptr.imports.is_empty());
        assert!(!ptr.is_repeated);
    }

    #[test]
    fn foreign_reference_is_qualified_and_imported() {
        let mapper = TypeMapper::new(PKG);
        let resolved = mapper.field_type(&TypeRef::pointer(foreign("Invoice")));
        assert_eq!(resolved.type_name, "example.com/billing.Invoice");
        assert_eq!(resolved.imports, vec![OTHER.to_string()]);
    }

    #[test]
    fn sequences_are_repeated_element_types() {
        let mapper = TypeMapper::new(PKG);
        let ints = mapper.field_type(&TypeRef::slice(TypeRef::basic("int")));
        assert_eq!(ints.type_name, "int64");
        assert!(ints.is_repeated);

        let items = mapper.field_type(&TypeRef::slice(TypeRef::pointer(local("Item"))));
        assert_eq!(items.type_name, "Item");
        assert!(items.is_repeated);
        assert!(!items.type_name.contains("[]"));
    }

    #[test]
    fn named_sequence_uses_underlying_element() {
        let mapper = TypeMapper::new(PKG);
        let tags = TypeRef::named(PKG, "Tags", TypeRef::slice(TypeRef::basic("string")));
        let resolved = mapper.field_type(&tags);
        assert_eq!(resolved.type_name, "string");
        assert!(resolved.is_repeated);
    }

    #[test]
    fn maps_resolve_key_and_value_independently() {
        let mapper = TypeMapper::new(PKG);
        let ty = TypeRef::map(TypeRef::basic("string"), TypeRef::slice(foreign("Invoice")));
        let resolved = mapper.field_type(&ty);
        assert_eq!(resolved.type_name, "map<string,example.com/billing.Invoice>");
        assert!(!resolved.is_repeated);
        assert_eq!(resolved.imports, vec![OTHER.to_string()]);
    }

    #[test]
    fn named_basic_resolves_as_reference() {
        let mapper = TypeMapper::new(PKG);
        let status = TypeRef::named(PKG, "Status", TypeRef::basic("int"));
        assert_eq!(mapper.field_type(&status).type_name, "Status");
    }

    #[test]
    fn unknown_shape_falls_back_to_declared_string() {
        let mapper = TypeMapper::new(PKG);
        let handler = TypeRef::named(OTHER, "Handler", TypeRef::Other { repr: "func()".into() });
        let resolved = mapper.field_type(&handler);
        assert_eq!(resolved.type_name, "example.com/billing.Handler");
        assert!(resolved.imports.is_empty());

        let chan = TypeRef::Other {
            repr: "chan int".into(),
        };
        assert_eq!(mapper.field_type(&chan).type_name, "chan int");
    }
}
