//! Messages built from struct declarations.

use serde::Serialize;

use crate::naming::to_field_name;
use crate::tags::json_name;
use crate::type_map::TypeMapper;
use crate::types::{StructField, TypeRef};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// Display name (snake_case by default).
    pub name: String,
    /// Proto type name (without the `repeated` marker).
    pub type_name: String,
    order: u32,
    is_repeated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    json_name: Option<String>,
    #[serde(skip)]
    source_name: String,
    #[serde(skip)]
    ty: TypeRef,
    #[serde(skip)]
    references: Vec<String>,
}

impl Field {
    /// 1-based position among the struct's exported members; doubles as the wire tag.
    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn is_repeated(&self) -> bool {
        self.is_repeated
    }

    pub fn json_name(&self) -> Option<&str> {
        self.json_name.as_deref()
    }

    /// Member identifier as declared.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Member type as declared.
    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }

    /// Foreign package paths this field's type refers to.
    pub fn references(&self) -> &[String] {
        &self.references
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub name: String,
    fields: Vec<Field>,
}

impl Message {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub(crate) fn fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.iter_mut()
    }
}

/// Build a message from struct members in declared order.
///
/// Unexported members are skipped without consuming an order slot. A tag that
/// does not parse simply leaves `json_name` empty.
pub fn create_message(name: &str, members: &[StructField], mapper: &TypeMapper) -> Message {
    let mut message = Message::new(name);
    let mut order = 0;

    for member in members.iter().filter(|m| m.is_exported()) {
        order += 1;
        let resolved = mapper.field_type(&member.ty);
        message.fields.push(Field {
            name: to_field_name(&member.name),
            type_name: resolved.type_name,
            order,
            is_repeated: resolved.is_repeated,
            json_name: json_name(&member.tag),
            source_name: member.name.clone(),
            ty: member.ty.clone(),
            references: resolved.imports,
        });
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PKG: &str = "example.com/shop";

    fn member(name: &str, ty: TypeRef) -> StructField {
        StructField::new(name, ty)
    }

    #[test]
    fn unexported_members_do_not_consume_order() {
        let members = vec![
            member("Visible", TypeRef::basic("int")),
            member("hidden", TypeRef::basic("int")),
            member("Other", TypeRef::basic("string")),
        ];
        let msg = create_message("Sample", &members, &TypeMapper::new(PKG));

        let summary: Vec<(&str, u32)> = msg
            .fields()
            .iter()
            .map(|f| (f.name.as_str(), f.order()))
            .collect();
        assert_eq!(summary, vec![("visible", 1), ("other", 2)]);
    }

    #[test]
    fn field_attributes() {
        let members = vec![
            member("ID", TypeRef::basic("int64")).with_tag(r#"json:"id""#),
            member("Tags", TypeRef::slice(TypeRef::basic("string"))),
            member("Score", TypeRef::basic("float64")).with_tag(r#"json:"score"#),
        ];
        let msg = create_message("Item", &members, &TypeMapper::new(PKG));
        let [id, tags, score] = msg.fields() else {
            panic!("expected three fields");
        };

        assert_eq!(id.name, "id");
        assert_eq!(id.type_name, "int64");
        assert_eq!(id.json_name(), Some("id"));
        assert_eq!(id.source_name(), "ID");

        assert_eq!(tags.name, "tags");
        assert_eq!(tags.type_name, "string");
        assert!(tags.is_repeated());

        // malformed tag
        assert_eq!(score.type_name, "double");
        assert_eq!(score.json_name(), None);
    }

    #[test]
    fn foreign_references_are_recorded() {
        let invoice = TypeRef::named("example.com/billing", "Invoice", TypeRef::structure(vec![]));
        let members = vec![member("Invoice", TypeRef::pointer(invoice))];
        let msg = create_message("Order", &members, &TypeMapper::new(PKG));
        assert_eq!(msg.fields()[0].references(), ["example.com/billing".to_string()]);
    }

    #[test]
    fn empty_struct() {
        let msg = create_message("Empty", &[], &TypeMapper::new(PKG));
        assert_eq!(msg.name, "Empty");
        assert!(msg.fields().is_empty());
    }
}
