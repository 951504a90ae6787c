//! proto3 text rendering of a canonical `TypeCatalog`.

use crate::catalog::TypeCatalog;
use crate::catalogs::{DEFAULT_GO_PACKAGE_PREFIX, MISSING_DEFAULT_NAME, PROTO_SYNTAX};
use crate::enums::Enum;
use crate::message::{Field, Message};

#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Prepended to the package path in `option go_package`.
    pub go_package_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            go_package_prefix: DEFAULT_GO_PACKAGE_PREFIX.into(),
        }
    }
}

/// `<package name>.proto`
pub fn output_file_name(catalog: &TypeCatalog) -> String {
    format!("{}.proto", catalog.name())
}

/// Render the catalog as a proto3 document. Call after `canonicalize`.
pub fn render_proto(catalog: &TypeCatalog, options: &RenderOptions) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("syntax = \"{PROTO_SYNTAX}\";"));
    lines.push(format!("package {};", catalog.name()));
    lines.push(String::new());
    lines.push(format!(
        "option go_package = \"{}{}\";",
        options.go_package_prefix,
        catalog.path()
    ));
    for import in catalog.imports() {
        lines.push(format!("import \"{import}.proto\";"));
    }

    for e in catalog.enums() {
        lines.push(String::new());
        render_enum(&mut lines, e);
    }

    for message in catalog.messages() {
        lines.push(String::new());
        render_message(&mut lines, message);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_enum(lines: &mut Vec<String>, e: &Enum) {
    lines.push(format!("enum {} {{", e.name));
    if e.allow_alias() {
        lines.push("  option allow_alias = true;".into());
    }
    if e.missing_default() {
        lines.push(format!("  {MISSING_DEFAULT_NAME} = 0;"));
    }
    for v in e.values() {
        lines.push(format!("  {} = {};", v.name, v.value()));
    }
    lines.push("}".into());
}

fn render_message(lines: &mut Vec<String>, message: &Message) {
    lines.push(format!("message {} {{", message.name));
    for field in message.fields() {
        lines.push(render_field(field));
    }
    lines.push("}".into());
}

fn render_field(field: &Field) -> String {
    if field.is_repeated() {
        return format!(
            "  repeated {} {} = {};",
            field.type_name,
            field.name,
            field.order()
        );
    }
    match field.json_name() {
        Some(json) => format!(
            "  {} {} = {} [json_name=\"{}\"];",
            field.type_name,
            field.name,
            field.order(),
            json
        ),
        None => format!("  {} {} = {};", field.type_name, field.name, field.order()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Declaration, StructField, TypeRef};
    use pretty_assertions::assert_eq;

    const PKG: &str = "example.com/shop";

    #[test]
    fn empty_catalog() {
        let catalog = TypeCatalog::new("shop", PKG);
        let out = render_proto(&catalog, &RenderOptions::default());
        assert_eq!(
            out,
            "syntax = \"proto3\";\npackage shop;\n\noption go_package = \"proto/example.com/shop\";\n"
        );
        assert_eq!(output_file_name(&catalog), "shop.proto");
    }

    #[test]
    fn enum_and_message_blocks() {
        let status = TypeRef::named(PKG, "Status", TypeRef::basic("int"));
        let mut catalog = TypeCatalog::new("shop", PKG);
        catalog.ingest_all(&[
            Declaration::new_const(PKG, "StatusActive", status.clone(), "1"),
            Declaration::new_const(PKG, "StatusEnabled", status, "1"),
            Declaration::new_type(
                PKG,
                "User",
                TypeRef::named(
                    PKG,
                    "User",
                    TypeRef::structure(vec![
                        StructField::new("ID", TypeRef::basic("int")).with_tag(r#"json:"id""#),
                        StructField::new("Emails", TypeRef::slice(TypeRef::basic("string")))
                            .with_tag(r#"json:"emails""#),
                    ]),
                ),
            ),
        ]);
        catalog.canonicalize();

        let out = render_proto(
            &catalog,
            &RenderOptions {
                go_package_prefix: String::new(),
            },
        );
        let expected = r#"syntax = "proto3";
package shop;

option go_package = "example.com/shop";

enum Status {
  option allow_alias = true;
  UNKOWN = 0;
  STATUS_ACTIVE = 1;
  STATUS_ENABLED = 1;
}

message User {
  int64 id = 1 [json_name="id"];
  repeated string emails = 2;
}
"#;
        assert_eq!(out, expected);
    }
}
