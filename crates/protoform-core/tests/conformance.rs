use protoform_core::{render_proto, PackageManifest, RenderOptions, TypeCatalog};
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Helper: Full pipeline (manifest → ingest → canonicalize)
// ---------------------------------------------------------------------------
fn full_pipeline(input: &str) -> TypeCatalog {
    let manifest: PackageManifest = serde_yaml::from_str(input).expect("invalid manifest");
    TypeCatalog::from_manifest(&manifest)
}

fn render(catalog: &TypeCatalog) -> String {
    render_proto(catalog, &RenderOptions::default())
}

// ===========================================================================
// Conformance fixtures
// ===========================================================================

#[test]
fn conformance_basic_message() {
    let input = r#"
name: shop
path: example.com/shop
declarations:
  - name: User
    package: example.com/shop
    decl: type
    type:
      kind: named
      package: example.com/shop
      name: User
      underlying:
        kind: struct
        fields:
          - name: ID
            tag: 'json:"id"'
            type: { kind: basic, name: int }
          - name: FirstName
            tag: 'json:"first_name,omitempty"'
            type: { kind: basic, name: string }
          - name: password
            type: { kind: basic, name: string }
          - name: Score
            type: { kind: basic, name: float32 }
          - name: Balance
            type: { kind: basic, name: float64 }
"#;

    let catalog = full_pipeline(input);

    assert_eq!(catalog.messages().len(), 1);
    assert!(catalog.diagnostics().is_empty());

    let user = &catalog.messages()[0];
    assert_eq!(user.name, "User");
    let fields: Vec<(&str, &str, u32)> = user
        .fields()
        .iter()
        .map(|f| (f.name.as_str(), f.type_name.as_str(), f.order()))
        .collect();
    assert_eq!(
        fields,
        vec![
            ("id", "int64", 1),
            ("first_name", "string", 2),
            ("score", "float", 3),
            ("balance", "double", 4),
        ]
    );
    assert_eq!(user.fields()[1].json_name(), Some("first_name"));
    assert_eq!(user.fields()[2].json_name(), None);
}

#[test]
fn conformance_enum_with_alias_and_missing_default() {
    let input = r#"
name: shop
path: example.com/shop
declarations:
  - name: Color
    package: example.com/shop
    decl: type
    type: { kind: named, package: example.com/shop, name: Color, underlying: { kind: basic, name: int32 } }
  - name: ColorRed
    package: example.com/shop
    decl: const
    value: "1"
    type: { kind: named, package: example.com/shop, name: Color, underlying: { kind: basic, name: int32 } }
  - name: ColorCrimson
    package: example.com/shop
    decl: const
    value: "0x1"
    type: { kind: named, package: example.com/shop, name: Color, underlying: { kind: basic, name: int32 } }
  - name: ColorBlue
    package: example.com/shop
    decl: const
    value: "2"
    type: { kind: named, package: example.com/shop, name: Color, underlying: { kind: basic, name: int32 } }
"#;

    let catalog = full_pipeline(input);
    let color = catalog.enum_by_name("Color").expect("Color enum");

    assert!(color.allow_alias());
    assert!(color.missing_default());
    assert!(!color.has_gaps());
    let values: Vec<(&str, i64)> = color
        .values()
        .iter()
        .map(|v| (v.name.as_str(), v.value()))
        .collect();
    assert_eq!(
        values,
        vec![("COLOR_CRIMSON", 1), ("COLOR_RED", 1), ("COLOR_BLUE", 2)]
    );

    let rendered = render(&catalog);
    assert!(rendered.contains(
        "enum Color {\n  option allow_alias = true;\n  UNKOWN = 0;\n  COLOR_CRIMSON = 1;\n  COLOR_RED = 1;\n  COLOR_BLUE = 2;\n}"
    ));
}

#[test]
fn conformance_cross_package_references() {
    let input = r#"
name: shop
path: example.com/shop
declarations:
  - name: Order
    package: example.com/shop
    decl: type
    type:
      kind: named
      package: example.com/shop
      name: Order
      underlying:
        kind: struct
        fields:
          - name: Customer
            type:
              kind: pointer
              elem: { kind: named, package: example.com/shop, name: Customer, underlying: { kind: struct } }
          - name: Invoices
            type:
              kind: slice
              elem: { kind: named, package: example.com/billing, name: Invoice, underlying: { kind: struct } }
          - name: Refund
            type: { kind: named, package: example.com/billing, name: Invoice, underlying: { kind: struct } }
  - name: Customer
    package: example.com/shop
    decl: type
    type: { kind: named, package: example.com/shop, name: Customer, underlying: { kind: struct } }
"#;

    let catalog = full_pipeline(input);

    assert_eq!(catalog.imports(), ["example.com/billing".to_string()]);
    let order = catalog.message("Order").expect("Order message");
    let [customer, invoices, refund] = order.fields() else {
        panic!("expected three fields");
    };
    assert_eq!(customer.type_name, "Customer");
    assert_eq!(invoices.type_name, "example.com/billing.Invoice");
    assert!(invoices.is_repeated());
    assert_eq!(refund.type_name, "example.com/billing.Invoice");

    let names: Vec<&str> = catalog.messages().iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Customer", "Order"]);
    assert!(render(&catalog).contains("import \"example.com/billing.proto\";"));
}

#[test]
fn conformance_map_field_and_declaration() {
    let input = r#"
name: shop
path: example.com/shop
declarations:
  - name: Labels
    package: example.com/shop
    decl: type
    type:
      kind: named
      package: example.com/shop
      name: Labels
      underlying:
        kind: map
        key: { kind: basic, name: string }
        elem: { kind: basic, name: int }
  - name: Product
    package: example.com/shop
    decl: type
    type:
      kind: named
      package: example.com/shop
      name: Product
      underlying:
        kind: struct
        fields:
          - name: Prices
            type:
              kind: map
              key: { kind: basic, name: string }
              elem: { kind: basic, name: float64 }
          - name: Labels
            type:
              kind: named
              package: example.com/shop
              name: Labels
              underlying: { kind: map, key: { kind: basic, name: string }, elem: { kind: basic, name: int } }
"#;

    let catalog = full_pipeline(input);

    let labels = catalog.map_by_name("Labels").expect("Labels map");
    assert_eq!(labels.key_type, "string");
    assert_eq!(labels.elem_type, "int");

    let product = catalog.message("Product").expect("Product message");
    assert_eq!(product.fields()[0].type_name, "map<string,double>");
    assert_eq!(product.fields()[1].type_name, "map<string,int64>");
    assert!(!product.fields()[0].is_repeated());
}

#[test]
fn conformance_bad_constant_does_not_abort() {
    let input = r#"
name: shop
path: example.com/shop
declarations:
  - name: LevelBroken
    package: example.com/shop
    decl: const
    value: "not-a-number"
    type: { kind: named, package: example.com/shop, name: Level, underlying: { kind: basic, name: int } }
  - name: LevelLow
    package: example.com/shop
    decl: const
    value: "0"
    type: { kind: named, package: example.com/shop, name: Level, underlying: { kind: basic, name: int } }
  - name: ModeFast
    package: example.com/shop
    decl: const
    value: "3"
    type: { kind: named, package: example.com/shop, name: Mode, underlying: { kind: basic, name: int64 } }
  - name: Item
    package: example.com/shop
    decl: type
    type: { kind: named, package: example.com/shop, name: Item, underlying: { kind: struct } }
"#;

    let catalog = full_pipeline(input);

    assert_eq!(catalog.diagnostics().len(), 1);
    assert_eq!(catalog.diagnostics()[0].declaration, "LevelBroken");

    let level = catalog.enum_by_name("Level").expect("Level enum");
    assert_eq!(level.values().len(), 1);
    assert!(!level.missing_default());
    assert_eq!(catalog.enum_by_name("Mode").expect("Mode enum").values().len(), 1);
    assert!(catalog.message("Item").is_some());
}

#[test]
fn conformance_full_document() {
    let input = r#"
name: zoo
path: example.com/zoo
declarations:
  - name: Keeper
    package: example.com/zoo
    decl: type
    type:
      kind: named
      package: example.com/zoo
      name: Keeper
      underlying:
        kind: struct
        fields:
          - name: Name
            tag: 'json:"name"'
            type: { kind: basic, name: string }
  - name: Animal
    package: example.com/zoo
    decl: type
    type:
      kind: named
      package: example.com/zoo
      name: Animal
      underlying:
        kind: struct
        fields:
          - name: Kind
            type: { kind: named, package: example.com/zoo, name: Kind, underlying: { kind: basic, name: int } }
          - name: Keepers
            type:
              kind: slice
              elem: { kind: pointer, elem: { kind: named, package: example.com/zoo, name: Keeper, underlying: { kind: struct } } }
  - name: KindBird
    package: example.com/zoo
    decl: const
    value: "2"
    type: { kind: named, package: example.com/zoo, name: Kind, underlying: { kind: basic, name: int } }
  - name: KindCat
    package: example.com/zoo
    decl: const
    value: "0"
    type: { kind: named, package: example.com/zoo, name: Kind, underlying: { kind: basic, name: int } }
"#;

    let catalog = full_pipeline(input);
    let expected = r#"syntax = "proto3";
package zoo;

option go_package = "proto/example.com/zoo";

enum Kind {
  KIND_CAT = 0;
  KIND_BIRD = 2;
}

message Animal {
  Kind kind = 1;
  repeated Keeper keepers = 2;
}

message Keeper {
  string name = 1 [json_name="name"];
}
"#;
    assert_eq!(render(&catalog), expected);
}
