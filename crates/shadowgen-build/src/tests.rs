use crate::{GeneratorConfig, Naming, Output, generate, generate_with_naming};
use proptest::prelude::*;
use shadowgen_schema::{
    error::DiagnosticKind,
    node::{Def, FieldDecl, FieldList, Location, ModulePath, TypeDecl, TypeKind},
    provider::Snapshot,
};

const CLIENT_SRC: &str = r"
    pub mod entities {
        pub struct Order {
            pub id: u64,
        }

        #[auditable]
        pub struct Client {
            pub name: String,
            pub status: ClientStatus,
            pub birthday: ::chrono::NaiveDate,
            #[relation]
            pub orders: Vec<Order>,
        }

        pub enum ClientStatus {
            Active,
            Inactive,
        }
    }
";

const TWO_TYPES_SRC: &str = r"
    pub mod entities {
        #[auditable]
        pub struct Client {
            pub name: String,
        }

        #[auditable]
        pub struct Invoice {
            pub total: i64,
        }
    }
";

fn run(src: &str) -> Output {
    let snapshot = Snapshot::from_source("schema.rs", src).unwrap();

    generate(&snapshot, &GeneratorConfig::default()).unwrap()
}

// Whitespace-free view of rendered text, so assertions survive token
// spacing.
fn compact(text: &str) -> String {
    text.split_whitespace().collect()
}

fn parsed_struct(source: &str, name: &str) -> syn::ItemStruct {
    syn::parse_file(source)
        .unwrap()
        .items
        .into_iter()
        .find_map(|item| match item {
            syn::Item::Struct(s) if s.ident == name => Some(s),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no struct '{name}' in artifact"))
}

fn field_idents(item: &syn::ItemStruct) -> Vec<String> {
    item.fields
        .iter()
        .map(|f| f.ident.as_ref().unwrap().to_string())
        .collect()
}

fn hand_decl(ident: &str, fields: Vec<FieldDecl>) -> TypeDecl {
    TypeDecl {
        def: Def {
            ident: ident.to_string(),
            module: ModulePath::new(),
            location: Location::default(),
        },
        kind: TypeKind::Struct,
        fields: fields.into_iter().collect::<FieldList>(),
        marker_count: 1,
    }
}

fn hand_field(ident: &str, ty: &str) -> FieldDecl {
    FieldDecl {
        ident: ident.to_string(),
        ty: ty.to_string(),
        public: true,
        relation: false,
        location: Location::default(),
    }
}

#[test]
fn client_shadow_mirrors_eligible_fields_in_order() {
    let output = run(CLIENT_SRC);
    let artifact = output.artifact("client_auditable.rs").unwrap();
    let shadow = parsed_struct(&artifact.source, "ClientAuditable");

    assert_eq!(
        field_idents(&shadow),
        [
            "identifier",
            "name",
            "status",
            "birthday",
            "audit_user_id",
            "audit_client_id",
            "audit_date",
            "audit_action",
        ]
    );
}

#[test]
fn relation_fields_never_appear_on_the_shadow() {
    let output = run(CLIENT_SRC);
    let artifact = output.artifact("client_auditable.rs").unwrap();

    assert!(!artifact.source.contains("orders"));
}

#[test]
fn mirrored_fields_keep_their_declared_types() {
    use quote::ToTokens;

    let output = run(CLIENT_SRC);
    let artifact = output.artifact("client_auditable.rs").unwrap();
    let shadow = parsed_struct(&artifact.source, "ClientAuditable");

    let ty_of = |ident: &str| {
        shadow
            .fields
            .iter()
            .find(|f| f.ident.as_ref().unwrap() == ident)
            .map(|f| compact(&f.ty.to_token_stream().to_string()))
            .unwrap()
    };

    assert_eq!(ty_of("name"), "String");
    assert_eq!(ty_of("status"), "ClientStatus");
    assert_eq!(ty_of("birthday"), "::chrono::NaiveDate");
}

#[test]
fn shadow_fields_are_forced_public() {
    let output = run(CLIENT_SRC);
    let artifact = output.artifact("client_auditable.rs").unwrap();
    let shadow = parsed_struct(&artifact.source, "ClientAuditable");

    for field in &shadow.fields {
        assert!(
            matches!(field.vis, syn::Visibility::Public(_)),
            "field '{}' must be pub",
            field.ident.as_ref().unwrap()
        );
    }
}

#[test]
fn shadow_artifact_records_the_original_module() {
    let output = run(CLIENT_SRC);
    let artifact = output.artifact("client_auditable.rs").unwrap();

    assert_eq!(artifact.module.as_deref(), Some("entities"));
}

#[test]
fn top_level_types_fall_back_to_the_default_module() {
    let output = run("#[auditable]\npub struct Loose { pub id: u64 }");
    let artifact = output.artifact("loose_auditable.rs").unwrap();

    assert_eq!(artifact.module.as_deref(), Some("entities"));
}

#[test]
fn configuration_is_keyed_on_the_identifier() {
    let output = run(CLIENT_SRC);
    let source = compact(&output.artifact("client_auditable.rs").unwrap().source);

    assert!(source.contains("pubstructClientAuditableConfiguration;"));
    assert!(source.contains(r#"builder.has_key("identifier");"#));
    assert!(source.contains("EntityTypeConfiguration<ClientAuditable>"));
}

#[test]
fn shadow_projects_onto_the_metadata_base_shape() {
    let output = run(CLIENT_SRC);
    let source = compact(&output.artifact("client_auditable.rs").unwrap().source);

    assert!(source.contains("From<&ClientAuditable>forAuditMetadata"));
}

#[test]
fn registration_artifact_counts_match_discovered_shadows() {
    let output = run(TWO_TYPES_SRC);
    let artifact = output.artifact("audit_context.rs").unwrap();
    let context = parsed_struct(&artifact.source, "AuditContext");

    assert_eq!(
        field_idents(&context),
        ["client_auditables", "invoice_auditables"]
    );
    assert_eq!(artifact.source.matches("apply_configuration").count(), 2);
}

#[test]
fn mapping_artifact_chains_one_call_per_pair() {
    let output = run(TWO_TYPES_SRC);
    let source = compact(&output.artifact("audit_mappings.rs").unwrap().source);

    assert!(source.contains(
        "self.map::<Client,ClientAuditable>().map::<Invoice,InvoiceAuditable>()"
    ));
    assert_eq!(source.matches(".map::<").count(), 2);
}

#[test]
fn zero_marked_types_still_emit_well_known_artifacts() {
    let output = run("pub struct Unmarked { pub id: u64 }");

    let names: Vec<_> = output
        .artifacts
        .iter()
        .map(|a| a.file_name.as_str())
        .collect();
    assert_eq!(
        names,
        [
            "auditable_marker.rs",
            "audit_metadata.rs",
            "audit_context.rs",
            "audit_mappings.rs",
        ]
    );

    let context = compact(&output.artifact("audit_context.rs").unwrap().source);
    assert!(context.contains("pubstructAuditContext{}"));

    let mappings = compact(&output.artifact("audit_mappings.rs").unwrap().source);
    assert!(mappings.contains("fnmap_auditables(self)->Self{self}"));

    assert!(output.diagnostics.is_empty());
}

#[test]
fn metadata_artifact_declares_all_four_fields() {
    let output = run("");
    let artifact = output.artifact("audit_metadata.rs").unwrap();
    let shape = parsed_struct(&artifact.source, "AuditMetadata");

    assert_eq!(
        field_idents(&shape),
        ["audit_user_id", "audit_client_id", "audit_date", "audit_action"]
    );
}

#[test]
fn every_artifact_reparses_as_rust_source() {
    let output = run(CLIENT_SRC);

    for artifact in &output.artifacts {
        assert!(
            syn::parse_file(&artifact.source).is_ok(),
            "artifact '{}' must re-parse",
            artifact.file_name
        );
    }
}

#[test]
fn the_pass_is_idempotent() {
    let first = run(CLIENT_SRC);
    let second = run(CLIENT_SRC);

    assert_eq!(first.artifacts, second.artifacts);
}

#[test]
fn misapplied_marker_degrades_only_the_offending_type() {
    let src = r"
        #[auditable]
        pub enum Status {
            Active,
        }

        #[auditable]
        pub struct Client {
            pub name: String,
        }
    ";
    let output = run(src);

    assert_eq!(
        output
            .diagnostics
            .of_kind(DiagnosticKind::MisappliedMarker)
            .count(),
        1
    );
    assert!(output.has_errors());
    assert!(output.artifact("client_auditable.rs").is_some());
    assert!(output.artifact("status_auditable.rs").is_none());
}

#[test]
fn duplicate_original_names_keep_the_first_declaration() {
    let src = r"
        pub mod billing {
            #[auditable]
            pub struct Client {
                pub iban: String,
            }
        }

        pub mod crm {
            #[auditable]
            pub struct Client {
                pub name: String,
            }
        }
    ";
    let output = run(src);

    assert_eq!(
        output
            .diagnostics
            .of_kind(DiagnosticKind::DuplicateShadowName)
            .count(),
        1
    );

    let artifact = output.artifact("client_auditable.rs").unwrap();
    assert_eq!(artifact.module.as_deref(), Some("billing"));
    assert!(artifact.source.contains("iban"));

    let context = output.artifact("audit_context.rs").unwrap();
    assert_eq!(context.source.matches("apply_configuration").count(), 1);
    assert_eq!(
        compact(&output.artifact("audit_mappings.rs").unwrap().source)
            .matches(".map::<")
            .count(),
        1
    );
}

#[test]
fn case_colliding_collection_idents_are_rejected() {
    let src = r"
        #[auditable]
        pub struct Rate {
            pub value: i64,
        }

        #[auditable]
        pub struct RATE {
            pub value: i64,
        }
    ";
    let output = run(src);

    assert_eq!(
        output
            .diagnostics
            .of_kind(DiagnosticKind::NamingCollision)
            .count(),
        1
    );

    let context = parsed_struct(
        &output.artifact("audit_context.rs").unwrap().source,
        "AuditContext",
    );
    assert_eq!(field_idents(&context), ["rate_auditables"]);
}

#[test]
fn unresolved_field_type_degrades_at_field_granularity() {
    let snapshot = Snapshot::new(vec![hand_decl(
        "Device",
        vec![hand_field("name", "String"), hand_field("broken", "Vec<")],
    )]);
    let output = generate(&snapshot, &GeneratorConfig::default()).unwrap();

    let shadow = parsed_struct(
        &output.artifact("device_auditable.rs").unwrap().source,
        "DeviceAuditable",
    );
    let idents = field_idents(&shadow);
    assert!(idents.contains(&"name".to_string()));
    assert!(!idents.contains(&"broken".to_string()));

    assert_eq!(
        output
            .diagnostics
            .of_kind(DiagnosticKind::UnresolvedFieldType)
            .count(),
        1
    );
    assert!(!output.has_errors());
}

#[test]
fn discovery_order_is_file_order_then_item_order() {
    let snapshot = Snapshot::from_sources([
        ("b.rs", "#[auditable]\npub struct Beta { pub id: u64 }"),
        ("a.rs", "#[auditable]\npub struct Alpha { pub id: u64 }"),
    ])
    .unwrap();
    let output = generate(&snapshot, &GeneratorConfig::default()).unwrap();

    let names: Vec<_> = output
        .artifacts
        .iter()
        .map(|a| a.file_name.as_str())
        .collect();
    assert_eq!(
        names,
        [
            "auditable_marker.rs",
            "audit_metadata.rs",
            "beta_auditable.rs",
            "alpha_auditable.rs",
            "audit_context.rs",
            "audit_mappings.rs",
        ]
    );
}

#[test]
fn configured_suffix_reaches_the_collection_idents() {
    let snapshot = Snapshot::from_source("schema.rs", TWO_TYPES_SRC).unwrap();
    let config = GeneratorConfig {
        collection_suffix: "_history".to_string(),
        ..GeneratorConfig::default()
    };
    let output = generate(&snapshot, &config).unwrap();

    let context = parsed_struct(
        &output.artifact("audit_context.rs").unwrap().source,
        "AuditContext",
    );
    assert_eq!(
        field_idents(&context),
        ["client_auditable_history", "invoice_auditable_history"]
    );
}

#[test]
fn custom_naming_strategies_are_collision_checked() {
    struct Constant;

    impl Naming for Constant {
        fn collection_ident(&self, _shadow_name: &str) -> String {
            "rows".to_string()
        }
    }

    let snapshot = Snapshot::from_source("schema.rs", TWO_TYPES_SRC).unwrap();
    let output =
        generate_with_naming(&snapshot, &GeneratorConfig::default(), &Constant).unwrap();

    assert_eq!(
        output
            .diagnostics
            .of_kind(DiagnosticKind::NamingCollision)
            .count(),
        1
    );
}

proptest! {
    #[test]
    fn generation_is_deterministic_for_any_type_set(
        names in proptest::collection::btree_set("[A-Z][a-z]{1,6}", 1..6)
            .prop_filter("struct names", |set| !set.contains("Self"))
    ) {
        let src: String = names
            .iter()
            .map(|name| format!("#[auditable]\npub struct {name} {{ pub value: u64 }}\n"))
            .collect();

        let first = run(&src);
        let second = run(&src);

        prop_assert_eq!(&first.artifacts, &second.artifacts);

        // marker + metadata + one shadow per type + context + mappings
        prop_assert_eq!(first.artifacts.len(), names.len() + 4);

        let context = first.artifact("audit_context.rs").unwrap();
        prop_assert_eq!(
            context.source.matches("apply_configuration").count(),
            names.len()
        );

        let mappings = compact(&first.artifact("audit_mappings.rs").unwrap().source);
        prop_assert_eq!(mappings.matches(".map::<").count(), names.len());
    }
}
