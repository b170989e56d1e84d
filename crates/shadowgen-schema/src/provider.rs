use crate::node::{Def, FieldDecl, FieldList, Location, ModulePath, TypeDecl, TypeKind};
use proc_macro2::Span;
use quote::ToTokens;
use serde::Serialize;
use thiserror::Error as ThisError;

/// Final attribute path segment that marks a type as auditable.
pub const MARKER_ATTR: &str = "auditable";

/// Final attribute path segment that marks a field as a relationship member.
pub const RELATION_ATTR: &str = "relation";

///
/// TypeProvider
///
/// Narrow discovery interface between a host build and the generator core.
/// The driver only ever sees an ordered list of type declarations; how they
/// were discovered is the provider's concern.
///

pub trait TypeProvider {
    /// Type declarations in discovery order.
    fn type_decls(&self) -> &[TypeDecl];
}

///
/// SnapshotError
///
/// A malformed source file is the one unrecoverable discovery failure: no
/// snapshot is produced and the whole pass does not run.
///

#[derive(Debug, ThisError)]
pub enum SnapshotError {
    #[error("cannot parse '{file}': {source}")]
    Parse { file: String, source: syn::Error },
}

///
/// Snapshot
///
/// Immutable set of type declarations for one generation pass, parsed from
/// Rust source text. Declaration order follows file order, then item order
/// within each file, descending into inline modules depth-first.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct Snapshot {
    types: Vec<TypeDecl>,
}

impl Snapshot {
    #[must_use]
    pub const fn new(types: Vec<TypeDecl>) -> Self {
        Self { types }
    }

    /// Parse one source file into a snapshot.
    pub fn from_source(file: &str, text: &str) -> Result<Self, SnapshotError> {
        Self::from_sources([(file, text)])
    }

    /// Parse an ordered set of `(file name, source text)` pairs.
    pub fn from_sources<'a, I>(sources: I) -> Result<Self, SnapshotError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut types = Vec::new();

        for (file, text) in sources {
            let parsed = syn::parse_file(text).map_err(|source| SnapshotError::Parse {
                file: file.to_string(),
                source,
            })?;

            collect_items(file, &ModulePath::new(), &parsed.items, &mut types);
        }

        Ok(Self { types })
    }

    #[must_use]
    pub fn types(&self) -> &[TypeDecl] {
        &self.types
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeProvider for Snapshot {
    fn type_decls(&self) -> &[TypeDecl] {
        &self.types
    }
}

// Walk items in declaration order, descending into inline modules.
fn collect_items(file: &str, module: &ModulePath, items: &[syn::Item], out: &mut Vec<TypeDecl>) {
    for item in items {
        match item {
            syn::Item::Struct(node) => out.push(struct_decl(file, module, node)),
            syn::Item::Enum(node) => out.push(type_decl(
                file,
                module,
                &node.ident,
                TypeKind::Enum,
                &node.attrs,
                FieldList::default(),
            )),
            syn::Item::Union(node) => out.push(type_decl(
                file,
                module,
                &node.ident,
                TypeKind::Union,
                &node.attrs,
                FieldList::default(),
            )),
            syn::Item::Mod(node) => {
                if let Some((_, items)) = &node.content {
                    let mut inner = module.clone();
                    inner.push(node.ident.to_string());
                    collect_items(file, &inner, items, out);
                }
            }
            _ => {}
        }
    }
}

fn struct_decl(file: &str, module: &ModulePath, node: &syn::ItemStruct) -> TypeDecl {
    let (kind, fields) = match &node.fields {
        syn::Fields::Named(named) => (TypeKind::Struct, field_list(file, named)),
        syn::Fields::Unnamed(_) => (TypeKind::TupleStruct, FieldList::default()),
        syn::Fields::Unit => (TypeKind::UnitStruct, FieldList::default()),
    };

    type_decl(file, module, &node.ident, kind, &node.attrs, fields)
}

fn type_decl(
    file: &str,
    module: &ModulePath,
    ident: &syn::Ident,
    kind: TypeKind,
    attrs: &[syn::Attribute],
    fields: FieldList,
) -> TypeDecl {
    TypeDecl {
        def: Def {
            ident: ident.to_string(),
            module: module.clone(),
            location: location(file, ident.span()),
        },
        kind,
        fields,
        marker_count: count_markers(attrs),
    }
}

fn field_list(file: &str, fields: &syn::FieldsNamed) -> FieldList {
    fields
        .named
        .iter()
        .filter_map(|field| {
            let ident = field.ident.as_ref()?;

            Some(FieldDecl {
                ident: ident.to_string(),
                ty: field.ty.to_token_stream().to_string(),
                public: matches!(field.vis, syn::Visibility::Public(_)),
                relation: has_attr(&field.attrs, RELATION_ATTR),
                location: location(file, ident.span()),
            })
        })
        .collect()
}

fn count_markers(attrs: &[syn::Attribute]) -> usize {
    attrs
        .iter()
        .filter(|attr| last_segment_is(attr, MARKER_ATTR))
        .count()
}

fn has_attr(attrs: &[syn::Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| last_segment_is(attr, name))
}

fn last_segment_is(attr: &syn::Attribute, name: &str) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|segment| segment.ident == name)
}

fn location(file: &str, span: Span) -> Location {
    let start = span.start();

    Location::new(file, start.line, start.column)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r"
        pub mod entities {
            #[auditable]
            pub struct Client {
                pub name: String,
                pub status: ClientStatus,
                birthday: ::chrono::NaiveDate,
                #[relation]
                pub orders: Vec<Order>,
            }

            pub enum ClientStatus {
                Active,
                Inactive,
            }
        }

        #[auditable]
        pub struct Standalone;
    ";

    #[test]
    fn snapshot_collects_declarations_in_source_order() {
        let snapshot = Snapshot::from_source("fixture.rs", FIXTURE).unwrap();
        let idents: Vec<_> = snapshot.types().iter().map(|t| t.def.ident.as_str()).collect();

        assert_eq!(idents, ["Client", "ClientStatus", "Standalone"]);
    }

    #[test]
    fn snapshot_tracks_module_paths() {
        let snapshot = Snapshot::from_source("fixture.rs", FIXTURE).unwrap();

        assert_eq!(snapshot.types()[0].def.path(), "entities::Client");
        assert_eq!(snapshot.types()[2].def.path(), "Standalone");
    }

    #[test]
    fn snapshot_classifies_type_kinds() {
        let snapshot = Snapshot::from_source("fixture.rs", FIXTURE).unwrap();

        assert_eq!(snapshot.types()[0].kind, TypeKind::Struct);
        assert_eq!(snapshot.types()[1].kind, TypeKind::Enum);
        assert_eq!(snapshot.types()[2].kind, TypeKind::UnitStruct);
    }

    #[test]
    fn snapshot_records_markers_and_modifiers() {
        let snapshot = Snapshot::from_source("fixture.rs", FIXTURE).unwrap();
        let client = &snapshot.types()[0];

        assert!(client.is_marked());
        assert!(!snapshot.types()[1].is_marked());

        let fields: Vec<_> = client.fields.iter().collect();
        assert_eq!(fields.len(), 4);
        assert!(fields[0].public);
        assert!(!fields[2].public);
        assert!(fields[3].relation);
        assert!(fields[0].is_mirrorable());
        assert!(!fields[3].is_mirrorable());
    }

    #[test]
    fn field_types_render_as_parseable_text() {
        let snapshot = Snapshot::from_source("fixture.rs", FIXTURE).unwrap();
        let client = &snapshot.types()[0];

        for field in &client.fields {
            assert!(syn::parse_str::<syn::Type>(&field.ty).is_ok(), "{}", field.ty);
        }
    }

    #[test]
    fn locations_point_into_the_source_file() {
        let snapshot = Snapshot::from_source("fixture.rs", FIXTURE).unwrap();
        let client = &snapshot.types()[0];

        assert_eq!(client.def.location.file, "fixture.rs");
        assert!(client.def.location.line > 1);
    }

    #[test]
    fn malformed_source_aborts_snapshot_construction() {
        let result = Snapshot::from_source("bad.rs", "pub struct {");

        assert!(matches!(result, Err(SnapshotError::Parse { .. })));
    }

    #[test]
    fn marker_recognized_by_final_path_segment() {
        let src = r"
            #[shadowgen::auditable]
            pub struct Qualified {
                pub id: u64,
            }
        ";
        let snapshot = Snapshot::from_source("qualified.rs", src).unwrap();

        assert!(snapshot.types()[0].is_marked());
    }
}
