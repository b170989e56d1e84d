//! Process-wide constant artifacts, emitted exactly once per pass even when
//! zero types are marked: downstream artifacts and host code depend on
//! these declarations existing.

use crate::{
    artifact::{Artifact, ArtifactBuilder},
    config::GeneratorConfig,
    shadow,
};
use quote::quote;
use shadowgen_schema::node::AUDIT_METADATA_FIELDS;

// Source text of the marker attribute, for hosts that vendor their own
// macro crate instead of depending on shadowgen-macros. Kept in sync with
// the shipped crate by the macro tests.
const MARKER_SOURCE: &str = r##"use proc_macro::TokenStream;
use quote::quote;
use syn::{Error, ItemStruct, parse_macro_input};

/// Marks a data entity for audit shadow generation.
///
/// Takes no arguments, cannot be repeated, and applies only to structs with
/// named fields. `#[relation]` field markers are stripped on expansion so
/// the annotated struct compiles unchanged.
#[proc_macro_attribute]
pub fn auditable(args: TokenStream, input: TokenStream) -> TokenStream {
    if !args.is_empty() {
        return Error::new(
            proc_macro2::Span::call_site(),
            "#[auditable] takes no arguments",
        )
        .to_compile_error()
        .into();
    }

    let mut item = parse_macro_input!(input as ItemStruct);
    for field in item.fields.iter_mut() {
        field.attrs.retain(|attr| !attr.path().is_ident("relation"));
    }

    quote!(#item).into()
}
"##;

pub(crate) fn marker_artifact(config: &GeneratorConfig) -> Artifact {
    Artifact::raw(
        "auditable_marker.rs",
        Some(config.default_module.clone()),
        MARKER_SOURCE,
    )
}

pub(crate) fn metadata_artifact(config: &GeneratorConfig) -> Artifact {
    let fields = AUDIT_METADATA_FIELDS.iter().map(shadow::meta_field_tokens);

    ArtifactBuilder::new("audit_metadata.rs")
        .module(config.default_module.clone())
        .section(
            "metadata-shape",
            quote! {
                /// Fixed audit metadata shape shared by every generated
                /// shadow type.
                pub struct AuditMetadata {
                    #(#fields,)*
                }
            },
        )
        .render()
}
