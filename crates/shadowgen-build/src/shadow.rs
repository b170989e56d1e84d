use crate::{
    artifact::{Artifact, ArtifactBuilder},
    config::GeneratorConfig,
};
use convert_case::{Case, Casing};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use shadowgen_schema::{
    CONFIGURATION_SUFFIX, SHADOW_SUFFIX,
    error::{Diagnostic, DiagnosticKind, Diagnostics},
    node::{AUDIT_METADATA_FIELDS, FieldDecl, IDENTIFIER_FIELD, MetaField, TypeDecl},
};

/// Deterministic shadow type name for an original type name.
#[must_use]
pub fn shadow_name(original: &str) -> String {
    format!("{original}{SHADOW_SUFFIX}")
}

///
/// ShadowParts
///
/// Per-type emission result before the driver attaches the collection
/// ident: the artifact plus the (original, shadow) name pair.
///

pub(crate) struct ShadowParts {
    pub artifact: Artifact,
    pub original: String,
    pub shadow: String,
}

/// Field Extractor.
///
/// Ordered eligible persistent fields of a declaration: property-shaped
/// members without the relationship marker. An empty result is valid.
pub(crate) fn eligible_fields(decl: &TypeDecl) -> impl Iterator<Item = &FieldDecl> {
    decl.fields.iter().filter(|field| field.is_mirrorable())
}

// Field Translator: identical ident and declared type, forced pub so the
// shadow keeps the public-read/public-write contract.
fn translate_field(field: &FieldDecl, diags: &mut Diagnostics) -> Option<TokenStream> {
    let Ok(ty) = syn::parse_str::<syn::Type>(&field.ty) else {
        diags.add(Diagnostic::warning(
            DiagnosticKind::UnresolvedFieldType,
            field.location.clone(),
            format!(
                "cannot resolve type '{}' of field '{}'; field skipped",
                field.ty, field.ident
            ),
        ));
        return None;
    };

    let ident = format_ident!("{}", field.ident);

    Some(quote!(pub #ident: #ty))
}

// Metadata types are process-wide constants; failing to parse one is a bug,
// not an input error.
pub(crate) fn meta_field_tokens(field: &MetaField) -> TokenStream {
    let ident = format_ident!("{}", field.ident);
    let ty: syn::Type = syn::parse_str(field.ty)
        .unwrap_or_else(|_| panic!("invalid metadata type: {}", field.ty));

    quote!(pub #ident: #ty)
}

/// Shadow Type Emitter.
///
/// Emits the shadow struct (identifier, mirrored fields in source order,
/// fixed metadata fields), its projection onto the metadata base shape, and
/// the companion configuration keyed on the identifier. Returns `None` when
/// the declaration does not resolve to a usable ident; the rest of the pass
/// is unaffected.
pub(crate) fn generate(
    decl: &TypeDecl,
    config: &GeneratorConfig,
    diags: &mut Diagnostics,
) -> Option<ShadowParts> {
    let original = decl.def.ident.clone();
    let shadow = shadow_name(&original);

    let Ok(shadow_ident) = syn::parse_str::<syn::Ident>(&shadow) else {
        diags.add(Diagnostic::warning(
            DiagnosticKind::UnresolvedType,
            decl.def.location.clone(),
            format!(
                "cannot resolve '{}' to a shadow type ident; no output produced for this type",
                decl.def.path()
            ),
        ));
        return None;
    };

    let mirrored: Vec<TokenStream> = eligible_fields(decl)
        .filter_map(|field| translate_field(field, diags))
        .collect();
    let identifier = meta_field_tokens(&IDENTIFIER_FIELD);
    let metadata: Vec<TokenStream> = AUDIT_METADATA_FIELDS.iter().map(meta_field_tokens).collect();

    let runtime = config.runtime_path();
    let config_ident = format_ident!("{}{}", shadow, CONFIGURATION_SUFFIX);
    let key = IDENTIFIER_FIELD.ident;

    let meta_assigns = AUDIT_METADATA_FIELDS.iter().map(|field| {
        let ident = format_ident!("{}", field.ident);
        quote!(#ident: row.#ident.clone())
    });

    let module = if decl.def.module.is_empty() {
        config.default_module.clone()
    } else {
        decl.def.module.to_string()
    };

    let artifact = ArtifactBuilder::new(format!("{}.rs", shadow.to_case(Case::Snake)))
        .module(module)
        .section(
            "shadow-type",
            quote! {
                pub struct #shadow_ident {
                    #identifier,
                    #(#mirrored,)*
                    #(#metadata,)*
                }
            },
        )
        .section(
            "metadata-projection",
            quote! {
                impl ::core::convert::From<&#shadow_ident> for AuditMetadata {
                    fn from(row: &#shadow_ident) -> Self {
                        Self {
                            #(#meta_assigns),*
                        }
                    }
                }
            },
        )
        .section(
            "configuration",
            quote! {
                pub struct #config_ident;

                impl #runtime::EntityTypeConfiguration<#shadow_ident> for #config_ident {
                    fn configure(&self, builder: &mut #runtime::EntityTypeBuilder<#shadow_ident>) {
                        builder.has_key(#key);
                    }
                }
            },
        )
        .render();

    Some(ShadowParts {
        artifact,
        original,
        shadow,
    })
}
