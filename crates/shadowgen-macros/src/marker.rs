use darling::{Error as DarlingError, ast::NestedMeta};
use proc_macro2::TokenStream;
use quote::quote;
use syn::Item;

pub fn auditable(args: TokenStream, input: TokenStream) -> TokenStream {
    match expand(args, input) {
        Ok(tokens) => tokens,
        Err(err) => err.write_errors(),
    }
}

fn expand(args: TokenStream, input: TokenStream) -> Result<TokenStream, DarlingError> {
    let meta = NestedMeta::parse_meta_list(args)?;
    if !meta.is_empty() {
        return Err(DarlingError::custom("#[auditable] takes no arguments"));
    }

    let mut item = match syn::parse2::<Item>(input)? {
        Item::Struct(item) => item,
        other => {
            return Err(DarlingError::custom(
                "#[auditable] applies only to structs with named fields",
            )
            .with_span(&other));
        }
    };

    // The outer attribute is consumed by expansion; any occurrence left on
    // the item is a repeat.
    if let Some(repeat) = item
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("auditable"))
    {
        return Err(DarlingError::custom("#[auditable] cannot be repeated").with_span(repeat));
    }

    if matches!(item.fields, syn::Fields::Unnamed(_)) {
        return Err(DarlingError::custom(
            "#[auditable] applies only to structs with named fields",
        )
        .with_span(&item.ident));
    }

    for field in item.fields.iter_mut() {
        field.attrs.retain(|attr| !attr.path().is_ident("relation"));
    }

    Ok(quote!(#item))
}
