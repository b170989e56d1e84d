use proc_macro::TokenStream;

mod marker;

/// Marks a data entity for audit shadow generation.
///
/// Takes no arguments, cannot be repeated, and applies only to structs with
/// named fields. `#[relation]` field markers are stripped on expansion so
/// the annotated struct compiles unchanged; the generator reads them from
/// source before expansion.
#[proc_macro_attribute]
pub fn auditable(args: TokenStream, input: TokenStream) -> TokenStream {
    marker::auditable(args.into(), input.into()).into()
}
