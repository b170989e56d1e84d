use crate::{
    NamePair,
    artifact::{Artifact, ArtifactBuilder},
    config::GeneratorConfig,
};
use quote::{format_ident, quote};

/// Mapping Emitter.
///
/// One chainable `map::<Original, Shadow>()` call per name pair, in input
/// order, returning the mapping for further chaining. Duplicate pairs are a
/// caller error; the driver filters them before this emitter runs.
pub(crate) fn generate(pairs: &[NamePair], config: &GeneratorConfig) -> Artifact {
    let runtime = config.runtime_path();

    let calls = pairs.iter().map(|pair| {
        let original = format_ident!("{}", pair.original);
        let shadow = format_ident!("{}", pair.shadow);

        quote!(.map::<#original, #shadow>())
    });

    ArtifactBuilder::new("audit_mappings.rs")
        .module(config.default_module.clone())
        .section(
            "mapping-extension",
            quote! {
                pub trait AuditMappingExt: Sized {
                    /// Register every generated original-to-shadow mapping,
                    /// then return the mapping for further chaining.
                    fn map_auditables(self) -> Self;
                }

                impl AuditMappingExt for #runtime::AuditEntityMapping {
                    fn map_auditables(self) -> Self {
                        self #(#calls)*
                    }
                }
            },
        )
        .render()
}
