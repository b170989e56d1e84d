use crate::{
    GenerationResult,
    artifact::{Artifact, ArtifactBuilder},
    config::GeneratorConfig,
};
use quote::{format_ident, quote};
use shadowgen_schema::CONFIGURATION_SUFFIX;

/// Registration Emitter.
///
/// One collection declaration per shadow type plus the model-creation hook
/// applying each shadow's configuration, in input order. Empty input yields
/// an empty context and an empty hook body, which is valid. Identical input
/// lists render byte-identical output.
pub(crate) fn generate(results: &[GenerationResult], config: &GeneratorConfig) -> Artifact {
    let runtime = config.runtime_path();

    let collections = results.iter().map(|result| {
        let collection = format_ident!("{}", result.collection);
        let shadow = format_ident!("{}", result.shadow);

        quote!(pub #collection: #runtime::Collection<#shadow>)
    });

    let registrations = results.iter().map(|result| {
        let configuration = format_ident!("{}{}", result.shadow, CONFIGURATION_SUFFIX);

        quote!(builder.apply_configuration(&#configuration);)
    });

    ArtifactBuilder::new("audit_context.rs")
        .section(
            "collections",
            quote! {
                pub struct AuditContext {
                    #(#collections,)*
                }
            },
        )
        .section(
            "model-creation-hook",
            quote! {
                impl AuditContext {
                    pub fn on_audit_model_creating(builder: &mut #runtime::ModelBuilder) {
                        #(#registrations)*
                    }
                }
            },
        )
        .render()
}
