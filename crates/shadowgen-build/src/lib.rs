//! Emission side of the shadowgen generator: the per-type shadow emitter,
//! the two aggregate emitters, the well-known constant artifacts, and the
//! driver that runs one generation pass.
//!
//! The pass is a pure, single-pass, synchronous transformation: all three
//! artifact families are computed from one enumeration of the provider's
//! declarations, so cross-artifact consistency is structural.

mod artifact;
mod config;
mod context;
mod mapping;
mod naming;
mod shadow;
mod well_known;

#[cfg(test)]
mod tests;

pub use artifact::{Artifact, Output};
pub use config::{
    ConfigError, DEFAULT_COLLECTION_SUFFIX, DEFAULT_RUNTIME_PATH, GeneratorConfig,
};
pub use naming::{Naming, SuffixNaming};
pub use shadow::shadow_name;

use serde::Serialize;
use shadowgen_schema::{
    error::{Diagnostic, DiagnosticKind, Diagnostics},
    provider::TypeProvider,
    validate::validate_snapshot,
};
use std::collections::BTreeMap;

///
/// NamePair
///
/// Join key between per-type generation and the aggregate emitters.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct NamePair {
    pub original: String,
    pub shadow: String,
}

///
/// GenerationResult
///
/// Per-type emission result accumulated by the driver.
///

pub(crate) struct GenerationResult {
    pub artifact: Artifact,
    pub original: String,
    pub shadow: String,
    pub collection: String,
}

/// Run one generation pass with the default suffix naming strategy.
pub fn generate(
    provider: &dyn TypeProvider,
    config: &GeneratorConfig,
) -> Result<Output, ConfigError> {
    let naming = SuffixNaming::new(&config.collection_suffix);

    generate_with_naming(provider, config, &naming)
}

/// Run one generation pass with a caller-supplied naming strategy.
///
/// The pass always completes: every failure short of a config error
/// degrades exactly one declaration or one field and lands in the returned
/// diagnostics. Each call uses a fresh accumulator; concurrent passes over
/// different snapshots share nothing.
pub fn generate_with_naming(
    provider: &dyn TypeProvider,
    config: &GeneratorConfig,
    naming: &dyn Naming,
) -> Result<Output, ConfigError> {
    config.validate()?;

    let mut diags = Diagnostics::new();
    validate_snapshot(provider, &mut diags);

    let mut results: Vec<GenerationResult> = Vec::new();
    let mut seen_shadows: BTreeMap<String, String> = BTreeMap::new();
    let mut seen_collections: BTreeMap<String, String> = BTreeMap::new();

    for decl in provider.type_decls() {
        if !decl.is_marked() {
            continue;
        }

        if !decl.is_class_shaped() {
            diags.add(Diagnostic::error(
                DiagnosticKind::MisappliedMarker,
                decl.def.location.clone(),
                format!(
                    "audit marker on {} '{}'; only structs with named fields are auditable",
                    decl.kind,
                    decl.def.path()
                ),
            ));
            continue;
        }

        let shadow = shadow_name(&decl.def.ident);
        if let Some(prev) = seen_shadows.insert(shadow.clone(), decl.def.path()) {
            diags.add(Diagnostic::error(
                DiagnosticKind::DuplicateShadowName,
                decl.def.location.clone(),
                format!(
                    "'{}' and '{prev}' both yield shadow type '{shadow}'; first declaration wins",
                    decl.def.path()
                ),
            ));
            continue;
        }

        let collection = naming.collection_ident(&shadow);
        if let Some(prev) = seen_collections.insert(collection.clone(), shadow.clone()) {
            diags.add(Diagnostic::error(
                DiagnosticKind::NamingCollision,
                decl.def.location.clone(),
                format!(
                    "collection ident '{collection}' for '{shadow}' collides with '{prev}'; declaration skipped"
                ),
            ));
            continue;
        }

        if let Some(parts) = shadow::generate(decl, config, &mut diags) {
            results.push(GenerationResult {
                artifact: parts.artifact,
                original: parts.original,
                shadow: parts.shadow,
                collection,
            });
        }
    }

    let pairs: Vec<NamePair> = results
        .iter()
        .map(|result| NamePair {
            original: result.original.clone(),
            shadow: result.shadow.clone(),
        })
        .collect();

    let context = context::generate(&results, config);
    let mappings = mapping::generate(&pairs, config);

    let mut artifacts = vec![
        well_known::marker_artifact(config),
        well_known::metadata_artifact(config),
    ];
    artifacts.extend(results.into_iter().map(|result| result.artifact));
    artifacts.push(context);
    artifacts.push(mappings);

    Ok(Output {
        artifacts,
        diagnostics: diags,
    })
}
