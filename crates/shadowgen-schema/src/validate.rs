//! Snapshot-local structural validation.
//!
//! Cross-type invariants (duplicate shadow names, collection-name
//! collisions) need the naming strategy and are the driver's concern; this
//! pass checks each declaration in isolation.

use crate::{
    error::{Diagnostic, DiagnosticKind, Diagnostics},
    provider::TypeProvider,
};
use std::collections::BTreeSet;

/// Validate every declaration in the provider, accumulating diagnostics.
pub fn validate_snapshot(provider: &dyn TypeProvider, diags: &mut Diagnostics) {
    for decl in provider.type_decls() {
        if decl.marker_count > 1 {
            diags.add(Diagnostic::warning(
                DiagnosticKind::RepeatedMarker,
                decl.def.location.clone(),
                format!(
                    "audit marker repeated {} times on '{}'; it is non-repeatable",
                    decl.marker_count,
                    decl.def.path()
                ),
            ));
        }

        let mut seen = BTreeSet::new();
        for field in &decl.fields {
            if !seen.insert(field.ident.as_str()) {
                diags.add(Diagnostic::error(
                    DiagnosticKind::DuplicateField,
                    field.location.clone(),
                    format!(
                        "field '{}' declared more than once on '{}'",
                        field.ident,
                        decl.def.path()
                    ),
                ));
            }
        }
    }
}
