//! Schema model and discovery side of the shadowgen generator.
//!
//! ## Crate layout
//! - `node`: declaration nodes (`TypeDecl`, `FieldDecl`) plus the fixed
//!   audit-metadata shape shared by every shadow type.
//! - `provider`: the narrow `TypeProvider` discovery interface and
//!   `Snapshot`, the syn-based provider that parses Rust source text.
//! - `error`: location-tagged diagnostics accumulated during a pass.
//! - `validate`: snapshot-local structural validation.
//!
//! The crate holds no emission logic; everything here is read-only input to
//! the `shadowgen-build` driver.

pub mod error;
pub mod node;
pub mod provider;
pub mod validate;

/// Suffix appended to an original type name to form its shadow type name.
pub const SHADOW_SUFFIX: &str = "Auditable";

/// Suffix appended to a shadow type name to form its configuration type name.
pub const CONFIGURATION_SUFFIX: &str = "Configuration";

/// Module recorded on generated declarations when the original module path
/// is empty. Constant across runs so artifact output stays reproducible.
pub const DEFAULT_MODULE: &str = "entities";

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        CONFIGURATION_SUFFIX, DEFAULT_MODULE, SHADOW_SUFFIX,
        error::{Diagnostic, DiagnosticKind, Diagnostics, Severity},
        node::{
            AUDIT_METADATA_FIELDS, Def, FieldDecl, FieldList, IDENTIFIER_FIELD, Location,
            MetaField, ModulePath, TypeDecl, TypeKind,
        },
        provider::{Snapshot, SnapshotError, TypeProvider},
    };
}
