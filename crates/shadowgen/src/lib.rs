//! Facade for the shadowgen audit shadow-type generator.
//!
//! ## Crate layout
//! - `schema`: declaration nodes, the `TypeProvider` discovery interface,
//!   the syn snapshot provider, and location-tagged diagnostics.
//! - `build`: the emitters, naming strategies, generator config, and the
//!   pass driver.
//! - `auditable`: the marker attribute for host schema crates.
//!
//! Hosts normally call [`build!`] from a build script and include the
//! generated artifacts from `OUT_DIR`.

pub use shadowgen_build as build;
pub use shadowgen_schema as schema;

pub use shadowgen_macros::auditable;

mod macros;

/// Workspace version re-export for downstream tooling and tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        build::{Artifact, GeneratorConfig, Output, generate},
        schema::provider::{Snapshot, TypeProvider},
    };
}
