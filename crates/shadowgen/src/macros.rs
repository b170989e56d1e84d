//! Build-script helper that runs the shadowgen pass over the listed schema
//! source files and writes every artifact into `OUT_DIR`.

/// Run the generator inside a build script.
///
/// Intended for `build.rs` functions returning `Result<(), Box<dyn Error>>`;
/// file, snapshot, and config errors propagate with `?`. Per-declaration
/// diagnostics surface as `cargo:warning=` lines and never fail the build.
/// Reads `shadowgen.toml` from the package root when present.
#[macro_export]
macro_rules! build {
    ($($schema_file:expr),+ $(,)?) => {{
        use std::{env::var, fs, path::PathBuf};

        println!("cargo:rerun-if-changed=build.rs");
        println!("cargo:rerun-if-changed=shadowgen.toml");
        $( println!("cargo:rerun-if-changed={}", $schema_file); )+

        let out_dir = var("OUT_DIR").expect("OUT_DIR not set");

        let mut sources = Vec::new();
        $( sources.push(($schema_file, fs::read_to_string($schema_file)?)); )+

        let snapshot = $crate::schema::provider::Snapshot::from_sources(
            sources.iter().map(|(file, text)| (*file, text.as_str())),
        )?;

        let config = match fs::read_to_string("shadowgen.toml") {
            Ok(text) => $crate::build::GeneratorConfig::from_toml(&text)?,
            Err(_) => $crate::build::GeneratorConfig::default(),
        };

        let output = $crate::build::generate(&snapshot, &config)?;

        for diagnostic in &output.diagnostics {
            println!("cargo:warning={diagnostic}");
        }

        for artifact in &output.artifacts {
            let path = PathBuf::from(&out_dir).join(&artifact.file_name);
            fs::write(path, &artifact.source)?;
        }
    }};
}
