use serde::Deserialize;
use shadowgen_schema::{DEFAULT_MODULE, node::ModulePath};
use thiserror::Error as ThisError;

/// Collaborator module path emitted artifacts resolve against by default.
pub const DEFAULT_RUNTIME_PATH: &str = "::audit_runtime";

/// Default suffix for collection idents.
pub const DEFAULT_COLLECTION_SUFFIX: &str = "s";

///
/// ConfigError
///
/// Config problems are host-setup errors and the only failures, besides a
/// malformed snapshot, that stop a pass from running at all.
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("cannot parse generator config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid runtime path '{0}'")]
    InvalidRuntimePath(String),

    #[error("invalid default module '{0}'")]
    InvalidDefaultModule(String),

    #[error("invalid collection suffix '{0}'")]
    InvalidCollectionSuffix(String),
}

///
/// GeneratorConfig
///

#[derive(Clone, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Module path under which collaborator symbols are resolved.
    pub runtime_path: String,

    /// Module recorded on generated declarations whose original module
    /// path is empty.
    pub default_module: String,

    /// Suffix appended to the snake-cased shadow name to form the
    /// collection ident.
    pub collection_suffix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            runtime_path: DEFAULT_RUNTIME_PATH.to_string(),
            default_module: DEFAULT_MODULE.to_string(),
            collection_suffix: DEFAULT_COLLECTION_SUFFIX.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Parse and validate a TOML config document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;

        Ok(config)
    }

    /// Check every field parses in the syntax position it is emitted in.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if syn::parse_str::<syn::Path>(&self.runtime_path).is_err() {
            return Err(ConfigError::InvalidRuntimePath(self.runtime_path.clone()));
        }

        if self.default_module.parse::<ModulePath>().is_err() {
            return Err(ConfigError::InvalidDefaultModule(
                self.default_module.clone(),
            ));
        }

        let suffix_ok = !self.collection_suffix.is_empty()
            && self
                .collection_suffix
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');
        if !suffix_ok {
            return Err(ConfigError::InvalidCollectionSuffix(
                self.collection_suffix.clone(),
            ));
        }

        Ok(())
    }

    // Emitters render collaborator paths from here; `validate` has already
    // run by the time any emitter is invoked.
    pub(crate) fn runtime_path(&self) -> syn::Path {
        syn::parse_str(&self.runtime_path)
            .unwrap_or_else(|_| panic!("invalid runtime path: {}", self.runtime_path))
    }
}
