use proc_macro2::TokenStream;
use serde::Serialize;
use shadowgen_schema::error::Diagnostics;

// Every artifact leads with this line.
const HEADER: &str = "// @generated by shadowgen. Do not edit.\n";

///
/// Artifact
///
/// One generated source file: deterministic file name, the module the host
/// should compile it into, and the rendered text.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Artifact {
    pub file_name: String,

    /// `None` for artifacts that live at the host's root scope.
    pub module: Option<String>,

    pub source: String,
}

impl Artifact {
    pub(crate) fn raw(file_name: &str, module: Option<String>, body: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            module,
            source: format!("{HEADER}\n{body}"),
        }
    }
}

///
/// ArtifactBuilder
///
/// Ordered list of named sections, rendered to text as the final step so
/// the transformation logic stays decoupled from formatting. Rendering the
/// same sections twice yields byte-identical text.
///

pub(crate) struct ArtifactBuilder {
    file_name: String,
    module: Option<String>,
    sections: Vec<(&'static str, TokenStream)>,
}

impl ArtifactBuilder {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            module: None,
            sections: Vec::new(),
        }
    }

    pub fn module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn section(mut self, name: &'static str, tokens: TokenStream) -> Self {
        self.sections.push((name, tokens));
        self
    }

    pub fn render(self) -> Artifact {
        let mut source = String::from(HEADER);

        for (name, tokens) in self.sections {
            if tokens.is_empty() {
                continue;
            }

            source.push_str(&format!("\n// --- {name}\n"));
            source.push_str(&tokens.to_string());
            source.push('\n');
        }

        Artifact {
            file_name: self.file_name,
            module: self.module,
            source,
        }
    }
}

///
/// Output
///

#[derive(Clone, Debug, Serialize)]
pub struct Output {
    /// Artifacts in emission order: marker, metadata shape, one per shadow
    /// type in discovery order, context registration, mappings.
    pub artifacts: Vec<Artifact>,

    pub diagnostics: Diagnostics,
}

impl Output {
    #[must_use]
    pub fn artifact(&self, file_name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.file_name == file_name)
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors()
    }
}
