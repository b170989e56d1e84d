mod field;
mod metadata;
mod type_decl;

pub use field::{FieldDecl, FieldList};
pub use metadata::{AUDIT_METADATA_FIELDS, IDENTIFIER_FIELD, MetaField};
pub use type_decl::{TypeDecl, TypeKind};

use serde::Serialize;
use std::{fmt, str::FromStr};

///
/// Location
///
/// Source position a node or diagnostic is attached to. Line and column are
/// 1-based and 0-based respectively, as reported by the lexer.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Location {
    pub file: String,
    pub line: usize,
    pub column: usize,
}

impl Location {
    #[must_use]
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

///
/// ModulePath
///
/// Ordered module segments from the crate root down to the declaration.
/// Empty for items declared at the top level of a source file.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ModulePath(Vec<String>);

impl ModulePath {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, segment: impl Into<String>) {
        self.0.push(segment.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("::"))
    }
}

impl FromStr for ModulePath {
    type Err = syn::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::new());
        }

        let path: syn::Path = syn::parse_str(s)?;
        Ok(Self(
            path.segments
                .iter()
                .map(|segment| segment.ident.to_string())
                .collect(),
        ))
    }
}

///
/// Def
///
/// Identity header shared by every declaration node.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Def {
    pub ident: String,
    pub module: ModulePath,
    pub location: Location,
}

impl Def {
    /// Fully qualified path of the declaration.
    #[must_use]
    pub fn path(&self) -> String {
        if self.module.is_empty() {
            self.ident.clone()
        } else {
            format!("{}::{}", self.module, self.ident)
        }
    }
}
