use crate::node::Location;
use derive_more::Display;
use serde::Serialize;
use std::{fmt, slice::Iter};

///
/// Severity
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
pub enum Severity {
    #[display("error")]
    Error,

    #[display("warning")]
    Warning,
}

///
/// DiagnosticKind
///
/// Stable classification of everything that can degrade a generation pass.
/// None of these abort the pass; each degrades exactly one declaration or
/// one field.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum DiagnosticKind {
    DuplicateField,
    DuplicateShadowName,
    MisappliedMarker,
    NamingCollision,
    RepeatedMarker,
    UnresolvedFieldType,
    UnresolvedType,
}

///
/// Diagnostic
///

#[derive(Clone, Debug, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub location: Location,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn error(kind: DiagnosticKind, location: Location, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Error,
            location,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn warning(kind: DiagnosticKind, location: Location, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: Severity::Warning,
            location,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.severity, self.kind, self.location, self.message
        )
    }
}

///
/// Diagnostics
///
/// Ordered accumulator for one generation pass. Each pass owns a fresh
/// instance; nothing is shared between passes.
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.severity == Severity::Error)
    }

    pub fn iter(&self) -> Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Diagnostics of one kind, in emission order.
    pub fn of_kind(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(move |d| d.kind == kind)
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
