use convert_case::{Case, Casing};

///
/// Naming
///
/// Strategy for deriving the collection ident of a shadow type. Pluggable
/// so hosts can swap the suffix heuristic for a real pluralizer; whatever
/// the strategy, the driver rejects ident collisions with a diagnostic
/// instead of silently overwriting.
///

pub trait Naming {
    fn collection_ident(&self, shadow_name: &str) -> String;
}

///
/// SuffixNaming
///
/// Snake-cases the shadow name and appends a fixed suffix. A naming
/// heuristic, not a general pluralizer; irregular plurals come out wrong
/// and that is accepted.
///

#[derive(Clone, Debug)]
pub struct SuffixNaming {
    suffix: String,
}

impl SuffixNaming {
    #[must_use]
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }
}

impl Default for SuffixNaming {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_COLLECTION_SUFFIX)
    }
}

impl Naming for SuffixNaming {
    fn collection_ident(&self, shadow_name: &str) -> String {
        format!("{}{}", shadow_name.to_case(Case::Snake), self.suffix)
    }
}
