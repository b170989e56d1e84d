use crate::node::Location;
use serde::Serialize;
use std::slice::Iter;

///
/// FieldList
///

#[derive(Clone, Debug, Default, Serialize)]
pub struct FieldList {
    fields: Vec<FieldDecl>,
}

impl FieldList {
    #[must_use]
    pub fn get(&self, ident: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.ident == ident)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, FieldDecl> {
        self.fields.iter()
    }

    pub fn push(&mut self, field: FieldDecl) {
        self.fields.push(field);
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a FieldDecl;
    type IntoIter = Iter<'a, FieldDecl>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl FromIterator<FieldDecl> for FieldList {
    fn from_iter<I: IntoIterator<Item = FieldDecl>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

///
/// FieldDecl
///
/// One persistent field declaration: ident, declared type rendered as
/// token text, and the modifiers the generator cares about. Field idents
/// are unique within their owning type; duplicates are a validation error.
///

#[derive(Clone, Debug, Serialize)]
pub struct FieldDecl {
    pub ident: String,

    /// Declared type as rendered token text, re-parsed at translation time.
    pub ty: String,

    pub public: bool,

    /// Non-mirrorable marker: the field is a relationship member rather
    /// than scalar data and never appears on the shadow type.
    pub relation: bool,

    pub location: Location,
}

impl FieldDecl {
    #[must_use]
    pub const fn is_mirrorable(&self) -> bool {
        !self.relation
    }
}
