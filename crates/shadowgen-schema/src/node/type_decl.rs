use crate::node::{Def, FieldList};
use derive_more::Display;
use serde::Serialize;

///
/// TypeKind
///
/// Shape of a declaration as found in the source. Only class-shaped
/// declarations may carry the audit marker.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum TypeKind {
    Enum,
    Struct,
    TupleStruct,
    Union,
    UnitStruct,
}

impl TypeKind {
    /// Structs with named fields and unit structs qualify; a unit struct
    /// simply has no eligible fields, which is valid.
    #[must_use]
    pub const fn is_class_shaped(self) -> bool {
        matches!(self, Self::Struct | Self::UnitStruct)
    }
}

///
/// TypeDecl
///
/// One named type declaration, read-only input to the generator. Owned by
/// the snapshot that discovered it.
///

#[derive(Clone, Debug, Serialize)]
pub struct TypeDecl {
    pub def: Def,
    pub kind: TypeKind,
    pub fields: FieldList,

    /// Occurrences of the audit marker on this declaration. The marker is
    /// non-repeatable; counts above one are reported by validation.
    pub marker_count: usize,
}

impl TypeDecl {
    #[must_use]
    pub const fn is_marked(&self) -> bool {
        self.marker_count > 0
    }

    #[must_use]
    pub const fn is_class_shaped(&self) -> bool {
        self.kind.is_class_shaped()
    }
}
