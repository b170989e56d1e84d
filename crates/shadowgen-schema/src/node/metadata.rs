use serde::Serialize;

///
/// MetaField
///
/// One fixed field of the audit-metadata shape. The type is Rust type text
/// resolvable in the host build; both the metadata base artifact and every
/// shadow type's trailing field block render from the same constants.
///

#[derive(Clone, Copy, Debug, Serialize)]
pub struct MetaField {
    pub ident: &'static str,
    pub ty: &'static str,
}

/// Synthetic primary key present on every shadow type, always first.
pub const IDENTIFIER_FIELD: MetaField = MetaField {
    ident: "identifier",
    ty: "u64",
};

/// Fixed audit metadata recorded on every shadow type, appended after the
/// mirrored fields: acting user, acting client, action timestamp, and a
/// free-form action kind label. Not derived from the original type.
pub const AUDIT_METADATA_FIELDS: [MetaField; 4] = [
    MetaField {
        ident: "audit_user_id",
        ty: "Option<::uuid::Uuid>",
    },
    MetaField {
        ident: "audit_client_id",
        ty: "Option<i32>",
    },
    MetaField {
        ident: "audit_date",
        ty: "::chrono::DateTime<::chrono::Utc>",
    },
    MetaField {
        ident: "audit_action",
        ty: "String",
    },
];
