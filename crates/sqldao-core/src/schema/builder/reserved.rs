use crate::schema::domain::{PropertyTy, Variant};

/// A database-generated column every table of a variant carries.
#[derive(Debug)]
pub(super) struct ReservedColumn {
    /// Column name
    pub(super) column: &'static str,

    /// Name of the matching domain-object property, if the user redeclares it
    pub(super) property: &'static str,

    /// Type a redeclared property must have
    pub(super) ty: PropertyTy,
}

const ID: ReservedColumn = ReservedColumn {
    column: "id",
    property: "id",
    ty: PropertyTy::Number,
};

const UUID: ReservedColumn = ReservedColumn {
    column: "uuid",
    property: "uuid",
    ty: PropertyTy::String,
};

const CREATED_AT: ReservedColumn = ReservedColumn {
    column: "created_at",
    property: "createdAt",
    ty: PropertyTy::Date,
};

const UPDATED_AT: ReservedColumn = ReservedColumn {
    column: "updated_at",
    property: "updatedAt",
    ty: PropertyTy::Date,
};

static LITERAL: [ReservedColumn; 1] = [ID];

static ENTITY: [ReservedColumn; 4] = [ID, UUID, CREATED_AT, UPDATED_AT];

// For events, `created_at` records when the event occurred.
static EVENT: [ReservedColumn; 3] = [ID, UUID, CREATED_AT];

pub(super) fn for_variant(variant: Variant) -> &'static [ReservedColumn] {
    match variant {
        Variant::Literal => &LITERAL,
        Variant::Entity => &ENTITY,
        Variant::Event => &EVENT,
    }
}
