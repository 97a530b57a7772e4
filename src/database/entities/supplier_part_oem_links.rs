use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Join table associating a supplier part with the OEM parts it fulfils.
/// Duplicate association is a no-op, enforced by a unique (part, oem) index.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplier_part_oem_links")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub supplier_part_id: i32,
    pub original_part_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::supplier_parts::Entity",
        from = "Column::SupplierPartId",
        to = "super::supplier_parts::Column::Id"
    )]
    SupplierParts,
    #[sea_orm(
        belongs_to = "super::original_parts::Entity",
        from = "Column::OriginalPartId",
        to = "super::original_parts::Column::Id"
    )]
    OriginalParts,
}

impl Related<super::supplier_parts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierParts.def()
    }
}

impl Related<super::original_parts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OriginalParts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
