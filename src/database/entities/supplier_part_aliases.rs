use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Alternative spelling of a supplier part number, matched through its
/// canonical form.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplier_part_aliases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub supplier_part_id: i32,
    pub alias: String,
    pub canonical_alias: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::supplier_parts::Entity",
        from = "Column::SupplierPartId",
        to = "super::supplier_parts::Column::Id"
    )]
    SupplierParts,
}

impl Related<super::supplier_parts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierParts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
