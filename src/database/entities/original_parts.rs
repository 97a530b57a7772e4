use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// OEM part catalog entry. Plain record store consumed by the matching core.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "original_parts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub part_number: String,
    pub manufacturer: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::supplier_part_oem_links::Entity")]
    SupplierPartOemLinks,
}

impl Related<super::supplier_part_oem_links::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierPartOemLinks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
