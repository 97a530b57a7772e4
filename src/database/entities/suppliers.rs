use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub code: String,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::supplier_parts::Entity")]
    SupplierParts,
    #[sea_orm(has_many = "super::rfq_suppliers::Entity")]
    RfqSuppliers,
    #[sea_orm(has_many = "super::supplier_price_lists::Entity")]
    SupplierPriceLists,
}

impl Related<super::supplier_parts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierParts.def()
    }
}

impl Related<super::rfq_suppliers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RfqSuppliers.def()
    }
}

impl Related<super::supplier_price_lists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierPriceLists.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
