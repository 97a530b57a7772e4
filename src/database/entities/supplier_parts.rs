use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Supplier catalog entry. `canonical_part_number` is derived from
/// `supplier_part_number` and unique per supplier; supplementary attributes
/// are filled in non-destructively (first write wins).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplier_parts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub supplier_id: i32,
    pub supplier_part_number: String,
    pub canonical_part_number: Option<String>,
    pub description: Option<String>,
    pub material: Option<String>,
    pub weight_kg: Option<f64>,
    pub unit: Option<String>,
    pub hs_code: Option<String>,
    pub created_at: ChronoDateTimeUtc,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::suppliers::Entity",
        from = "Column::SupplierId",
        to = "super::suppliers::Column::Id"
    )]
    Suppliers,
    #[sea_orm(has_many = "super::supplier_part_aliases::Entity")]
    SupplierPartAliases,
    #[sea_orm(has_many = "super::supplier_part_oem_links::Entity")]
    SupplierPartOemLinks,
}

impl Related<super::suppliers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Suppliers.def()
    }
}

impl Related<super::supplier_part_aliases::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierPartAliases.def()
    }
}

impl Related<super::supplier_part_oem_links::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierPartOemLinks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
