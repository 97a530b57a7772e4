use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Authoritative price history. Append-only; activation emits exactly one row
/// per matched price-list line and never updates existing rows.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "price_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub supplier_id: i32,
    pub supplier_part_id: i32,
    pub price_list_id: i32,
    pub price_list_line_id: i32,
    pub unit_price: f64,
    pub currency: String,
    pub moq: Option<f64>,
    pub lead_time_days: Option<i32>,
    pub valid_from: ChronoDateTimeUtc,
    pub valid_until: Option<ChronoDateTimeUtc>,
    pub recorded_at: ChronoDateTimeUtc,
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
        belongs_to = "super::supplier_price_lists::Entity",
        from = "Column::PriceListId",
        to = "super::supplier_price_lists::Column::Id"
    )]
    SupplierPriceLists,
}

impl Related<super::supplier_parts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierParts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
