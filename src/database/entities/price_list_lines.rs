use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::common_types::PriceListLineStatus;

/// Raw import row of a price list, classified by the matcher.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "price_list_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub price_list_id: i32,
    pub row_number: i32,
    pub raw_part_number: Option<String>,
    pub raw_description: Option<String>,
    pub unit_price: Option<f64>,
    pub currency: Option<String>,
    pub moq: Option<f64>,
    pub lead_time_days: Option<i32>,
    pub valid_from: Option<ChronoDateTimeUtc>,
    pub valid_until: Option<ChronoDateTimeUtc>,
    pub line_status: String,
    pub match_method: Option<String>,
    pub match_confidence: Option<f64>,
    pub match_note: Option<String>,
    pub supplier_part_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::supplier_price_lists::Entity",
        from = "Column::PriceListId",
        to = "super::supplier_price_lists::Column::Id"
    )]
    SupplierPriceLists,
    #[sea_orm(
        belongs_to = "super::supplier_parts::Entity",
        from = "Column::SupplierPartId",
        to = "super::supplier_parts::Column::Id"
    )]
    SupplierParts,
}

impl Related<super::supplier_price_lists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierPriceLists.def()
    }
}

impl Related<super::supplier_parts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierParts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn status(&self) -> Option<PriceListLineStatus> {
        PriceListLineStatus::parse(&self.line_status)
    }
}
