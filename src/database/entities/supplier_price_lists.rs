use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::common_types::PriceListStatus;

/// Imported price list container. At most one `active` list per supplier;
/// the activation pipeline flips prior active lists to `superseded`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplier_price_lists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub supplier_id: i32,
    pub name: String,
    pub currency: Option<String>,
    pub status: String,
    pub valid_from: Option<ChronoDateTimeUtc>,
    pub valid_until: Option<ChronoDateTimeUtc>,
    pub created_at: ChronoDateTimeUtc,
    pub activated_at: Option<ChronoDateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::suppliers::Entity",
        from = "Column::SupplierId",
        to = "super::suppliers::Column::Id"
    )]
    Suppliers,
    #[sea_orm(has_many = "super::price_list_lines::Entity")]
    PriceListLines,
}

impl Related<super::suppliers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Suppliers.def()
    }
}

impl Related<super::price_list_lines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PriceListLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn list_status(&self) -> Option<PriceListStatus> {
        PriceListStatus::parse(&self.status)
    }
}
