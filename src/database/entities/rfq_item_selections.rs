use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One structural role (BOM component, kit role, alternate part) that an
/// offer against the owning RFQ item can answer.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rfq_item_selections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rfq_item_id: i32,
    pub selection_key: String,
    pub selection_type: String,
    pub bundle_id: Option<i32>,
    pub bundle_item_id: Option<i32>,
    pub original_part_id: Option<i32>,
    pub role_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rfq_items::Entity",
        from = "Column::RfqItemId",
        to = "super::rfq_items::Column::Id"
    )]
    RfqItems,
}

impl Related<super::rfq_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RfqItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
