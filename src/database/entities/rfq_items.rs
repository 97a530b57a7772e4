use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rfq_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rfq_id: i32,
    pub line_number: i32,
    pub requested_original_part_id: Option<i32>,
    pub quantity: Option<f64>,
    /// Revision of the originating client request this item belongs to.
    pub request_revision: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rfqs::Entity",
        from = "Column::RfqId",
        to = "super::rfqs::Column::Id"
    )]
    Rfqs,
    #[sea_orm(has_many = "super::rfq_item_selections::Entity")]
    RfqItemSelections,
    #[sea_orm(has_many = "super::response_lines::Entity")]
    ResponseLines,
}

impl Related<super::rfqs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rfqs.def()
    }
}

impl Related<super::rfq_item_selections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RfqItemSelections.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
