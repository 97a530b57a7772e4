use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::common_types::SupplierReplyStatus;

/// One immutable offer line. "Editing" a line always inserts a new row with
/// `based_on_response_line_id` pointing at the superseded line.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "response_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub response_revision_id: i32,
    pub rfq_item_id: i32,
    pub selection_key: Option<String>,
    pub supplier_part_id: Option<i32>,
    pub original_part_id: Option<i32>,
    pub bundle_id: Option<i32>,
    pub bundle_item_id: Option<i32>,
    pub based_on_response_line_id: Option<i32>,
    pub supplier_reply_status: String,
    pub unit_price: Option<f64>,
    pub currency: Option<String>,
    pub lead_time_days: Option<i32>,
    pub moq: Option<f64>,
    pub packaging: Option<String>,
    pub valid_from: Option<ChronoDateTimeUtc>,
    pub valid_until: Option<ChronoDateTimeUtc>,
    pub payment_terms: Option<String>,
    pub incoterms: Option<String>,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::response_revisions::Entity",
        from = "Column::ResponseRevisionId",
        to = "super::response_revisions::Column::Id"
    )]
    ResponseRevisions,
    #[sea_orm(
        belongs_to = "super::rfq_items::Entity",
        from = "Column::RfqItemId",
        to = "super::rfq_items::Column::Id"
    )]
    RfqItems,
    #[sea_orm(
        belongs_to = "super::supplier_parts::Entity",
        from = "Column::SupplierPartId",
        to = "super::supplier_parts::Column::Id"
    )]
    SupplierParts,
    #[sea_orm(has_many = "super::line_actions::Entity")]
    LineActions,
}

impl Related<super::response_revisions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResponseRevisions.def()
    }
}

impl Related<super::rfq_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RfqItems.def()
    }
}

impl Related<super::line_actions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LineActions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn reply_status(&self) -> Option<SupplierReplyStatus> {
        SupplierReplyStatus::parse(&self.supplier_reply_status)
    }

    pub fn is_quoted(&self) -> bool {
        self.reply_status() == Some(SupplierReplyStatus::Quoted)
    }
}
