use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cached resolution state per (rfq_supplier, rfq_item). Derived projection,
/// rebuildable from the response ledger.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "line_statuses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rfq_supplier_id: i32,
    pub rfq_item_id: i32,
    pub status: String,
    pub source_type: Option<String>,
    pub source_ref: Option<String>,
    pub last_request_revision_id: Option<i32>,
    pub last_response_revision_id: Option<i32>,
    pub note: Option<String>,
    pub updated_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rfq_suppliers::Entity",
        from = "Column::RfqSupplierId",
        to = "super::rfq_suppliers::Column::Id"
    )]
    RfqSuppliers,
    #[sea_orm(
        belongs_to = "super::rfq_items::Entity",
        from = "Column::RfqItemId",
        to = "super::rfq_items::Column::Id"
    )]
    RfqItems,
}

impl Related<super::rfq_suppliers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RfqSuppliers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
