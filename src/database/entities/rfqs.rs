use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Request For Quotation header. `active_request_revision` mirrors the client
/// request's current revision; items pinned to older revisions are archived.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rfqs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub reference: String,
    pub client_request_id: i32,
    pub active_request_revision: i32,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rfq_items::Entity")]
    RfqItems,
    #[sea_orm(has_many = "super::rfq_suppliers::Entity")]
    RfqSuppliers,
}

impl Related<super::rfq_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RfqItems.def()
    }
}

impl Related<super::rfq_suppliers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RfqSuppliers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
