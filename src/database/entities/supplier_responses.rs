use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// At most one per `rfq_suppliers` row, created lazily on first response
/// activity.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "supplier_responses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rfq_supplier_id: i32,
    pub status: String,
    pub created_at: ChronoDateTimeUtc,
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
    #[sea_orm(has_many = "super::response_revisions::Entity")]
    ResponseRevisions,
}

impl Related<super::rfq_suppliers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RfqSuppliers.def()
    }
}

impl Related<super::response_revisions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResponseRevisions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
