use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Pairing of an RFQ and an invited supplier. Never deleted while responses
/// exist; `responded_at` is first-write-wins.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rfq_suppliers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rfq_id: i32,
    pub supplier_id: i32,
    pub status: String,
    pub responded_at: Option<ChronoDateTimeUtc>,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rfqs::Entity",
        from = "Column::RfqId",
        to = "super::rfqs::Column::Id"
    )]
    Rfqs,
    #[sea_orm(
        belongs_to = "super::suppliers::Entity",
        from = "Column::SupplierId",
        to = "super::suppliers::Column::Id"
    )]
    Suppliers,
    #[sea_orm(has_many = "super::line_statuses::Entity")]
    LineStatuses,
}

impl Related<super::rfqs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rfqs.def()
    }
}

impl Related<super::suppliers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Suppliers.def()
    }
}

impl Related<super::line_statuses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LineStatuses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
