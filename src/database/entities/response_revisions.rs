use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Immutable revision of a supplier response. `rev_number` is strictly
/// increasing per response, starting at 1.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "response_revisions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub supplier_response_id: i32,
    pub rev_number: i32,
    pub note: Option<String>,
    pub created_by: Option<String>,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::supplier_responses::Entity",
        from = "Column::SupplierResponseId",
        to = "super::supplier_responses::Column::Id"
    )]
    SupplierResponses,
    #[sea_orm(has_many = "super::response_lines::Entity")]
    ResponseLines,
}

impl Related<super::supplier_responses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupplierResponses.def()
    }
}

impl Related<super::response_lines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResponseLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
