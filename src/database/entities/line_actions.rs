use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Append-only audit record for a response line. `payload` is a JSON snapshot
/// of the state that the action captured.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "line_actions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub response_line_id: i32,
    pub action_type: String,
    #[sea_orm(column_type = "Text")]
    pub payload: String,
    pub reason: Option<String>,
    pub created_by: Option<String>,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::response_lines::Entity",
        from = "Column::ResponseLineId",
        to = "super::response_lines::Column::Id"
    )]
    ResponseLines,
}

impl Related<super::response_lines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResponseLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Parse the snapshot payload as JSON.
    pub fn payload_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::from_str(&self.payload)
    }
}
