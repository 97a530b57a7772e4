use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::errors::ApiError;
use crate::server::app::AppState;
use crate::services::workspace_service::{WorkspaceFilter, WorkspaceService, WorkspaceView};

#[derive(Deserialize)]
pub struct WorkspaceQuery {
    pub supplier_id: Option<i32>,
    #[serde(default)]
    pub include_archived: bool,
}

pub async fn get_workspace(
    State(state): State<AppState>,
    Path(rfq_id): Path<i32>,
    Query(query): Query<WorkspaceQuery>,
) -> Result<Json<WorkspaceView>, ApiError> {
    let service = WorkspaceService::new(state.db.clone());
    let view = service
        .workspace(
            rfq_id,
            WorkspaceFilter {
                supplier_id: query.supplier_id,
                include_archived: query.include_archived,
            },
        )
        .await?;
    Ok(Json(view))
}
