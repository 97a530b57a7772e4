use axum::{
    extract::{Path, State},
    response::Json,
};
use serde::Deserialize;

use crate::database::entities::rfq_suppliers;
use crate::errors::ApiError;
use crate::server::app::AppState;
use crate::services::response_ledger_service::{
    AppendedLine, LineOverrides, NewLineInput, ResponseDetail, ResponseLedgerService,
};

#[derive(Deserialize)]
pub struct CreateRevisionRequest {
    pub note: Option<String>,
    pub created_by: Option<String>,
}

#[derive(Deserialize)]
pub struct ReviseLineRequest {
    pub reason: String,
    pub created_by: Option<String>,
    #[serde(flatten)]
    pub overrides: LineOverrides,
}

pub async fn invite_supplier(
    State(state): State<AppState>,
    Path((rfq_id, supplier_id)): Path<(i32, i32)>,
) -> Result<Json<rfq_suppliers::Model>, ApiError> {
    let service = ResponseLedgerService::new(state.db.clone());
    let pairing = service.invite(rfq_id, supplier_id).await?;
    Ok(Json(pairing))
}

pub async fn get_response(
    State(state): State<AppState>,
    Path((rfq_id, supplier_id)): Path<(i32, i32)>,
) -> Result<Json<ResponseDetail>, ApiError> {
    let service = ResponseLedgerService::new(state.db.clone());
    let pairing = service.find_pairing(rfq_id, supplier_id).await?;
    let detail = service.get_response(pairing.id).await?.ok_or_else(|| {
        ApiError::not_found(
            "RESPONSE_NOT_FOUND",
            format!("supplier {supplier_id} has not responded to RFQ {rfq_id}"),
        )
    })?;
    Ok(Json(detail))
}

pub async fn create_revision(
    State(state): State<AppState>,
    Path((rfq_id, supplier_id)): Path<(i32, i32)>,
    Json(payload): Json<CreateRevisionRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let service = ResponseLedgerService::new(state.db.clone());
    let pairing = service.find_pairing(rfq_id, supplier_id).await?;
    let (response, revision) = service
        .create_new_revision(pairing.id, payload.note, payload.created_by)
        .await?;
    Ok(Json(serde_json::json!({
        "response": response,
        "revision": revision,
    })))
}

pub async fn create_manual_line(
    State(state): State<AppState>,
    Path((rfq_id, supplier_id)): Path<(i32, i32)>,
    Json(payload): Json<NewLineInput>,
) -> Result<Json<AppendedLine>, ApiError> {
    let service = ResponseLedgerService::new(state.db.clone());
    let pairing = service.find_pairing(rfq_id, supplier_id).await?;
    let appended = service.append_manual_line(pairing.id, payload).await?;
    Ok(Json(appended))
}

pub async fn revise_line(
    State(state): State<AppState>,
    Path(line_id): Path<i32>,
    Json(payload): Json<ReviseLineRequest>,
) -> Result<Json<AppendedLine>, ApiError> {
    let service = ResponseLedgerService::new(state.db.clone());
    let appended = service
        .revise_line(line_id, payload.overrides, &payload.reason, payload.created_by)
        .await?;
    Ok(Json(appended))
}

pub async fn list_actions(
    State(state): State<AppState>,
    Path(line_id): Path<i32>,
) -> Result<Json<Vec<crate::database::entities::line_actions::Model>>, ApiError> {
    let service = ResponseLedgerService::new(state.db.clone());
    let actions = service.list_actions(line_id).await?;
    Ok(Json(actions))
}
