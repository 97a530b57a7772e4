use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;

use crate::database::entities::{price_list_lines, supplier_price_lists};
use crate::errors::ApiError;
use crate::server::app::AppState;
use crate::services::price_list_service::{
    ActivationReport, ImportReport, NewPriceList, NewPriceListLine, PriceListDetail,
    PriceListService,
};

#[derive(Deserialize)]
pub struct ListQuery {
    pub supplier_id: Option<i32>,
}

pub async fn create_price_list(
    State(state): State<AppState>,
    Json(payload): Json<NewPriceList>,
) -> Result<Json<supplier_price_lists::Model>, ApiError> {
    let service = PriceListService::new(state.db.clone());
    let price_list = service.create_list(payload).await?;
    Ok(Json(price_list))
}

pub async fn list_price_lists(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<supplier_price_lists::Model>>, ApiError> {
    let service = PriceListService::new(state.db.clone());
    let lists = service.list_lists(query.supplier_id).await?;
    Ok(Json(lists))
}

pub async fn get_price_list(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PriceListDetail>, ApiError> {
    let service = PriceListService::new(state.db.clone());
    let detail = service.get_list(id).await?;
    Ok(Json(detail))
}

pub async fn add_line(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<NewPriceListLine>,
) -> Result<Json<price_list_lines::Model>, ApiError> {
    let service = PriceListService::new(state.db.clone());
    let line = service.add_line(id, payload).await?;
    Ok(Json(line))
}

pub async fn import_csv(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<Json<ImportReport>, ApiError> {
    if body.is_empty() {
        return Err(ApiError::bad_request("INVALID_UPLOAD", "empty upload body"));
    }
    let service = PriceListService::new(state.db.clone());
    let report = service.import_csv(id, &body).await?;
    Ok(Json(report))
}

pub async fn import_xlsx(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    body: Bytes,
) -> Result<Json<ImportReport>, ApiError> {
    if body.is_empty() {
        return Err(ApiError::bad_request("INVALID_UPLOAD", "empty upload body"));
    }
    let service = PriceListService::new(state.db.clone());
    let report = service.import_xlsx(id, &body).await?;
    Ok(Json(report))
}

pub async fn fill_gaps(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ImportReport>, ApiError> {
    let service = PriceListService::new(state.db.clone());
    let report = service.fill_gaps(id).await?;
    Ok(Json(report))
}

pub async fn activate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ActivationReport>, ApiError> {
    let service = PriceListService::new(state.db.clone());
    let report = service.activate(id).await?;
    Ok(Json(report))
}
