use axum::{
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use anyhow::Result;

use super::handlers::{health, price_lists, responses, workspace};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

pub async fn create_app(db: DatabaseConnection, cors_origin: Option<&str>) -> Result<Router> {
    let state = AppState { db };

    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<axum::http::HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    };

    let app = Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1", api_v1_routes())
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        // Negotiation ledger
        .route(
            "/rfqs/:rfq_id/suppliers/:supplier_id/invite",
            post(responses::invite_supplier),
        )
        .route(
            "/rfqs/:rfq_id/suppliers/:supplier_id/response",
            get(responses::get_response),
        )
        .route(
            "/rfqs/:rfq_id/suppliers/:supplier_id/response/revisions",
            post(responses::create_revision),
        )
        .route(
            "/rfqs/:rfq_id/suppliers/:supplier_id/response/lines",
            post(responses::create_manual_line),
        )
        .route("/response-lines/:line_id/revise", post(responses::revise_line))
        .route("/response-lines/:line_id/actions", get(responses::list_actions))
        // Workspace
        .route("/rfqs/:rfq_id/workspace", get(workspace::get_workspace))
        // Price lists
        .route("/price-lists", post(price_lists::create_price_list))
        .route("/price-lists", get(price_lists::list_price_lists))
        .route("/price-lists/:id", get(price_lists::get_price_list))
        .route("/price-lists/:id/lines", post(price_lists::add_line))
        .route("/price-lists/:id/import/csv", post(price_lists::import_csv))
        .route("/price-lists/:id/import/xlsx", post(price_lists::import_xlsx))
        .route("/price-lists/:id/fill-gaps", post(price_lists::fill_gaps))
        .route("/price-lists/:id/activate", post(price_lists::activate))
}
