use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::engine::MatchingEngine;

use super::handlers::*;
use super::openapi::ApiDoc;

/// Create the API router with Swagger UI
pub fn create_router(engine: Arc<MatchingEngine>) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Health check
        .route("/health", get(health_check))
        // Order endpoints
        .route("/api/v1/orders/limit", post(submit_limit_order))
        // Order book endpoints
        .route("/api/v1/orderbook/:pair", get(get_order_book))
        // Trade endpoints
        .route("/api/v1/trades/:pair", get(get_trades))
        .with_state(engine)
}
