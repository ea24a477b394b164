use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::sync::Arc;

use crate::engine::{MatchingEngine, OrderBookError};

use super::responses::*;

/// Shared application state
pub type AppState = Arc<MatchingEngine>;

/// Convert OrderBookError to HTTP response
impl IntoResponse for OrderBookError {
    fn into_response(self) -> Response {
        let status = match &self {
            OrderBookError::InvalidSide(_)
            | OrderBookError::InvalidQuantityFormat(_)
            | OrderBookError::NonPositiveQuantity(_)
            | OrderBookError::InvalidPriceFormat(_)
            | OrderBookError::NonPositivePrice(_)
            | OrderBookError::UnsupportedInstrument(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339()
    }))
}

/// Submit a limit order
#[utoipa::path(
    post,
    path = "/api/v1/orders/limit",
    tag = "Orders",
    request_body = LimitOrderRequest,
    responses(
        (status = 201, description = "Order accepted", body = LimitOrderResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn submit_limit_order(
    State(engine): State<AppState>,
    Json(request): Json<LimitOrderRequest>,
) -> Result<(StatusCode, Json<LimitOrderResponse>), OrderBookError> {
    let pair = request.pair.as_deref().unwrap_or_else(|| engine.pair());

    let order_id =
        engine.submit_limit_order(&request.side, &request.quantity, &request.price, pair)?;

    Ok((StatusCode::CREATED, Json(LimitOrderResponse { order_id })))
}

/// Get the aggregated order book
#[utoipa::path(
    get,
    path = "/api/v1/orderbook/{pair}",
    tag = "Order Book",
    params(
        ("pair" = String, Path, description = "Currency pair (e.g., BTCZAR)")
    ),
    responses(
        (status = 200, description = "Aggregated order book", body = OrderBookResponse),
        (status = 400, description = "Unsupported pair", body = ErrorResponse)
    )
)]
pub async fn get_order_book(
    State(engine): State<AppState>,
    Path(pair): Path<String>,
) -> Result<Json<OrderBookResponse>, OrderBookError> {
    let view = engine.book_view(&pair)?;

    Ok(Json(OrderBookResponse {
        pair: engine.pair().to_string(),
        timestamp: Utc::now(),
        asks: view.asks,
        bids: view.bids,
    }))
}

/// Get recent trades, most recent first
#[utoipa::path(
    get,
    path = "/api/v1/trades/{pair}",
    tag = "Trades",
    params(
        ("pair" = String, Path, description = "Currency pair (e.g., BTCZAR)")
    ),
    responses(
        (status = 200, description = "Recent trades", body = TradeListResponse),
        (status = 400, description = "Unsupported pair", body = ErrorResponse)
    )
)]
pub async fn get_trades(
    State(engine): State<AppState>,
    Path(pair): Path<String>,
) -> Result<Json<TradeListResponse>, OrderBookError> {
    let trades = engine.recent_trades(&pair)?;

    let trade_responses: Vec<TradeResponse> = trades.into_iter().map(|t| t.into()).collect();

    Ok(Json(TradeListResponse {
        pair: engine.pair().to_string(),
        count: trade_responses.len(),
        trades: trade_responses,
    }))
}
