use utoipa::OpenApi;

use crate::api::handlers;
use crate::api::responses::*;
use crate::models::{LevelView, OrderSide};

/// OpenAPI specification
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Matching API",
        version = "1.0.0",
        description = "A single-pair limit order matching engine and REST API built in Rust"
    ),
    paths(
        handlers::health_check,
        handlers::submit_limit_order,
        handlers::get_order_book,
        handlers::get_trades,
    ),
    components(
        schemas(
            OrderSide,
            LevelView,
            LimitOrderRequest,
            LimitOrderResponse,
            TradeResponse,
            OrderBookResponse,
            TradeListResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Orders", description = "Order submission endpoints"),
        (name = "Order Book", description = "Aggregated order book endpoints"),
        (name = "Trades", description = "Trade history endpoints"),
    )
)]
pub struct ApiDoc;
