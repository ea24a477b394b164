use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{LevelView, OrderSide, Trade};

/// Request to submit a limit order.
///
/// Side, quantity and price arrive as strings and are validated by the
/// engine; nothing is parsed at the HTTP boundary.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LimitOrderRequest {
    /// "BUY" or "SELL", case-insensitive
    #[schema(example = "BUY")]
    pub side: String,
    #[schema(example = "0.5")]
    pub quantity: String,
    #[schema(example = "1200000.00")]
    pub price: String,
    /// Currency pair; defaults to the engine's configured pair
    #[schema(example = "BTCZAR")]
    pub pair: Option<String>,
}

/// Response after submitting a limit order
#[derive(Debug, Serialize, ToSchema)]
pub struct LimitOrderResponse {
    pub order_id: Uuid,
}

/// Trade information in responses
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TradeResponse {
    pub trade_id: Uuid,
    #[schema(value_type = String, example = "1200000.00")]
    pub price: Decimal,
    #[schema(value_type = String, example = "0.5")]
    pub quantity: Decimal,
    pub taker_side: OrderSide,
    pub sequence_id: u64,
    pub traded_at: DateTime<Utc>,
}

impl From<Trade> for TradeResponse {
    fn from(trade: Trade) -> Self {
        Self {
            trade_id: trade.id,
            price: trade.price,
            quantity: trade.quantity,
            taker_side: trade.taker_side,
            sequence_id: trade.sequence_id,
            traded_at: trade.traded_at,
        }
    }
}

/// Aggregated order book response
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderBookResponse {
    pub pair: String,
    pub timestamp: DateTime<Utc>,
    pub asks: Vec<LevelView>,
    pub bids: Vec<LevelView>,
}

/// Trade history response
#[derive(Debug, Serialize, ToSchema)]
pub struct TradeListResponse {
    pub pair: String,
    pub trades: Vec<TradeResponse>,
    pub count: usize,
}

/// Error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
