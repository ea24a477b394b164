use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A validated limit order.
///
/// Price, quantity and the insertion sequence are fixed at creation; only
/// `remaining_quantity` changes while the order sits in the book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub pair: String,
    pub side: OrderSide,
    pub price: Decimal,
    pub quantity: Decimal,
    pub remaining_quantity: Decimal,
    /// Tie-break at equal price: lower sequence is served first.
    pub sequence: u64,
    pub timestamp: DateTime<Utc>,
}

/// Order side: Buy or Sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// The side of the book this order matches against.
    pub fn opposite(&self) -> OrderSide {
        match self {
            OrderSide::Buy => OrderSide::Sell,
            OrderSide::Sell => OrderSide::Buy,
        }
    }
}

impl Order {
    /// Create a new order with remaining quantity equal to the full quantity
    pub fn new(
        pair: String,
        side: OrderSide,
        price: Decimal,
        quantity: Decimal,
        sequence: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            pair,
            side,
            price,
            quantity,
            remaining_quantity: quantity,
            sequence,
            timestamp: Utc::now(),
        }
    }

    /// Reduce the remaining quantity by a matched amount
    pub fn fill(&mut self, quantity: Decimal) {
        self.remaining_quantity -= quantity;
    }

    /// Check if the order is fully filled
    pub fn is_filled(&self) -> bool {
        self.remaining_quantity <= Decimal::ZERO
    }
}
