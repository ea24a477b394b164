use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::OrderSide;

/// A completed execution between an incoming order and a resting order.
///
/// The price is always the resting (maker) order's price. Immutable once
/// created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: Uuid,
    pub pair: String,
    pub price: Decimal,
    pub quantity: Decimal,
    /// Side of the incoming order that triggered the match
    pub taker_side: OrderSide,
    pub sequence_id: u64,
    pub traded_at: DateTime<Utc>,
}

impl Trade {
    /// Create a new trade
    pub fn new(
        pair: String,
        price: Decimal,
        quantity: Decimal,
        taker_side: OrderSide,
        sequence_id: u64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            pair,
            price,
            quantity,
            taker_side,
            sequence_id,
            traded_at: Utc::now(),
        }
    }

    /// Get the total trade value
    pub fn value(&self) -> Decimal {
        self.price * self.quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_trade_creation() {
        let trade = Trade::new(
            "BTCZAR".to_string(),
            dec!(100.50),
            dec!(10),
            OrderSide::Buy,
            1,
        );

        assert_eq!(trade.pair, "BTCZAR");
        assert_eq!(trade.price, dec!(100.50));
        assert_eq!(trade.quantity, dec!(10));
        assert_eq!(trade.taker_side, OrderSide::Buy);
        assert_eq!(trade.sequence_id, 1);
        assert_eq!(trade.value(), dec!(1005.00));
    }
}
