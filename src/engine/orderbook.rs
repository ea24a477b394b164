//! Matching engine
//!
//! `MatchingEngine` owns the book, the trade ledger and both sequence
//! counters for a single pair, behind one lock. Every submission resolves
//! fully inside the lock: validate, match, record trades, rest the
//! remainder. Reads take the same lock, so a view always reflects the
//! latest completed submission.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{BookView, Order, OrderBook, Trade, TradeLedger};

use super::errors::OrderBookError;
use super::matching::match_incoming;
use super::validation::{validate_pair, validate_submission};

struct EngineState {
    book: OrderBook,
    ledger: TradeLedger,
    next_order_sequence: u64,
    next_trade_sequence: u64,
}

/// Matching engine for one currency pair
pub struct MatchingEngine {
    pair: String,
    state: RwLock<EngineState>,
}

impl MatchingEngine {
    /// Create an engine for a pair, retaining at most `trade_capacity`
    /// trades in the history.
    pub fn new(pair: impl Into<String>, trade_capacity: usize) -> Self {
        let pair = pair.into();
        Self {
            state: RwLock::new(EngineState {
                book: OrderBook::new(pair.clone()),
                ledger: TradeLedger::new(trade_capacity),
                next_order_sequence: 1,
                next_trade_sequence: 1,
            }),
            pair,
        }
    }

    /// The pair this engine trades
    pub fn pair(&self) -> &str {
        &self.pair
    }

    /// Validate and submit a limit order from raw request fields.
    ///
    /// On success the order has been matched as far as prices cross and any
    /// remainder rests in the book. On any validation error the book is
    /// untouched.
    pub fn submit_limit_order(
        &self,
        side: &str,
        quantity: &str,
        price: &str,
        pair: &str,
    ) -> Result<Uuid, OrderBookError> {
        let (side, quantity, price) =
            validate_submission(side, quantity, price, pair, &self.pair)?;

        let mut state = self.state.write();
        let state = &mut *state;

        let sequence = state.next_order_sequence;
        state.next_order_sequence += 1;

        let mut order = Order::new(self.pair.clone(), side, price, quantity, sequence);
        let order_id = order.id;
        tracing::debug!(
            %order_id,
            ?side,
            %price,
            %quantity,
            sequence,
            "limit order accepted"
        );

        let trades = match_incoming(&mut state.book, &mut order, &mut state.next_trade_sequence);
        // Ledger append is the commit point; it happens under the same
        // lock as the book mutation, after the loop has run to completion.
        for trade in trades {
            state.ledger.record(trade);
        }

        if order.remaining_quantity > Decimal::ZERO {
            state.book.insert_resting(order);
        }

        Ok(order_id)
    }

    /// Aggregated book view, asks ascending and bids descending by price
    pub fn book_view(&self, pair: &str) -> Result<BookView, OrderBookError> {
        validate_pair(pair, &self.pair)?;
        let state = self.state.read();
        Ok(BookView {
            asks: state.book.ask_levels(),
            bids: state.book.bid_levels(),
        })
    }

    /// Retained trades, most recent first
    pub fn recent_trades(&self, pair: &str) -> Result<Vec<Trade>, OrderBookError> {
        validate_pair(pair, &self.pair)?;
        Ok(self.state.read().ledger.recent())
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new("BTCZAR", crate::models::DEFAULT_TRADE_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderSide;
    use rust_decimal_macros::dec;

    #[test]
    fn test_submit_and_match() {
        let engine = MatchingEngine::default();

        engine
            .submit_limit_order("SELL", "10", "100.00", "BTCZAR")
            .unwrap();
        engine
            .submit_limit_order("BUY", "10", "100.00", "BTCZAR")
            .unwrap();

        let trades = engine.recent_trades("BTCZAR").unwrap();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].price, dec!(100.00));
        assert_eq!(trades[0].quantity, dec!(10));
        assert_eq!(trades[0].taker_side, OrderSide::Buy);

        let view = engine.book_view("BTCZAR").unwrap();
        assert!(view.asks.is_empty());
        assert!(view.bids.is_empty());
    }

    #[test]
    fn test_remainder_rests_in_book() {
        let engine = MatchingEngine::default();

        engine
            .submit_limit_order("SELL", "5", "100.00", "BTCZAR")
            .unwrap();
        engine
            .submit_limit_order("BUY", "10", "100.00", "BTCZAR")
            .unwrap();

        let trades = engine.recent_trades("BTCZAR").unwrap();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].quantity, dec!(5));

        let view = engine.book_view("BTCZAR").unwrap();
        assert!(view.asks.is_empty());
        assert_eq!(view.bids.len(), 1);
        assert_eq!(view.bids[0].price, dec!(100.00));
        assert_eq!(view.bids[0].quantity, dec!(5));
        assert_eq!(view.bids[0].order_count, 1);
    }

    #[test]
    fn test_unsupported_pair_rejected_everywhere() {
        let engine = MatchingEngine::default();

        assert!(matches!(
            engine.submit_limit_order("BUY", "1", "100.00", "ETHZAR"),
            Err(OrderBookError::UnsupportedInstrument(_))
        ));
        assert!(engine.book_view("ETHZAR").is_err());
        assert!(engine.recent_trades("ETHZAR").is_err());

        // Case differences are accepted
        assert!(engine.book_view("btczar").is_ok());
    }

    #[test]
    fn test_failed_validation_leaves_book_unchanged() {
        let engine = MatchingEngine::default();

        assert!(engine
            .submit_limit_order("BUY", "-1", "100.00", "BTCZAR")
            .is_err());
        assert!(engine
            .submit_limit_order("HOLD", "1", "100.00", "BTCZAR")
            .is_err());
        assert!(engine
            .submit_limit_order("BUY", "1", "oops", "BTCZAR")
            .is_err());

        let view = engine.book_view("BTCZAR").unwrap();
        assert!(view.asks.is_empty());
        assert!(view.bids.is_empty());
        assert!(engine.recent_trades("BTCZAR").unwrap().is_empty());
    }

    #[test]
    fn test_ledger_keeps_most_recent_hundred() {
        let engine = MatchingEngine::default();

        for _ in 0..105 {
            engine
                .submit_limit_order("SELL", "1", "100.00", "BTCZAR")
                .unwrap();
            engine
                .submit_limit_order("BUY", "1", "100.00", "BTCZAR")
                .unwrap();
        }

        let trades = engine.recent_trades("BTCZAR").unwrap();
        assert_eq!(trades.len(), 100);
        assert_eq!(trades[0].sequence_id, 105);
        assert_eq!(trades[99].sequence_id, 6);

        let view = engine.book_view("BTCZAR").unwrap();
        assert!(view.asks.is_empty());
        assert!(view.bids.is_empty());
    }

    #[test]
    fn test_time_priority_across_submissions() {
        let engine = MatchingEngine::default();

        let first = engine
            .submit_limit_order("SELL", "5", "100.00", "BTCZAR")
            .unwrap();
        let second = engine
            .submit_limit_order("SELL", "5", "100.00", "BTCZAR")
            .unwrap();
        engine
            .submit_limit_order("BUY", "5", "100.00", "BTCZAR")
            .unwrap();

        let state = engine.state.read();
        assert!(state.book.orders.get(&first).is_none());
        assert!(state.book.orders.get(&second).is_some());
    }

    #[test]
    fn test_custom_trade_capacity() {
        let engine = MatchingEngine::new("BTCZAR", 2);

        for _ in 0..3 {
            engine
                .submit_limit_order("SELL", "1", "100.00", "BTCZAR")
                .unwrap();
            engine
                .submit_limit_order("BUY", "1", "100.00", "BTCZAR")
                .unwrap();
        }

        let trades = engine.recent_trades("BTCZAR").unwrap();
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].sequence_id, 3);
        assert_eq!(trades[1].sequence_id, 2);
    }
}
