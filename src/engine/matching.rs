//! Order matching
//!
//! Resolves an incoming order against the opposite side of the book under
//! price-then-time priority. Trades always execute at the resting (maker)
//! order's price, so the incoming order never does worse than its limit.

use rust_decimal::Decimal;

use crate::models::{Order, OrderBook, OrderSide, Trade};

/// Match an incoming order against the opposite side of the book.
///
/// Walks the top of the opposite side while prices cross, decrementing both
/// remaining quantities and removing makers the moment they are exhausted.
/// Returns the executed trades in order; the caller rests whatever is left
/// of the incoming order. Operates only on validated orders and cannot
/// fail.
pub fn match_incoming(
    book: &mut OrderBook,
    incoming: &mut Order,
    next_sequence_id: &mut u64,
) -> Vec<Trade> {
    let mut trades = Vec::new();

    while incoming.remaining_quantity > Decimal::ZERO {
        let Some((maker_price, maker_id)) = book.best_opposite(incoming.side) else {
            break;
        };

        let crosses = match incoming.side {
            OrderSide::Buy => incoming.price >= maker_price,
            OrderSide::Sell => incoming.price <= maker_price,
        };
        // The book is price-ordered, so no deeper level can cross either
        if !crosses {
            break;
        }

        let Some(maker) = book.orders.get_mut(&maker_id) else {
            break;
        };

        let traded = incoming.remaining_quantity.min(maker.remaining_quantity);
        incoming.fill(traded);
        maker.fill(traded);
        let maker_filled = maker.is_filled();

        let trade = Trade::new(
            book.pair.clone(),
            maker_price,
            traded,
            incoming.side,
            *next_sequence_id,
        );
        *next_sequence_id += 1;

        tracing::debug!(
            trade_id = %trade.id,
            price = %trade.price,
            quantity = %trade.quantity,
            taker_side = ?trade.taker_side,
            sequence_id = trade.sequence_id,
            "trade executed"
        );
        trades.push(trade);

        if maker_filled {
            book.remove_order(maker_id);
        }
    }

    trades
}
