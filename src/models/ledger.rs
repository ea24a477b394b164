use std::collections::VecDeque;

use super::Trade;

/// Default number of trades retained in the history.
pub const DEFAULT_TRADE_CAPACITY: usize = 100;

/// Bounded trade history, most recent first.
///
/// Appends place the trade at the head; once the capacity is exceeded the
/// oldest trade falls off the tail.
#[derive(Debug, Clone)]
pub struct TradeLedger {
    trades: VecDeque<Trade>,
    capacity: usize,
}

impl TradeLedger {
    /// Create a ledger retaining at most `capacity` trades
    pub fn new(capacity: usize) -> Self {
        Self {
            trades: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a trade at the head, evicting the oldest past capacity
    pub fn record(&mut self, trade: Trade) {
        self.trades.push_front(trade);
        if self.trades.len() > self.capacity {
            self.trades.pop_back();
        }
    }

    /// Snapshot of retained trades, most recent first
    pub fn recent(&self) -> Vec<Trade> {
        self.trades.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for TradeLedger {
    fn default() -> Self {
        Self::new(DEFAULT_TRADE_CAPACITY)
    }
}
