use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, VecDeque};
use utoipa::ToSchema;
use uuid::Uuid;

use super::{Order, OrderSide};

/// A single price point on one side of the book.
///
/// Holds the FIFO queue of order ids resting at this price. The orders
/// themselves live in `OrderBook::orders`; the queue position together with
/// the price is the full priority key, so nothing here reads the mutable
/// remaining quantity.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    pub price: Decimal,
    pub orders: VecDeque<Uuid>,
}

impl PriceLevel {
    /// Create a new price level
    pub fn new(price: Decimal) -> Self {
        Self {
            price,
            orders: VecDeque::new(),
        }
    }

    /// Append an order id behind every order already at this price
    pub fn add_order(&mut self, order_id: Uuid) {
        self.orders.push_back(order_id);
    }

    /// Remove an order id from this price level
    pub fn remove_order(&mut self, order_id: Uuid) -> bool {
        if let Some(pos) = self.orders.iter().position(|&id| id == order_id) {
            self.orders.remove(pos);
            return true;
        }
        false
    }

    /// Check if this price level is empty
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Aggregated view of one price level: total resting quantity and the
/// number of contributing orders. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LevelView {
    #[schema(value_type = String, example = "100.50")]
    pub price: Decimal,
    #[schema(value_type = String, example = "12.5")]
    pub quantity: Decimal,
    pub order_count: usize,
}

/// Both sides of the book for one pair.
///
/// Bids and asks are price-keyed maps of FIFO levels; the mutable orders are
/// indexed by id. An order is present on a side if and only if its remaining
/// quantity is above zero.
#[derive(Debug, Clone)]
pub struct OrderBook {
    pub pair: String,
    pub bids: BTreeMap<Decimal, PriceLevel>,
    pub asks: BTreeMap<Decimal, PriceLevel>,
    pub orders: HashMap<Uuid, Order>,
}

impl OrderBook {
    /// Create a new, empty order book for a pair
    pub fn new(pair: String) -> Self {
        Self {
            pair,
            bids: BTreeMap::new(),
            asks: BTreeMap::new(),
            orders: HashMap::new(),
        }
    }

    /// Get the best bid price (highest buy price)
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.keys().next_back().copied()
    }

    /// Get the best ask price (lowest sell price)
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.keys().next().copied()
    }

    /// Top of book on the side an incoming order would match against:
    /// the price and the oldest order id at that price.
    pub fn best_opposite(&self, incoming_side: OrderSide) -> Option<(Decimal, Uuid)> {
        let level = match incoming_side {
            OrderSide::Buy => self.asks.values().next(),
            OrderSide::Sell => self.bids.values().next_back(),
        }?;
        let order_id = *level.orders.front()?;
        Some((level.price, order_id))
    }

    /// Rest an order with remaining quantity on its own side, behind all
    /// orders already at its price.
    pub fn insert_resting(&mut self, order: Order) {
        let levels = match order.side {
            OrderSide::Buy => &mut self.bids,
            OrderSide::Sell => &mut self.asks,
        };
        let level = levels
            .entry(order.price)
            .or_insert_with(|| PriceLevel::new(order.price));
        level.add_order(order.id);
        self.orders.insert(order.id, order);
    }

    /// Remove an order from its price level and the order index, dropping
    /// the level once it holds no orders.
    pub fn remove_order(&mut self, order_id: Uuid) -> Option<Order> {
        let order = self.orders.remove(&order_id)?;
        let levels = match order.side {
            OrderSide::Buy => &mut self.bids,
            OrderSide::Sell => &mut self.asks,
        };
        if let Some(level) = levels.get_mut(&order.price) {
            level.remove_order(order_id);
            if level.is_empty() {
                levels.remove(&order.price);
            }
        }
        Some(order)
    }

    /// Ask levels, ascending by price
    pub fn ask_levels(&self) -> Vec<LevelView> {
        self.asks
            .values()
            .map(|level| self.level_view(level))
            .collect()
    }

    /// Bid levels, descending by price
    pub fn bid_levels(&self) -> Vec<LevelView> {
        self.bids
            .values()
            .rev()
            .map(|level| self.level_view(level))
            .collect()
    }

    /// Recompute one level's aggregate from the live orders
    fn level_view(&self, level: &PriceLevel) -> LevelView {
        let quantity = level
            .orders
            .iter()
            .filter_map(|id| self.orders.get(id))
            .map(|order| order.remaining_quantity)
            .sum();
        LevelView {
            price: level.price,
            quantity,
            order_count: level.orders.len(),
        }
    }
}

/// Aggregated snapshot of both sides, asks ascending and bids descending.
#[derive(Debug, Clone)]
pub struct BookView {
    pub asks: Vec<LevelView>,
    pub bids: Vec<LevelView>,
}
