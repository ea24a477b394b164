pub mod api;
pub mod engine;
pub mod models;

// Re-export at crate root
pub use api::{create_router, AppState};
pub use engine::{MatchingEngine, OrderBookError};
pub use models::{BookView, LevelView, Order, OrderBook, OrderSide, Trade, TradeLedger};
