pub mod ledger;
pub mod order;
pub mod orderbook;
pub mod trade;

pub use ledger::{TradeLedger, DEFAULT_TRADE_CAPACITY};
pub use order::{Order, OrderSide};
pub use orderbook::{BookView, LevelView, OrderBook, PriceLevel};
pub use trade::Trade;
