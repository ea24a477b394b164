//! Error types for order intake
//!
//! Every error here is raised while validating a submission, before any
//! book state is touched. The matching loop itself operates on validated
//! orders and has no failure path.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while turning a raw submission into an order
#[derive(Debug, Error)]
pub enum OrderBookError {
    /// Side was not BUY or SELL (case-insensitive)
    #[error("Invalid order side: {0}")]
    InvalidSide(String),

    /// Quantity was not a parseable decimal
    #[error("Invalid quantity format: {0}")]
    InvalidQuantityFormat(String),

    /// Quantity parsed but was zero or negative
    #[error("Quantity must be positive, got: {0}")]
    NonPositiveQuantity(Decimal),

    /// Price was not a parseable decimal
    #[error("Invalid price format: {0}")]
    InvalidPriceFormat(String),

    /// Price parsed but was zero or negative
    #[error("Price must be positive, got: {0}")]
    NonPositivePrice(Decimal),

    /// The pair does not match the engine's configured instrument
    #[error("Unsupported currency pair: {0}")]
    UnsupportedInstrument(String),
}
