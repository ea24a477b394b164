//! Submission validation
//!
//! Turns the raw textual fields of a limit order request into typed values
//! before anything reaches the book. Validation is all-or-nothing: the
//! first failure is returned and no book state changes on any failure.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::OrderSide;

use super::errors::OrderBookError;

/// Parse an order side, case-insensitively
pub fn parse_side(raw: &str) -> Result<OrderSide, OrderBookError> {
    match raw.to_ascii_uppercase().as_str() {
        "BUY" => Ok(OrderSide::Buy),
        "SELL" => Ok(OrderSide::Sell),
        _ => Err(OrderBookError::InvalidSide(raw.to_string())),
    }
}

/// Parse a quantity: must be a decimal and strictly positive
pub fn parse_quantity(raw: &str) -> Result<Decimal, OrderBookError> {
    let quantity = Decimal::from_str(raw.trim())
        .map_err(|_| OrderBookError::InvalidQuantityFormat(raw.to_string()))?;
    if quantity <= Decimal::ZERO {
        return Err(OrderBookError::NonPositiveQuantity(quantity));
    }
    Ok(quantity)
}

/// Parse a price: must be a decimal and strictly positive
pub fn parse_price(raw: &str) -> Result<Decimal, OrderBookError> {
    let price = Decimal::from_str(raw.trim())
        .map_err(|_| OrderBookError::InvalidPriceFormat(raw.to_string()))?;
    if price <= Decimal::ZERO {
        return Err(OrderBookError::NonPositivePrice(price));
    }
    Ok(price)
}

/// Check the requested pair against the engine's configured instrument
pub fn validate_pair(raw: &str, supported: &str) -> Result<(), OrderBookError> {
    if !raw.eq_ignore_ascii_case(supported) {
        return Err(OrderBookError::UnsupportedInstrument(raw.to_string()));
    }
    Ok(())
}

/// Validate a full submission, returning the typed fields.
///
/// Single entry point used by the engine: pair first, then side, quantity,
/// price, stopping at the first failure.
pub fn validate_submission(
    side: &str,
    quantity: &str,
    price: &str,
    pair: &str,
    supported: &str,
) -> Result<(OrderSide, Decimal, Decimal), OrderBookError> {
    validate_pair(pair, supported)?;
    let side = parse_side(side)?;
    let quantity = parse_quantity(quantity)?;
    let price = parse_price(price)?;
    Ok((side, quantity, price))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_side_case_insensitive() {
        assert_eq!(parse_side("BUY").unwrap(), OrderSide::Buy);
        assert_eq!(parse_side("buy").unwrap(), OrderSide::Buy);
        assert_eq!(parse_side("Sell").unwrap(), OrderSide::Sell);
    }

    #[test]
    fn test_parse_side_invalid() {
        assert!(matches!(
            parse_side("HOLD"),
            Err(OrderBookError::InvalidSide(_))
        ));
        assert!(matches!(parse_side(""), Err(OrderBookError::InvalidSide(_))));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("10").unwrap(), dec!(10));
        assert_eq!(parse_quantity("0.001").unwrap(), dec!(0.001));
        assert_eq!(parse_quantity(" 2.5 ").unwrap(), dec!(2.5));
    }

    #[test]
    fn test_parse_quantity_format_error() {
        assert!(matches!(
            parse_quantity("ten"),
            Err(OrderBookError::InvalidQuantityFormat(_))
        ));
        assert!(matches!(
            parse_quantity(""),
            Err(OrderBookError::InvalidQuantityFormat(_))
        ));
    }

    #[test]
    fn test_parse_quantity_non_positive() {
        assert!(matches!(
            parse_quantity("0"),
            Err(OrderBookError::NonPositiveQuantity(_))
        ));
        assert!(matches!(
            parse_quantity("-3"),
            Err(OrderBookError::NonPositiveQuantity(_))
        ));
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("100.50").unwrap(), dec!(100.50));
        assert!(matches!(
            parse_price("abc"),
            Err(OrderBookError::InvalidPriceFormat(_))
        ));
        assert!(matches!(
            parse_price("0"),
            Err(OrderBookError::NonPositivePrice(_))
        ));
    }

    #[test]
    fn test_validate_pair() {
        assert!(validate_pair("BTCZAR", "BTCZAR").is_ok());
        assert!(validate_pair("btczar", "BTCZAR").is_ok());
        assert!(matches!(
            validate_pair("ETHZAR", "BTCZAR"),
            Err(OrderBookError::UnsupportedInstrument(_))
        ));
    }

    #[test]
    fn test_validate_submission() {
        let (side, quantity, price) =
            validate_submission("buy", "10", "100.50", "BTCZAR", "BTCZAR").unwrap();
        assert_eq!(side, OrderSide::Buy);
        assert_eq!(quantity, dec!(10));
        assert_eq!(price, dec!(100.50));
    }

    #[test]
    fn test_validate_submission_checks_pair_first() {
        // A bad pair wins over other bad fields
        assert!(matches!(
            validate_submission("HOLD", "x", "y", "ETHZAR", "BTCZAR"),
            Err(OrderBookError::UnsupportedInstrument(_))
        ));
    }
}
