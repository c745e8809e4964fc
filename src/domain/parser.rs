//! Console token parsing for the drill flows.
//!
//! Every flow reads whole lines from the console and hands single tokens to
//! the functions in this module. Parsers are pure: `&str` in, typed value
//! out. Field parsers for the kiosk return [`OrderError`] values so the
//! order flow can reject with the matching labeled message.
//!
//! Quantity and surcharge tokens that are not integers behave like a failed
//! numeric scan: the value falls back to zero, so a garbage quantity fails
//! the range check and a garbage flag reads as "no surcharge".

use super::errors::{OrderError, OrderResult};
use super::models::{ItemType, Size, MAX_AMOUNT, MIN_AMOUNT};

/// Parses a menu selection.
///
/// Returns `None` for anything that is not a non-negative integer; the
/// dispatcher treats that the same as an out-of-range selection.
pub fn parse_selection(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok()
}

/// Parses a signed integer token.
pub fn parse_integer(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

/// Parses two whitespace-separated integers from one line.
///
/// Trailing tokens are ignored, matching a two-value scan.
pub fn parse_integer_pair(input: &str) -> Option<(i64, i64)> {
    let mut tokens = input.split_whitespace();
    let first = tokens.next().and_then(|t| t.parse::<i64>().ok())?;
    let second = tokens.next().and_then(|t| t.parse::<i64>().ok())?;
    Some((first, second))
}

/// Parses an item type code (`F` or `M`). Codes are case-sensitive.
pub fn parse_item_type(input: &str) -> OrderResult<ItemType> {
    match input.trim() {
        "F" => Ok(ItemType::Fruit),
        "M" => Ok(ItemType::Milk),
        _ => Err(OrderError::InvalidType),
    }
}

/// Parses a size code (`S` or `B`). Codes are case-sensitive.
pub fn parse_size(input: &str) -> OrderResult<Size> {
    match input.trim() {
        "S" => Ok(Size::Small),
        "B" => Ok(Size::Big),
        _ => Err(OrderError::InvalidSize),
    }
}

/// Parses an order quantity, accepting only values strictly between
/// [`MIN_AMOUNT`] and [`MAX_AMOUNT`].
pub fn parse_quantity(input: &str) -> OrderResult<u32> {
    let quantity = parse_integer(input).unwrap_or(0);
    if quantity > MIN_AMOUNT && quantity < MAX_AMOUNT {
        Ok(quantity as u32)
    } else {
        Err(OrderError::InvalidQuantity)
    }
}

/// Parses the surcharge flag: zero means no, any other integer means yes.
pub fn parse_flag(input: &str) -> bool {
    parse_integer(input).map(|n| n != 0).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection() {
        assert_eq!(parse_selection("3"), Some(3));
        assert_eq!(parse_selection("  6 "), Some(6));
        assert_eq!(parse_selection("abc"), None);
        assert_eq!(parse_selection("-1"), None);
        assert_eq!(parse_selection(""), None);
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("42"), Some(42));
        assert_eq!(parse_integer("-7"), Some(-7));
        assert_eq!(parse_integer("4.5"), None);
        assert_eq!(parse_integer("x"), None);
    }

    #[test]
    fn test_parse_integer_pair() {
        assert_eq!(parse_integer_pair("3 4"), Some((3, 4)));
        assert_eq!(parse_integer_pair("  -1   2  "), Some((-1, 2)));
        assert_eq!(parse_integer_pair("3 4 5"), Some((3, 4)));
        assert_eq!(parse_integer_pair("3"), None);
        assert_eq!(parse_integer_pair("a b"), None);
    }

    #[test]
    fn test_parse_item_type() {
        assert_eq!(parse_item_type("F"), Ok(ItemType::Fruit));
        assert_eq!(parse_item_type(" M "), Ok(ItemType::Milk));
        assert_eq!(parse_item_type("f"), Err(OrderError::InvalidType));
        assert_eq!(parse_item_type("X"), Err(OrderError::InvalidType));
        assert_eq!(parse_item_type("FM"), Err(OrderError::InvalidType));
    }

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("S"), Ok(Size::Small));
        assert_eq!(parse_size("B"), Ok(Size::Big));
        assert_eq!(parse_size("b"), Err(OrderError::InvalidSize));
        assert_eq!(parse_size("L"), Err(OrderError::InvalidSize));
    }

    #[test]
    fn test_parse_quantity_accepts_open_interval() {
        assert_eq!(parse_quantity("2"), Ok(2));
        assert_eq!(parse_quantity("8"), Ok(8));
    }

    #[test]
    fn test_parse_quantity_rejects_bounds() {
        assert_eq!(parse_quantity("1"), Err(OrderError::InvalidQuantity));
        assert_eq!(parse_quantity("9"), Err(OrderError::InvalidQuantity));
        assert_eq!(parse_quantity("0"), Err(OrderError::InvalidQuantity));
        assert_eq!(parse_quantity("-3"), Err(OrderError::InvalidQuantity));
    }

    #[test]
    fn test_parse_quantity_garbage_reads_as_zero() {
        assert_eq!(parse_quantity("many"), Err(OrderError::InvalidQuantity));
        assert_eq!(parse_quantity(""), Err(OrderError::InvalidQuantity));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("-5"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("yes"));
        assert!(!parse_flag(""));
    }
}
