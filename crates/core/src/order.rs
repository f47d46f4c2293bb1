//! Free-text order command parsing ("Beli 2 Produk A").

use crate::errors::OrderError;

/// A parsed order command: how many units, and the free-text fragment used
/// to match a product name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderCommand {
    pub quantity: i64,
    pub fragment: String,
}

/// Parse an order-intent message.
///
/// The message is lowercased and split on whitespace. The first token that
/// parses as a non-negative integer is the quantity; every token after it,
/// rejoined with single spaces, is the product-name fragment. A message
/// with no integer token is a format error.
pub fn parse_order(text: &str) -> Result<OrderCommand, OrderError> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();

    let quantity_index = tokens
        .iter()
        .position(|token| token.chars().all(|c| c.is_ascii_digit()) && !token.is_empty())
        .ok_or(OrderError::Format)?;

    let quantity = tokens[quantity_index].parse::<i64>().map_err(|_| OrderError::Format)?;
    let fragment = tokens[quantity_index + 1..].join(" ");

    Ok(OrderCommand { quantity, fragment })
}

#[cfg(test)]
mod tests {
    use super::{parse_order, OrderCommand};
    use crate::errors::OrderError;

    #[test]
    fn parses_quantity_and_fragment() {
        let command = parse_order("buy 2 product a").expect("parse");
        assert_eq!(command, OrderCommand { quantity: 2, fragment: "product a".to_string() });
    }

    #[test]
    fn lowercases_and_keeps_tokens_after_quantity() {
        let command = parse_order("Beli 3 Produk B").expect("parse");
        assert_eq!(command.quantity, 3);
        assert_eq!(command.fragment, "produk b");
    }

    #[test]
    fn first_integer_token_wins() {
        let command = parse_order("order 2 produk 5000").expect("parse");
        assert_eq!(command.quantity, 2);
        assert_eq!(command.fragment, "produk 5000");
    }

    #[test]
    fn no_digit_token_is_a_format_error() {
        assert!(matches!(parse_order("beli produk a"), Err(OrderError::Format)));
        assert!(matches!(parse_order("order"), Err(OrderError::Format)));
    }

    #[test]
    fn mixed_alphanumeric_tokens_are_not_quantities() {
        // "2x" is not a bare integer; parsing must not pick it up.
        assert!(matches!(parse_order("beli 2x produk a"), Err(OrderError::Format)));
    }

    #[test]
    fn trailing_quantity_yields_empty_fragment() {
        let command = parse_order("beli 2").expect("parse");
        assert_eq!(command.quantity, 2);
        assert_eq!(command.fragment, "");
    }

    #[test]
    fn oversized_quantity_is_a_format_error() {
        // Larger than i64: treated the same as an unparseable command.
        assert!(matches!(parse_order("beli 99999999999999999999 produk a"), Err(OrderError::Format)));
    }
}
