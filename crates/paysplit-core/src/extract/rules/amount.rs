//! Net pay amount extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::FieldRule;
use super::patterns::NET_PAY;
use crate::models::statement::StatementFields;

/// Extracts the `Net Pay` amount: an optional `$`, digits with optional
/// thousands separators, and exactly two fractional digits.
///
/// No match leaves the amount `None`; callers must be able to tell "no
/// amount found" apart from an actual $0.00.
pub struct AmountRule;

impl FieldRule for AmountRule {
    fn field(&self) -> &'static str {
        "amount"
    }

    fn apply(&self, text: &str, fields: &mut StatementFields) {
        if let Some(caps) = NET_PAY.captures(text) {
            let cleaned = caps[1].replace(',', "");
            if let Ok(amount) = Decimal::from_str(&cleaned) {
                fields.amount = Some(amount);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount_of(text: &str) -> Option<Decimal> {
        let mut fields = StatementFields::default();
        AmountRule.apply(text, &mut fields);
        fields.amount
    }

    #[test]
    fn test_thousands_separators_stripped() {
        assert_eq!(
            amount_of("Net Pay: $1,234.56\n"),
            Some(Decimal::from_str("1234.56").unwrap())
        );
        assert_eq!(
            amount_of("Net Pay: $1,234,567.89\n"),
            Some(Decimal::from_str("1234567.89").unwrap())
        );
    }

    #[test]
    fn test_dollar_sign_and_colon_optional() {
        assert_eq!(
            amount_of("net pay 432.10\n"),
            Some(Decimal::from_str("432.10").unwrap())
        );
    }

    #[test]
    fn test_zero_amount_is_some() {
        assert_eq!(
            amount_of("Net Pay: $0.00\n"),
            Some(Decimal::from_str("0.00").unwrap())
        );
    }

    #[test]
    fn test_missing_label_is_none() {
        assert_eq!(amount_of("Gross Pay: $1,234.56\n"), None);
    }

    #[test]
    fn test_two_fractional_digits_required() {
        assert_eq!(amount_of("Net Pay: $1234.5\n"), None);
    }
}
