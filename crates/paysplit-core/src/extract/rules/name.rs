//! Recipient name extraction.

use super::FieldRule;
use super::patterns::NAME_PATTERN;
use crate::models::statement::StatementFields;

/// First name-shaped run of text wins; no match leaves the sentinel.
pub struct NameRule;

impl FieldRule for NameRule {
    fn field(&self) -> &'static str {
        "name"
    }

    fn apply(&self, text: &str, fields: &mut StatementFields) {
        if let Some(caps) = NAME_PATTERN.captures(text) {
            fields.name = caps[1].trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        let mut fields = StatementFields::default();
        NameRule.apply("Jane Doe\nCompany: Acme\nJohn Roe\n", &mut fields);
        assert_eq!(fields.name, "Jane Doe");
    }

    #[test]
    fn test_stops_at_non_letter() {
        // The colon after "Company" bounds the greedy run back to the
        // newline, so only the name line is captured.
        let mut fields = StatementFields::default();
        NameRule.apply("Mary Ann Smith\nCompany: Acme\n", &mut fields);
        assert_eq!(fields.name, "Mary Ann Smith");
    }

    #[test]
    fn test_no_match_keeps_sentinel() {
        let mut fields = StatementFields::default();
        NameRule.apply("1234 5678\n", &mut fields);
        assert_eq!(fields.name, "Unknown");
    }
}
