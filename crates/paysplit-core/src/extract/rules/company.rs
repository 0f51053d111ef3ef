//! Issuing company extraction.

use super::FieldRule;
use super::patterns::COMPANY;
use crate::models::statement::StatementFields;

/// Captures the remainder of the first `Company` label's line.
pub struct CompanyRule;

impl FieldRule for CompanyRule {
    fn field(&self) -> &'static str {
        "company"
    }

    fn apply(&self, text: &str, fields: &mut StatementFields) {
        if let Some(caps) = COMPANY.captures(text) {
            fields.company = caps[1].trim().to_string();
        }
    }
}
