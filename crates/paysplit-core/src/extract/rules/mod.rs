//! Rule-based field extractors for statement pages.
//!
//! Each rule resolves one field of [`StatementFields`]. The parser runs
//! them in a fixed order (name, date, amount, company); the order is part
//! of the extraction semantics and must not change between runs.

pub mod amount;
pub mod company;
pub mod date;
pub mod name;
pub mod patterns;

pub use amount::AmountRule;
pub use company::CompanyRule;
pub use date::{DateRule, normalize_date};
pub use name::NameRule;

use crate::models::statement::StatementFields;

/// A single-field extraction rule.
///
/// Rules are pure: they read the page text and, on a match, overwrite the
/// field's sentinel default. A rule that finds nothing leaves the field
/// untouched.
pub trait FieldRule: Send + Sync {
    /// Field this rule resolves, for logs.
    fn field(&self) -> &'static str;

    /// Apply the rule to `text`, filling `fields` on a match.
    fn apply(&self, text: &str, fields: &mut StatementFields);
}

/// The standard rule set, in extraction order.
pub fn default_rules() -> Vec<Box<dyn FieldRule>> {
    vec![
        Box::new(NameRule),
        Box::new(DateRule),
        Box::new(AmountRule),
        Box::new(CompanyRule),
    ]
}
