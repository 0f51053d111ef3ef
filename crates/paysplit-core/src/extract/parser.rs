//! Heuristic statement parser.

use tracing::debug;

use super::rules::{FieldRule, default_rules};
use crate::models::config::ExtractionConfig;
use crate::models::statement::StatementFields;

/// Parses raw page text into best-effort [`StatementFields`].
///
/// Parsing is pure and total: every call returns a record, with sentinel
/// values for whatever could not be resolved. The same text always yields
/// the same record.
pub struct StatementParser {
    anchor: String,
    rules: Vec<Box<dyn FieldRule>>,
}

impl StatementParser {
    /// Parser with the default anchor token.
    pub fn new() -> Self {
        Self::from_config(&ExtractionConfig::default())
    }

    /// Parser configured from an [`ExtractionConfig`].
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            anchor: config.anchor_token.clone(),
            rules: default_rules(),
        }
    }

    /// Parse one page's text.
    ///
    /// If the anchor token occurs in the text, only the text after its
    /// first occurrence is scanned; shared headers and footers that repeat
    /// on every page sit before the anchor and would otherwise produce
    /// false matches. Rules then run in their fixed order.
    pub fn parse(&self, text: &str) -> StatementFields {
        let scope = match text.split_once(&self.anchor) {
            Some((_, after)) => after,
            None => text,
        };

        let mut fields = StatementFields::default();
        for rule in &self.rules {
            rule.apply(scope, &mut fields);
        }

        debug!(
            "parsed fields: name={:?} date={:?} amount={:?} company={:?}",
            fields.name, fields.date, fields.amount, fields.company
        );
        fields
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new()
    }
}
