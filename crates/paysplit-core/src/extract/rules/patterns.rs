//! Common regex patterns for statement field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Recipient name: capital letter, then letters/whitespace, up to a
    // line break. \s deliberately includes newlines, matching the source
    // template where the name sits on its own line.
    pub static ref NAME_PATTERN: Regex = Regex::new(
        r"([A-Z][A-Za-z\s]+)\n"
    ).unwrap();

    // Labeled fields: capture the remainder of the label's line.
    pub static ref CHEQUE_DATE: Regex = Regex::new(
        r"(?i)Cheque Date:?\s*([^\n]*)"
    ).unwrap();

    pub static ref NET_PAY: Regex = Regex::new(
        r"(?i)Net Pay:?\s*\$?([\d,]+\.\d{2})"
    ).unwrap();

    pub static ref COMPANY: Regex = Regex::new(
        r"(?i)Company:?\s*([^\n]*)"
    ).unwrap();

    // Date formats, tried in priority order against the whole raw string.
    pub static ref DATE_DMY4: Regex = Regex::new(
        r"^(\d{1,2})[/-](\d{1,2})[/-](\d{4})$"
    ).unwrap();

    pub static ref DATE_DMY2: Regex = Regex::new(
        r"^(\d{1,2})[/-](\d{1,2})[/-](\d{2})$"
    ).unwrap();

    pub static ref DATE_MONTH_LONG: Regex = Regex::new(
        r"^(\w+)\s+(\d{1,2}),\s+(\d{4})$"
    ).unwrap();
}
