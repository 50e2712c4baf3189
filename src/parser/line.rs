//! Quick-entry line parser
//!
//! Turns a line such as `"Cơm trưa. 35k"` into a note, an amount and an
//! inferred category. The parser runs on every keystroke, so it never fails:
//! incomplete input comes back with a zero amount.

use regex::Regex;

use super::keywords::infer_category;
use crate::models::{Category, Money, TransactionType};

/// Separator used when none is configured
pub const DEFAULT_SEPARATOR: char = '.';

/// Result of parsing one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub note: String,
    /// Zero means no amount has been typed yet
    pub amount: Money,
    /// `None` means keep the caller's current selection
    pub category: Option<Category>,
}

impl ParsedLine {
    /// Whether the line carries a usable (positive) amount
    pub fn has_amount(&self) -> bool {
        self.amount.is_positive()
    }

    /// Category to book under, falling back to the caller's selection
    pub fn category_or(&self, current: Category) -> Category {
        self.category.unwrap_or(current)
    }
}

/// Result of parsing a multi-line block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkParse {
    /// Lines that carried a positive amount, in input order
    pub drafts: Vec<ParsedLine>,
    /// Non-blank lines dropped for lack of an amount
    pub skipped: usize,
}

/// Parser for quick-entry lines
#[derive(Debug, Clone)]
pub struct LineParser {
    separator: char,
    amount_token: Regex,
}

impl Default for LineParser {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl LineParser {
    /// Create a parser splitting on `separator`
    pub fn new(separator: char) -> Self {
        Self {
            separator,
            amount_token: Regex::new(r"(?i)^[0-9][0-9.,]*k?$").expect("static regex"),
        }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Parse one line of input for the selected transaction type.
    ///
    /// With the separator present the line is split at its *last*
    /// occurrence. Otherwise the last whitespace-delimited token is taken as
    /// the amount, but only when it looks numeric.
    pub fn parse(&self, line: &str, kind: TransactionType) -> ParsedLine {
        let line = line.trim();

        let split = match line.rfind(self.separator) {
            Some(idx) => Some((&line[..idx], &line[idx + self.separator.len_utf8()..])),
            None => self.split_trailing_token(line),
        };

        let parsed = split.and_then(|(note, token)| {
            parse_amount_token(token)
                .filter(Money::is_positive)
                .map(|amount| (note.trim().to_string(), amount))
        });

        let (note, amount) = parsed.unwrap_or_else(|| (line.to_string(), Money::zero()));
        let category = infer_category(&note, kind);

        ParsedLine {
            note,
            amount,
            category,
        }
    }

    /// Parse a newline-separated block, keeping only lines with an amount
    pub fn parse_bulk(&self, text: &str, kind: TransactionType) -> BulkParse {
        let mut result = BulkParse::default();

        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let parsed = self.parse(line, kind);
            if parsed.has_amount() {
                result.drafts.push(parsed);
            } else {
                result.skipped += 1;
            }
        }

        result
    }

    fn split_trailing_token<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let idx = line.rfind(char::is_whitespace)?;
        let token = line[idx..].trim_start();
        if self.amount_token.is_match(token) {
            Some((&line[..idx], token))
        } else {
            None
        }
    }
}

/// Normalize an amount token: `"35k"` → 35 000, `"1,200"` → 1 200.
///
/// A trailing `k` multiplies by a thousand; every other non-digit is
/// dropped as a grouping mark. Returns `None` when no digits remain or the
/// value does not fit.
pub fn parse_amount_token(token: &str) -> Option<Money> {
    let token = token.trim().to_lowercase();

    let (digits, multiplier) = match token.strip_suffix('k') {
        Some(rest) => (rest, 1000u64),
        None => (token.as_str(), 1u64),
    };

    let digits: String = digits.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<u64>().ok()?.checked_mul(multiplier)?;
    Money::checked_from_major(value)
}
