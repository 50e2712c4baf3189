//! Quick-entry parsing
//!
//! - `line`: splits a free-text line into note and amount, single or bulk
//! - `keywords`: ordered keyword table for category inference

pub mod keywords;
pub mod line;

pub use keywords::{infer_category, KEYWORD_TABLE};
pub use line::{parse_amount_token, BulkParse, LineParser, ParsedLine, DEFAULT_SEPARATOR};
