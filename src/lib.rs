//! thuchi - quick-entry income and expense tracking
//!
//! This library provides the core of the thuchi ledger: a line parser that
//! turns short free-text entries such as `"Cơm trưa. 35k"` into a note, an
//! amount and a guessed category, and an aggregator that summarizes those
//! transactions by period, by category and against a daily food limit.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, currencies, categories, transactions and shortcuts
//! - `parser`: Quick-entry line parsing and category inference
//! - `reports`: Totals, category breakdowns, time filters and food budgets
//! - `storage`: Key-value store and repositories
//! - `services`: Business logic layer
//! - `events`: Post-commit notifications on a worker thread
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use thuchi::models::{Category, Money, TransactionType};
//! use thuchi::parser::LineParser;
//!
//! let parsed = LineParser::default().parse("Cơm trưa. 35k", TransactionType::Expense);
//! assert_eq!(parsed.note, "Cơm trưa");
//! assert_eq!(parsed.amount, Money::from_major(35_000));
//! assert_eq!(parsed.category, Some(Category::Food));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod events;
pub mod models;
pub mod parser;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
