//! Transaction display formatting

use crate::models::{Currency, Transaction, TransactionType};

use super::report::truncate;

/// One register row: short id, date, type sign, category, note, amount
pub fn format_transaction_row(txn: &Transaction, currency: Currency, date_format: &str) -> String {
    let sign = match txn.kind {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    };

    let note = if txn.note.is_empty() { "(no note)" } else { txn.note.as_str() };

    format!(
        "{:<8} {:<10} {} {:<14} {:<24} {:>16}",
        txn.id.short(),
        txn.date.format(date_format),
        sign,
        truncate(txn.category().name(), 14),
        truncate(note, 24),
        currency.format(txn.amount)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_list(transactions: &[Transaction], currency: Currency, date_format: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8} {:<10} {} {:<14} {:<24} {:>16}\n",
        "ID", "Date", " ", "Category", "Note", "Amount"
    ));
    output.push_str(&"-".repeat(79));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, currency, date_format));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, currency: Currency) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d %H:%M %:z")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Amount:      {}\n", currency.format(txn.amount)));

    let category = txn.category();
    if category.id() == txn.category {
        output.push_str(&format!("Category:    {}\n", category.name()));
    } else {
        output.push_str(&format!("Category:    {} ({})\n", category.name(), txn.category));
    }

    if !txn.note.is_empty() {
        output.push_str(&format!("Note:        {}\n", txn.note));
    }

    output
}
