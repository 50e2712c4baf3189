//! Shortcut and category listings

use crate::models::{Category, CategoryScope, Currency, Shortcut};

pub fn format_shortcut_list(shortcuts: &[Shortcut], currency: Currency) -> String {
    if shortcuts.is_empty() {
        return "No shortcuts. Add one with `thuchi shortcut add`.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8} {:<20} {:<8} {:<14} {:>16}\n",
        "ID", "Name", "Type", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for shortcut in shortcuts {
        output.push_str(&format!(
            "{:<8} {:<20} {:<8} {:<14} {:>16}\n",
            shortcut.id.short(),
            shortcut.name,
            shortcut.kind,
            shortcut.category().name(),
            currency.format(shortcut.amount)
        ));
    }

    output
}

/// The fixed category table
pub fn format_category_table() -> String {
    let mut output = String::new();
    output.push_str(&format!("{:<14} {:<16} {:<8} {}\n", "ID", "Name", "Scope", "Color"));
    output.push_str(&"-".repeat(48));
    output.push('\n');

    for category in Category::ALL {
        let info = category.info();
        let scope = match info.scope {
            CategoryScope::Income => "income",
            CategoryScope::Expense => "expense",
            CategoryScope::Both => "both",
        };
        output.push_str(&format!("{:<14} {:<16} {:<8} {}\n", info.id, info.name, scope, info.color));
    }

    output
}
