//! Report formatting utilities for terminal output

use crate::models::{Currency, Money};
use crate::reports::{CumulativeFoodStats, DailyFoodStats, FoodDay, SpendingReport, TimeFilter};

/// Where today's food spending sits against the limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetBand {
    /// Up to 75 %
    Comfortable,
    /// Above 75 %, below 100 %
    Warning,
    /// At or above 100 %
    Exceeded,
}

impl BudgetBand {
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 100.0 {
            Self::Exceeded
        } else if pct > 75.0 {
            Self::Warning
        } else {
            Self::Comfortable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Comfortable => "on track",
            Self::Warning => "almost at limit",
            Self::Exceeded => "limit reached",
        }
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate to `max_len` characters with an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Income / expense / balance block followed by spending per category
pub fn format_spending_report(report: &SpendingReport, filter: &TimeFilter, currency: Currency) -> String {
    let mut output = String::new();

    output.push_str(&format!("Summary: {}\n", filter));
    output.push_str(&double_separator(52));
    output.push('\n');
    output.push_str(&format!("{:<12} {:>20}\n", "Income", currency.format(report.totals.income)));
    output.push_str(&format!("{:<12} {:>20}\n", "Expense", currency.format(report.totals.expense)));
    output.push_str(&format!("{:<12} {:>20}\n", "Balance", currency.format(report.totals.balance)));
    output.push_str(&format!("{} transaction(s)\n", report.transaction_count));

    if report.categories.is_empty() {
        output.push_str("\nNo spending in this period.\n");
        return output;
    }

    output.push('\n');
    output.push_str("Spending by category\n");
    output.push_str(&separator(52));
    output.push('\n');

    for row in &report.categories {
        let pct = row.share * 100.0;
        output.push_str(&format!(
            "{:<16} {:>16} {:>5} {}\n",
            truncate(row.category.name(), 16),
            currency.format(row.total),
            format_percentage(pct),
            format_bar(row.share, 1.0, 10)
        ));
    }

    output
}

/// Today's food budget
pub fn format_food_today(stats: &DailyFoodStats, limit: Money, currency: Currency) -> String {
    if limit.is_zero() {
        return format!(
            "Food today: {} (no daily limit set, use `thuchi limit <amount>`)\n",
            currency.format(stats.spent_today)
        );
    }

    let band = BudgetBand::from_percentage(stats.percentage);
    let mut output = String::new();
    output.push_str(&format!(
        "Food today: {} of {}\n",
        currency.format(stats.spent_today),
        currency.format(limit)
    ));
    output.push_str(&format!(
        "{} {} ({})\n",
        format_bar(stats.percentage, 100.0, 20),
        format_percentage(stats.percentage),
        band.label()
    ));
    if stats.remaining.is_negative() {
        output.push_str(&format!("Over by:   {}\n", currency.format(stats.remaining.abs())));
    } else {
        output.push_str(&format!("Remaining: {}\n", currency.format(stats.remaining)));
    }
    output
}

/// Per-day food spending with each day's savings
pub fn format_food_history(days: &[FoodDay], currency: Currency) -> String {
    if days.is_empty() {
        return "No food expenses recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<10} {:>16} {:>16}\n", "Date", "Spent", "Saved"));
    output.push_str(&separator(44));
    output.push('\n');

    for day in days {
        output.push_str(&format!(
            "{:<10} {:>16} {:>16}\n",
            day.date.format("%Y-%m-%d"),
            currency.format(day.total_spent),
            currency.format(day.savings)
        ));
        for item in &day.items {
            let note = if item.note.is_empty() { "-" } else { item.note.as_str() };
            output.push_str(&format!(
                "  {} {:<24} {:>14}\n",
                item.date.format("%H:%M"),
                truncate(note, 24),
                currency.format(item.amount)
            ));
        }
    }

    output
}

/// Totals over every day with recorded food spending
pub fn format_food_cumulative(stats: &CumulativeFoodStats, currency: Currency) -> String {
    format!(
        "Days tracked:    {}\nExpected budget: {}\nTotal spent:     {}\nTotal saved:     {}\n",
        stats.days_count,
        currency.format(stats.total_expected_budget),
        currency.format(stats.total_spent),
        currency.format(stats.total_saved)
    )
}
