//! CLI commands for reports
//!
//! Income / expense summaries with a per-category spending breakdown.

use chrono::Local;
use clap::{Args, Subcommand, ValueEnum};

use crate::config::Settings;
use crate::display::format_spending_report;
use crate::error::{LedgerError, LedgerResult};
use crate::reports::{filter_transactions, SpendingReport, TimeFilter};
use crate::storage::Storage;

use super::parse_day_arg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    Week,
    Month,
    Year,
    All,
    Custom,
}

/// Time window selection shared by `list` and `summary`
#[derive(Args, Debug, Clone)]
pub struct PeriodArgs {
    /// Time window
    #[arg(short, long, value_enum, default_value = "all")]
    pub period: Period,

    /// Start date for a custom window (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// End date for a custom window (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub to: Option<String>,
}

impl PeriodArgs {
    pub fn to_filter(&self) -> LedgerResult<TimeFilter> {
        match self.period {
            Period::Week => Ok(TimeFilter::Week),
            Period::Month => Ok(TimeFilter::Month),
            Period::Year => Ok(TimeFilter::Year),
            Period::All => Ok(TimeFilter::All),
            Period::Custom => match (&self.from, &self.to) {
                (Some(from), Some(to)) => Ok(TimeFilter::Custom {
                    start: parse_day_arg(from)?,
                    end: parse_day_arg(to)?,
                }),
                _ => Err(LedgerError::Validation(
                    "A custom period needs both --from and --to".into(),
                )),
            },
        }
    }
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Income, expense, balance and spending by category
    Summary {
        #[command(flatten)]
        period: PeriodArgs,

        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    match cmd {
        ReportCommands::Summary { period, top, json } => {
            let filter = period.to_filter()?;
            let now = Local::now().fixed_offset();
            let all = storage.transactions.get_all()?;
            let visible = filter_transactions(&all, &filter, &now, settings.week_start());

            let mut report = SpendingReport::generate(&visible);
            if let Some(n) = top {
                report.categories = report.top(n).to_vec();
            }

            if json {
                let rendered = serde_json::to_string_pretty(&report)?;
                println!("{}", rendered);
            } else {
                let currency = storage.preferences.currency()?;
                print!("{}", format_spending_report(&report, &filter, currency));
            }
        }
    }

    Ok(())
}
