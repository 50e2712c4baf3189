//! Time filters over the transaction list
//!
//! Every filter is judged against an explicit reference instant so results
//! do not depend on when the test or command happens to run.

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use std::fmt;

use crate::models::Transaction;

/// Which slice of history to look at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFilter {
    /// Calendar week containing the reference instant
    Week,
    /// Calendar month containing the reference instant
    Month,
    /// Calendar year containing the reference instant
    Year,
    #[default]
    All,
    /// Inclusive day range
    Custom { start: NaiveDate, end: NaiveDate },
}

impl TimeFilter {
    /// Whether `date` falls inside this filter.
    ///
    /// `now` fixes both the reference instant and the offset used to read
    /// calendar fields. `week_start` is the first day of the week.
    pub fn matches(
        &self,
        date: &DateTime<FixedOffset>,
        now: &DateTime<FixedOffset>,
        week_start: Weekday,
    ) -> bool {
        let local = date.with_timezone(now.offset()).naive_local();
        let reference = now.naive_local();

        match self {
            Self::All => true,
            Self::Year => local.year() == reference.year(),
            Self::Month => {
                local.year() == reference.year() && local.month() == reference.month()
            }
            Self::Week => match week_bounds(reference.date(), week_start) {
                Some((start, end)) => local >= start && local < end,
                None => false,
            },
            Self::Custom { start, end } => {
                let day = local.date();
                start <= end && day >= *start && day <= *end
            }
        }
    }

    /// Short label for headers
    pub fn label(&self) -> String {
        match self {
            Self::Week => "This week".to_string(),
            Self::Month => "This month".to_string(),
            Self::Year => "This year".to_string(),
            Self::All => "All time".to_string(),
            Self::Custom { start, end } => format!("{} to {}", start, end),
        }
    }
}

impl fmt::Display for TimeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// `[start, end)` of the week containing `today`
fn week_bounds(today: NaiveDate, week_start: Weekday) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let back = (today.weekday().num_days_from_sunday() + 7 - week_start.num_days_from_sunday()) % 7;
    let start = today.checked_sub_days(Days::new(u64::from(back)))?;
    let end = start.checked_add_days(Days::new(7))?;
    Some((start.and_time(NaiveTime::MIN), end.and_time(NaiveTime::MIN)))
}

/// Transactions matching `filter`, in input order
pub fn filter_transactions(
    transactions: &[Transaction],
    filter: &TimeFilter,
    now: &DateTime<FixedOffset>,
    week_start: Weekday,
) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| filter.matches(&t.date, now, week_start))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionType};

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(date: &str) -> Transaction {
        Transaction::new(Money::from_major(1), TransactionType::Expense, "food", at(date), date)
    }

    // 2025-04-16 is a Wednesday
    const NOW: &str = "2025-04-16T10:00:00+07:00";

    #[test]
    fn test_all_matches_everything() {
        let now = at(NOW);
        assert!(TimeFilter::All.matches(&at("1999-01-01T00:00:00Z"), &now, Weekday::Sun));
    }

    #[test]
    fn test_week_starts_at_sunday_midnight() {
        let now = at(NOW);
        let week = TimeFilter::Week;

        assert!(week.matches(&at("2025-04-13T00:00:00+07:00"), &now, Weekday::Sun));
        assert!(!week.matches(&at("2025-04-12T23:59:59+07:00"), &now, Weekday::Sun));
        assert!(week.matches(&at("2025-04-19T23:59:59+07:00"), &now, Weekday::Sun));
        assert!(!week.matches(&at("2025-04-20T00:00:00+07:00"), &now, Weekday::Sun));
    }

    #[test]
    fn test_week_start_is_configurable() {
        let now = at(NOW);
        // Monday start: 2025-04-14 .. 2025-04-20
        assert!(!TimeFilter::Week.matches(&at("2025-04-13T12:00:00+07:00"), &now, Weekday::Mon));
        assert!(TimeFilter::Week.matches(&at("2025-04-20T12:00:00+07:00"), &now, Weekday::Mon));
    }

    #[test]
    fn test_week_on_first_weekday_itself() {
        let sunday = at("2025-04-13T08:00:00+07:00");
        assert!(TimeFilter::Week.matches(&at("2025-04-13T00:30:00+07:00"), &sunday, Weekday::Sun));
        assert!(!TimeFilter::Week.matches(&at("2025-04-12T20:00:00+07:00"), &sunday, Weekday::Sun));
    }

    #[test]
    fn test_month_and_year_use_reference_offset() {
        let now = at(NOW);

        // 2025-03-31T20:00Z is already April 1st at +07:00
        assert!(TimeFilter::Month.matches(&at("2025-03-31T20:00:00Z"), &now, Weekday::Sun));
        assert!(!TimeFilter::Month.matches(&at("2025-03-31T10:00:00Z"), &now, Weekday::Sun));
        assert!(!TimeFilter::Month.matches(&at("2024-04-10T10:00:00+07:00"), &now, Weekday::Sun));

        assert!(TimeFilter::Year.matches(&at("2025-01-01T00:00:00+07:00"), &now, Weekday::Sun));
        assert!(!TimeFilter::Year.matches(&at("2024-12-31T23:59:59+07:00"), &now, Weekday::Sun));
    }

    #[test]
    fn test_custom_range_is_inclusive() {
        let now = at(NOW);
        let range = TimeFilter::Custom {
            start: day(2025, 4, 1),
            end: day(2025, 4, 10),
        };

        assert!(range.matches(&at("2025-04-01T00:00:00+07:00"), &now, Weekday::Sun));
        assert!(range.matches(&at("2025-04-10T23:59:59.999+07:00"), &now, Weekday::Sun));
        assert!(!range.matches(&at("2025-04-11T00:00:00+07:00"), &now, Weekday::Sun));
        assert!(!range.matches(&at("2025-03-31T23:59:59+07:00"), &now, Weekday::Sun));
    }

    #[test]
    fn test_reversed_custom_range_matches_nothing() {
        let now = at(NOW);
        let range = TimeFilter::Custom {
            start: day(2025, 4, 10),
            end: day(2025, 4, 1),
        };
        assert!(!range.matches(&at("2025-04-05T12:00:00+07:00"), &now, Weekday::Sun));
    }

    #[test]
    fn test_filter_keeps_input_order_and_leaves_input_alone() {
        let now = at(NOW);
        let list = vec![
            txn("2025-04-15T09:00:00+07:00"),
            txn("2025-02-01T09:00:00+07:00"),
            txn("2025-04-02T09:00:00+07:00"),
        ];
        let before = list.clone();

        let month = filter_transactions(&list, &TimeFilter::Month, &now, Weekday::Sun);
        assert_eq!(month.len(), 2);
        assert_eq!(month[0].id, list[0].id);
        assert_eq!(month[1].id, list[2].id);
        assert_eq!(list, before);
    }

    #[test]
    fn test_labels() {
        assert_eq!(TimeFilter::All.to_string(), "All time");
        let range = TimeFilter::Custom {
            start: day(2025, 4, 1),
            end: day(2025, 4, 10),
        };
        assert_eq!(range.label(), "2025-04-01 to 2025-04-10");
    }
}
