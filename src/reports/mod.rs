//! Reports module for thuchi
//!
//! Read-only views derived from the transaction list: totals, spending by
//! category, time filters and the daily food budget. Nothing here mutates
//! its input or touches storage.

pub mod food;
pub mod period;
pub mod spending;
pub mod summary;

pub use food::{
    cumulative_food_stats, daily_food_history, daily_food_stats, CumulativeFoodStats,
    DailyFoodStats, FoodDay,
};
pub use period::{filter_transactions, TimeFilter};
pub use spending::{category_breakdown, CategorySpending, SpendingReport};
pub use summary::{activity_on, totals, Totals};
