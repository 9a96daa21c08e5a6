//! kakeibo-core: transaction records, date-range filtering, and the
//! stacked-bar aggregators behind the balance and credit-usage charts.

pub mod balance;
pub mod category;
pub mod chart;
pub mod range;
pub mod transaction;

pub use balance::balance_chart;
pub use category::usage_chart;
pub use chart::{BarSegment, ChartSpec};
pub use range::{RangeError, filter_by_range};
pub use transaction::{CategorizedEntry, CreditEntry, Transaction};
