//! Income/expense aggregation for the account-balance chart.

use crate::chart::{BarSegment, ChartSpec};
use crate::transaction::Transaction;

const INCOME_COLUMN: usize = 0;
const EXPENSE_COLUMN: usize = 1;

/// Build the two-column stacked chart: incomes at x=0, expenses at x=1.
///
/// Each group is sorted ascending by magnitude, and every segment sits on
/// the cumulative magnitude of the entries before it in its group.
/// Zero-amount transactions belong to neither group and are dropped.
pub fn balance_chart(transactions: &[Transaction], title: Option<String>) -> ChartSpec {
    let mut income: Vec<(i64, &str)> = transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| (t.amount, t.description.as_str()))
        .collect();
    income.sort_by_key(|(amount, _)| *amount);

    let mut expense: Vec<(i64, &str)> = transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| (-t.amount, t.description.as_str()))
        .collect();
    expense.sort_by_key(|(amount, _)| *amount);

    let mut segments = Vec::with_capacity(income.len() + expense.len());
    segments.extend(stack(INCOME_COLUMN, &income));
    segments.extend(stack(EXPENSE_COLUMN, &expense));

    ChartSpec {
        segments,
        tick_labels: vec!["Income".to_string(), "Expense".to_string()],
        y_label: "Amount (JPY)".to_string(),
        title,
    }
}

fn stack(column: usize, group: &[(i64, &str)]) -> Vec<BarSegment> {
    let mut bottom = 0;
    group
        .iter()
        .map(|(height, label)| {
            let segment = BarSegment {
                column,
                height: *height,
                bottom,
                label: label.to_string(),
            };
            bottom += height;
            segment
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(amount: i64, description: &str) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            amount,
            description,
        )
    }

    #[test]
    fn test_incomes_sorted_with_cumulative_bottoms() {
        let spec = balance_chart(&[txn(300, "c"), txn(100, "a"), txn(200, "b")], None);
        let heights: Vec<i64> = spec.segments.iter().map(|s| s.height).collect();
        let bottoms: Vec<i64> = spec.segments.iter().map(|s| s.bottom).collect();
        assert_eq!(heights, vec![100, 200, 300]);
        assert_eq!(bottoms, vec![0, 100, 300]);
        assert!(spec.segments.iter().all(|s| s.column == 0));
    }

    #[test]
    fn test_group_height_sum_matches_magnitudes() {
        let txns = vec![txn(300, "a"), txn(-40, "b"), txn(100, "c"), txn(-60, "d")];
        let spec = balance_chart(&txns, None);
        let income_total: i64 = spec
            .segments
            .iter()
            .filter(|s| s.column == 0)
            .map(|s| s.height)
            .sum();
        let expense_total: i64 = spec
            .segments
            .iter()
            .filter(|s| s.column == 1)
            .map(|s| s.height)
            .sum();
        assert_eq!(income_total, 400);
        assert_eq!(expense_total, 100);
    }

    #[test]
    fn test_expenses_use_magnitude() {
        let spec = balance_chart(&[txn(-500, "Groceries")], None);
        assert_eq!(spec.segments.len(), 1);
        assert_eq!(spec.segments[0].column, 1);
        assert_eq!(spec.segments[0].height, 500);
        assert_eq!(spec.segments[0].bottom, 0);
        assert_eq!(spec.segments[0].label, "Groceries");
    }

    #[test]
    fn test_zero_amounts_dropped() {
        let spec = balance_chart(&[txn(0, "nothing"), txn(10, "a")], None);
        assert_eq!(spec.segments.len(), 1);
        assert_eq!(spec.segments[0].label, "a");
    }

    #[test]
    fn test_tick_labels_fixed() {
        let spec = balance_chart(&[], None);
        assert_eq!(spec.tick_labels, vec!["Income", "Expense"]);
        assert_eq!(spec.y_label, "Amount (JPY)");
        assert_eq!(spec.max_top(), 0);
    }
}
