//! Per-category aggregation for the credit-usage chart.

use std::collections::BTreeMap;

use crate::chart::{BarSegment, ChartSpec};
use crate::transaction::CategorizedEntry;

/// Build one stacked column per category observed in the data.
///
/// Columns are ordered lexicographically by category name; within a column,
/// entries are sorted ascending by description and stacked on the
/// cumulative amount of their predecessors. Non-positive amounts (zero
/// rows, refund credits) are not usage and are dropped, mirroring how the
/// balance chart drops zero-amount transactions.
pub fn usage_chart(entries: &[CategorizedEntry], title: Option<String>) -> ChartSpec {
    // BTreeMap gives the lexicographic column order directly.
    let mut groups: BTreeMap<&str, Vec<&CategorizedEntry>> = BTreeMap::new();
    for entry in entries.iter().filter(|e| e.amount > 0) {
        groups.entry(entry.category.as_str()).or_default().push(entry);
    }

    let mut segments = Vec::with_capacity(entries.len());
    let mut tick_labels = Vec::with_capacity(groups.len());
    for (column, (category, mut group)) in groups.into_iter().enumerate() {
        tick_labels.push(category.to_string());
        group.sort_by(|a, b| a.description.cmp(&b.description));
        let mut bottom = 0;
        for entry in group {
            segments.push(BarSegment {
                column,
                height: entry.amount,
                bottom,
                label: entry.description.clone(),
            });
            bottom += entry.amount;
        }
    }

    ChartSpec {
        segments,
        tick_labels,
        y_label: "Amount (JPY)".to_string(),
        title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::CreditEntry;
    use chrono::NaiveDate;

    fn entry(description: &str, amount: i64, category: &str) -> CategorizedEntry {
        CreditEntry::new(
            NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            description,
            amount,
            "",
        )
        .with_category(category)
    }

    #[test]
    fn test_columns_in_lexicographic_category_order() {
        let spec = usage_chart(
            &[
                entry("taxi", 900, "03交通費"),
                entry("market", 1200, "00食料品・日用品"),
                entry("cinema", 1800, "05娯楽費"),
            ],
            None,
        );
        assert_eq!(spec.tick_labels, vec!["00食料品・日用品", "03交通費", "05娯楽費"]);
        assert_eq!(
            spec.segments.iter().map(|s| s.column).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_entries_sorted_by_description_with_offsets() {
        let spec = usage_chart(
            &[
                entry("zz bar", 500, "01外食費"),
                entry("aa cafe", 300, "01外食費"),
                entry("mm diner", 200, "01外食費"),
            ],
            None,
        );
        let labels: Vec<&str> = spec.segments.iter().map(|s| s.label.as_str()).collect();
        let bottoms: Vec<i64> = spec.segments.iter().map(|s| s.bottom).collect();
        assert_eq!(labels, vec!["aa cafe", "mm diner", "zz bar"]);
        assert_eq!(bottoms, vec![0, 300, 500]);
    }

    #[test]
    fn test_regrouping_is_idempotent() {
        let entries = vec![
            entry("b", 100, "01外食費"),
            entry("a", 250, "99その他"),
            entry("c", 400, "01外食費"),
        ];
        let first = usage_chart(&entries, None);

        // Flatten the chart back into entries (column -> category) and regroup.
        let flattened: Vec<CategorizedEntry> = first
            .segments
            .iter()
            .map(|s| {
                CreditEntry::new(
                    NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
                    s.label.clone(),
                    s.height,
                    "",
                )
                .with_category(first.tick_labels[s.column].clone())
            })
            .collect();
        let second = usage_chart(&flattened, None);

        assert_eq!(first.segments, second.segments);
        assert_eq!(first.tick_labels, second.tick_labels);
    }

    #[test]
    fn test_refunds_and_zero_rows_dropped() {
        let spec = usage_chart(
            &[
                entry("cinema", 1800, "05娯楽費"),
                entry("refund", -1800, "05娯楽費"),
                entry("adjustment", 0, "99その他"),
            ],
            None,
        );
        // only the positive charge remains; heights and max_top stay positive
        assert_eq!(spec.tick_labels, vec!["05娯楽費"]);
        assert_eq!(spec.segments.len(), 1);
        assert_eq!(spec.segments[0].height, 1800);
        assert_eq!(spec.max_top(), 1800);
    }

    #[test]
    fn test_empty_input_yields_empty_chart() {
        let spec = usage_chart(&[], None);
        assert!(spec.segments.is_empty());
        assert!(spec.tick_labels.is_empty());
    }
}
