//! Property tests for listing and summarizing.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::BTreeMap;

use expense_tracker::catalog::CATEGORIES;
use expense_tracker::storage::{NewExpense, SqliteStorage};
use proptest::prelude::*;

fn expense_strategy() -> impl Strategy<Value = NewExpense> {
    // Whole cents keep float sums exact enough to compare after rounding.
    (1u32..=28, 1u32..=12, 0u32..100_000, 0usize..CATEGORIES.len()).prop_map(
        |(day, month, cents, category)| {
            NewExpense::new(
                format!("2024-{month:02}-{day:02}"),
                f64::from(cents) / 100.0,
                CATEGORIES[category],
            )
        },
    )
}

fn range_strategy() -> impl Strategy<Value = (String, String)> {
    (1u32..=12, 1u32..=12).prop_map(|(a, b)| {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        (format!("2024-{lo:02}-01"), format!("2024-{hi:02}-28"))
    })
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime")
}

async fn seeded(expenses: &[NewExpense]) -> SqliteStorage {
    let storage = SqliteStorage::new_in_memory().await.expect("storage");
    for expense in expenses {
        storage.insert_expense(expense).await.expect("insert");
    }
    storage
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn list_returns_exactly_rows_in_range(
        expenses in prop::collection::vec(expense_strategy(), 0..40),
        (start, end) in range_strategy(),
    ) {
        let listed = runtime().block_on(async {
            seeded(&expenses).await.list_expenses(&start, &end).await.expect("list")
        });

        let expected = expenses
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .count();
        prop_assert_eq!(listed.len(), expected);

        for pair in listed.windows(2) {
            prop_assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn summarize_matches_manual_totals(
        expenses in prop::collection::vec(expense_strategy(), 0..40),
        (start, end) in range_strategy(),
    ) {
        let summary = runtime().block_on(async {
            seeded(&expenses).await.summarize(&start, &end, None).await.expect("summarize")
        });

        let mut expected: BTreeMap<&str, (f64, i64)> = BTreeMap::new();
        for e in expenses.iter().filter(|e| e.date >= start && e.date <= end) {
            let entry = expected.entry(e.category.as_str()).or_default();
            entry.0 += e.amount;
            entry.1 += 1;
        }

        prop_assert_eq!(summary.len(), expected.len());
        for row in &summary {
            let (total, count) = expected[row.category.as_str()];
            prop_assert_eq!(row.count, count);
            prop_assert!((row.total_amount - total).abs() < 1e-6);
        }
        for pair in summary.windows(2) {
            prop_assert!(pair[0].total_amount >= pair[1].total_amount);
        }
    }

    #[test]
    fn filtered_summary_matches_filtered_listing(
        expenses in prop::collection::vec(expense_strategy(), 0..40),
        (start, end) in range_strategy(),
        category in prop::sample::select(CATEGORIES.to_vec()),
    ) {
        let (summary, listed) = runtime().block_on(async {
            let storage = seeded(&expenses).await;
            let summary = storage
                .summarize(&start, &end, Some(category))
                .await
                .expect("summarize");
            let listed = storage.list_expenses(&start, &end).await.expect("list");
            (summary, listed)
        });

        let matching: Vec<_> = listed.iter().filter(|e| e.category == category).collect();

        if matching.is_empty() {
            prop_assert!(summary.is_empty());
        } else {
            prop_assert_eq!(summary.len(), 1);
            let total: f64 = matching.iter().map(|e| e.amount).sum();
            prop_assert_eq!(summary[0].category.as_str(), category);
            prop_assert_eq!(summary[0].count, i64::try_from(matching.len()).expect("count"));
            prop_assert!((summary[0].total_amount - total).abs() < 1e-6);
        }
    }
}
