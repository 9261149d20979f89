//! Property: aggregation output is identical for any input row order.

use proptest::prelude::{Just, Strategy, prop, prop_assert_eq, proptest};

use dash_engine::{FilterSelection, aggregate};
use dash_ingest::RawTable;
use dash_validate::{ValidatedTable, validate};
use polars::prelude::df;

#[derive(Debug, Clone)]
struct InputRow {
    name: &'static str,
    camp: &'static str,
    date: &'static str,
    order: i32,
    payout: i32,
}

fn row_strategy() -> impl Strategy<Value = InputRow> {
    (
        prop::sample::select(vec!["alice", "bob", "carol"]),
        prop::sample::select(vec!["spring", "winter"]),
        prop::sample::select(vec!["2024-01-01", "2024-01-02"]),
        -1000i32..1000,
        -1000i32..1000,
    )
        .prop_map(|(name, camp, date, order, payout)| InputRow {
            name,
            camp,
            date,
            order,
            payout,
        })
}

fn table_from(rows: &[InputRow]) -> ValidatedTable {
    let data = df! {
        "name" => rows.iter().map(|row| row.name).collect::<Vec<_>>(),
        "camp_name" => rows.iter().map(|row| row.camp).collect::<Vec<_>>(),
        "action_date" => rows.iter().map(|row| row.date).collect::<Vec<_>>(),
        "Total_Order" => rows.iter().map(|row| i64::from(row.order)).collect::<Vec<_>>(),
        "Total_Payout" => rows.iter().map(|row| i64::from(row.payout)).collect::<Vec<_>>(),
    }
    .unwrap();
    validate(RawTable::new("generated.csv", data)).unwrap()
}

proptest! {
    #[test]
    fn shuffled_input_aggregates_identically(
        rows in prop::collection::vec(row_strategy(), 1..40)
            .prop_flat_map(|rows| (Just(rows.clone()), Just(rows).prop_shuffle()))
    ) {
        let (original, shuffled) = rows;
        let table_a = table_from(&original);
        let table_b = table_from(&shuffled);

        let (_, agg_a, _) = aggregate(&table_a, &FilterSelection::full_for(&table_a)).unwrap();
        let (_, agg_b, _) = aggregate(&table_b, &FilterSelection::full_for(&table_b)).unwrap();

        // Integer-valued measures keep f64 sums exact, so strict equality holds.
        prop_assert_eq!(agg_a, agg_b);
    }
}
