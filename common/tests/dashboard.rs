mod support;

use futures::executor::block_on;
use inventory_common::api::Method;
use inventory_common::model::{DebtSummary, ProductCounts};
use inventory_common::view::metrics::{debt_cards, product_count_cards};
use inventory_common::view::{ChartKind, ChartSpec, Loadable};
use serde_json::json;

use support::client;

#[test]
fn debt_summary_fills_four_cards() {
    let (client, transport) = client();
    transport.json(
        Method::Get,
        "/debtors/debts",
        json!({"totalOwed": 100, "totalPaid": 40, "total": 140, "count": 3}),
    );

    let mut summary = Loadable::<Option<DebtSummary>>::new("data");
    let ticket = summary.begin_fetch();
    summary.finish_fetch(ticket, block_on(client.debt_summary()).map(Some));

    let shown: Vec<_> = debt_cards(summary.data().as_ref())
        .iter()
        .map(|card| card.display())
        .collect();
    assert_eq!(shown, ["100", "40", "140", "3"]);
}

#[test]
fn large_debt_totals_use_thousands_separators() {
    let (client, transport) = client();
    transport.json(
        Method::Get,
        "/debtors/debts",
        json!({"totalOwed": 1000, "totalPaid": 40, "total": 1040, "count": 3}),
    );

    let summary = block_on(client.debt_summary()).expect("summary");
    let shown: Vec<_> = debt_cards(Some(&summary))
        .iter()
        .map(|card| card.display())
        .collect();
    assert_eq!(shown, ["1,000", "40", "1,040", "3"]);
}

#[test]
fn failed_aggregate_fetch_uses_generic_message() {
    let (client, transport) = client();
    transport.offline(Method::Get, "/products/counts");

    let mut counts = Loadable::<Option<ProductCounts>>::new("data");
    let ticket = counts.begin_fetch();
    counts.finish_fetch(ticket, block_on(client.product_counts()).map(Some));

    assert_eq!(counts.error(), Some("Failed to fetch data. Please try again."));
    assert!(counts.data().is_none());
    assert!(product_count_cards(counts.data().as_ref())
        .iter()
        .all(|card| card.value.is_none()));
}

#[test]
fn finance_charts_relabel_server_values() {
    let (client, transport) = client();
    transport
        .json(Method::Get, "/debtors/debts", json!({"totalOwed": 80, "totalPaid": 20, "total": 100}))
        .json(Method::Get, "/products/calc", json!({"profit": 30, "netSales": 120, "margin": 0.25}))
        .json(
            Method::Get,
            "/products/counts",
            json!({"productCount": 4, "totalNumberPerProduct": 40, "numberLeftSum": 25, "soldOutCount": 1, "inStockCount": 3}),
        );

    let debts = block_on(client.debt_summary()).expect("debts");
    let calc = block_on(client.product_calc()).expect("calc");
    let counts = block_on(client.product_counts()).expect("counts");

    let debts = ChartSpec::from_source(ChartKind::Bar, &debts);
    assert_eq!(debts.x_key, "name");
    assert_eq!(debts.y_key, "value");
    assert_eq!(
        debts.series(),
        vec![
            ("Total Owed".to_string(), 80.0),
            ("Total Paid".to_string(), 20.0),
            ("Total".to_string(), 100.0)
        ]
    );

    let calc = ChartSpec::from_source(ChartKind::Area, &calc);
    assert_eq!(calc.series()[1], ("Net Sales".to_string(), 120.0));

    let counts = ChartSpec::from_source(ChartKind::Pie, &counts);
    assert_eq!(counts.series().len(), 5);
}

#[test]
fn low_stock_entries_decode() {
    let (client, transport) = client();
    transport.json(
        Method::Get,
        "/analytics/low-stock",
        json!([{"id": 5, "sku": "C9", "name": "Socks", "quantity": 2, "low_stock_threshold": 5}]),
    );

    let entries = block_on(client.low_stock()).expect("low stock");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Socks");
    assert_eq!(entries[0].low_stock_threshold, Some(5));
}
