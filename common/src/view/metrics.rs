//! Mapping server aggregates into chart series and summary cards.
//!
//! No arithmetic happens here beyond scaling values for drawing: the
//! aggregates arrive pre-computed and are only relabelled.

use serde::Serialize;
use serde_json::Value;

use super::format::format_optional;
use crate::model::{DebtSummary, ProductCalc, ProductCounts};

pub const DEFAULT_X_KEY: &str = "name";
pub const DEFAULT_Y_KEY: &str = "value";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(name: impl Into<String>, value: impl Into<f64>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Aggregates that can be drawn as a `{name, value}` series.
pub trait ChartSource {
    fn chart_points(&self) -> Vec<ChartPoint>;
}

impl ChartSource for DebtSummary {
    fn chart_points(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Total Owed", self.total_owed),
            ChartPoint::new("Total Paid", self.total_paid),
            ChartPoint::new("Total", self.total),
        ]
    }
}

impl ChartSource for ProductCalc {
    fn chart_points(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Profit", self.profit),
            ChartPoint::new("Net Sales", self.net_sales),
            ChartPoint::new("Margin", self.margin),
        ]
    }
}

impl ChartSource for ProductCounts {
    fn chart_points(&self) -> Vec<ChartPoint> {
        vec![
            ChartPoint::new("Product Count", self.product_count as f64),
            ChartPoint::new("Total Number Per Product", self.total_number_per_product as f64),
            ChartPoint::new("Number Left Sum", self.number_left_sum as f64),
            ChartPoint::new("Sold Out Count", self.sold_out_count as f64),
            ChartPoint::new("In Stock Count", self.in_stock_count as f64),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Bar,
    Area,
    Pie,
}

/// One point ready to draw. `ratio` is in `0.0..=1.0`: the share of the
/// largest value for bar/area charts, the share of the total for pies.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledPoint {
    pub label: String,
    pub value: f64,
    pub ratio: f64,
}

/// Input of the generic chart renderer: rows of arbitrary JSON objects plus
/// the names of the keys holding the label and the value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x_key: String,
    pub y_key: String,
    pub rows: Vec<Value>,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, x_key: impl Into<String>, y_key: impl Into<String>, rows: Vec<Value>) -> Self {
        Self {
            kind,
            x_key: x_key.into(),
            y_key: y_key.into(),
            rows,
        }
    }

    pub fn from_points(kind: ChartKind, points: &[ChartPoint]) -> Self {
        let rows = points
            .iter()
            .map(|point| {
                let mut row = serde_json::Map::new();
                row.insert(DEFAULT_X_KEY.to_string(), Value::from(point.name.clone()));
                row.insert(DEFAULT_Y_KEY.to_string(), Value::from(point.value));
                Value::Object(row)
            })
            .collect();
        Self::new(kind, DEFAULT_X_KEY, DEFAULT_Y_KEY, rows)
    }

    pub fn from_source(kind: ChartKind, source: &impl ChartSource) -> Self {
        Self::from_points(kind, &source.chart_points())
    }

    /// `(label, value)` pairs read through the axis keys. Rows without a
    /// numeric value are skipped.
    pub fn series(&self) -> Vec<(String, f64)> {
        self.rows
            .iter()
            .filter_map(|row| {
                let value = row.get(&self.y_key)?.as_f64()?;
                let label = match row.get(&self.x_key) {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Null) | None => String::new(),
                    Some(other) => other.to_string(),
                };
                Some((label, value))
            })
            .collect()
    }

    pub fn scaled(&self) -> Vec<ScaledPoint> {
        let series = self.series();
        let denominator = match self.kind {
            ChartKind::Pie => series.iter().map(|(_, v)| v.max(0.0)).sum::<f64>(),
            ChartKind::Bar | ChartKind::Area => {
                series.iter().map(|(_, v)| v.abs()).fold(0.0, f64::max)
            }
        };

        series
            .into_iter()
            .map(|(label, value)| {
                let magnitude = match self.kind {
                    ChartKind::Pie => value.max(0.0),
                    ChartKind::Bar | ChartKind::Area => value.abs(),
                };
                let ratio = if denominator > 0.0 {
                    magnitude / denominator
                } else {
                    0.0
                };
                ScaledPoint { label, value, ratio }
            })
            .collect()
    }
}

/// A labelled number on a dashboard card. `value` is `None` until the
/// aggregate has loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: Option<f64>,
}

impl SummaryCard {
    pub fn display(&self) -> String {
        format_optional(self.value)
    }
}

pub fn debt_cards(summary: Option<&DebtSummary>) -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            label: "Total Owed",
            value: summary.map(|s| s.total_owed),
        },
        SummaryCard {
            label: "Total Paid",
            value: summary.map(|s| s.total_paid),
        },
        SummaryCard {
            label: "Total",
            value: summary.map(|s| s.total),
        },
        SummaryCard {
            label: "Debtors",
            value: summary.map(|s| s.count as f64),
        },
    ]
}

pub fn product_count_cards(counts: Option<&ProductCounts>) -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            label: "Products",
            value: counts.map(|c| c.product_count as f64),
        },
        SummaryCard {
            label: "Available",
            value: counts.map(|c| c.in_stock_count as f64),
        },
        SummaryCard {
            label: "Sold Out",
            value: counts.map(|c| c.sold_out_count as f64),
        },
        SummaryCard {
            label: "Total number",
            value: counts.map(|c| c.total_number_per_product as f64),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn aggregates_map_to_named_points() {
        let calc = ProductCalc {
            profit: 10.0,
            net_sales: 50.0,
            margin: 0.2,
        };
        let names: Vec<_> = calc.chart_points().into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["Profit", "Net Sales", "Margin"]);
    }

    #[test]
    fn series_follows_custom_axis_keys() {
        let spec = ChartSpec::new(
            ChartKind::Area,
            "month",
            "sold",
            vec![
                json!({"month": "Jan", "sold": 4}),
                json!({"month": "Feb"}),
                json!({"month": 3, "sold": 8.5}),
            ],
        );
        assert_eq!(
            spec.series(),
            vec![("Jan".to_string(), 4.0), ("3".to_string(), 8.5)]
        );
    }

    #[test]
    fn bar_ratios_are_relative_to_largest() {
        let spec = ChartSpec::from_points(
            ChartKind::Bar,
            &[ChartPoint::new("a", 50.0), ChartPoint::new("b", 100.0)],
        );
        let ratios: Vec<_> = spec.scaled().iter().map(|p| p.ratio).collect();
        assert_eq!(ratios, [0.5, 1.0]);
    }

    #[test]
    fn pie_ratios_are_shares_of_total() {
        let spec = ChartSpec::from_points(
            ChartKind::Pie,
            &[ChartPoint::new("a", 1.0), ChartPoint::new("b", 3.0)],
        );
        let ratios: Vec<_> = spec.scaled().iter().map(|p| p.ratio).collect();
        assert_eq!(ratios, [0.25, 0.75]);
    }

    #[test]
    fn all_zero_series_does_not_divide_by_zero() {
        let spec = ChartSpec::from_source(ChartKind::Bar, &DebtSummary::default());
        assert!(spec.scaled().iter().all(|p| p.ratio == 0.0));
    }

    #[test]
    fn cards_are_blank_until_loaded() {
        assert!(product_count_cards(None).iter().all(|c| c.display().is_empty()));
        let cards = debt_cards(Some(&DebtSummary {
            total_owed: 1000.0,
            total_paid: 12.5,
            total: 1012.5,
            count: 3,
        }));
        let shown: Vec<_> = cards.iter().map(SummaryCard::display).collect();
        assert_eq!(shown, ["1,000", "12.50", "1,012.50", "3"]);
    }
}
