//! Server-computed summaries. The dashboard only reads these; every sum,
//! count and margin is produced by the backend.
//!
//! All fields default to zero so a backend that drops a field (the product
//! counts shape has changed more than once) still yields a usable value.

use serde::{Deserialize, Serialize};

use super::record_id::{self, RecordId};

/// `GET /debtors/debts`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DebtSummary {
    pub total_owed: f64,
    pub total_paid: f64,
    pub total: f64,
    pub count: u64,
}

/// `GET /products/counts`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductCounts {
    pub product_count: u64,
    pub total_number_per_product: i64,
    pub number_left_sum: i64,
    pub sold_out_count: u64,
    pub in_stock_count: u64,
    pub number_sold: i64,
}

/// `GET /products/calc`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductCalc {
    pub profit: f64,
    pub net_sales: f64,
    pub margin: f64,
}

/// One row of `GET /analytics/low-stock`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LowStockEntry {
    pub id: RecordId,
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<RecordId>,
    pub sku: String,
    pub name: String,
    pub quantity: i64,
    pub low_stock_threshold: Option<i64>,
}

impl LowStockEntry {
    pub fn id(&self) -> &RecordId {
        record_id::preferred(&self.id, self.legacy_id.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_counts_default_missing_fields() {
        let counts: ProductCounts =
            serde_json::from_value(json!({"productCount": 12, "inStockCount": 9})).unwrap();
        assert_eq!(counts.product_count, 12);
        assert_eq!(counts.in_stock_count, 9);
        assert_eq!(counts.number_sold, 0);
    }

    #[test]
    fn debt_summary_reads_camel_case() {
        let summary: DebtSummary = serde_json::from_value(
            json!({"totalOwed": 100, "totalPaid": 40, "total": 140, "count": 3}),
        )
        .unwrap();
        assert_eq!(summary.total_owed, 100.0);
        assert_eq!(summary.count, 3);
    }
}
