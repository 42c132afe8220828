//! State of the debtors page: the table, its form and the debt summary.

use inventory_common::api::ListScope;
use inventory_common::model::{DebtSummary, Debtor};
use inventory_common::view::{CrudPage, Loadable};

pub struct DebtorsPage {
    pub page: CrudPage<Debtor>,
    /// Totals shown above the table. `None` until the first response.
    pub summary: Loadable<Option<DebtSummary>>,
}

impl DebtorsPage {
    pub fn new() -> Self {
        Self {
            page: CrudPage::new(ListScope::All),
            summary: Loadable::new("data"),
        }
    }
}
