//! Wire models shared by the API client and the views.
//!
//! Every entity the dashboard edits implements [`Record`], which ties it to
//! a [`ResourceKind`] (and therefore to a route table entry) and exposes its
//! [`RecordId`]. Editable entities also implement [`Draft`] so form modals
//! can bind string inputs to typed fields.

pub mod aggregate;
pub mod category;
pub mod debtor;
pub mod draft;
pub mod product;
pub mod record_id;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use aggregate::{DebtSummary, LowStockEntry, ProductCalc, ProductCounts};
pub use category::Category;
pub use debtor::Debtor;
pub use draft::{Draft, FieldError};
pub use product::Product;
pub use record_id::RecordId;

/// The REST collections the dashboard manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Categories,
    Products,
    Debtors,
}

impl ResourceKind {
    /// Lower-case collection name, used in log lines and list error messages.
    pub fn plural(self) -> &'static str {
        match self {
            ResourceKind::Categories => "categories",
            ResourceKind::Products => "products",
            ResourceKind::Debtors => "debtors",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            ResourceKind::Categories => "category",
            ResourceKind::Products => "product",
            ResourceKind::Debtors => "debtor",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

/// A persisted entity that lives in one REST collection.
pub trait Record: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    const KIND: ResourceKind;

    fn id(&self) -> &RecordId;
}
