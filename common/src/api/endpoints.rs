//! Route table for the backend.
//!
//! Routes are templates relative to the base URL; `{id}` is replaced with
//! the record identifier. Keeping them as data lets a deployment correct a
//! route (the debtor update path in particular) without touching the views.

use crate::model::{RecordId, ResourceKind};

pub const ID_PLACEHOLDER: &str = "{id}";

/// Routes for one CRUD collection.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceRoutes {
    /// Unscoped list.
    pub list: String,
    /// List filtered by a parent id, when the backend offers one.
    pub scoped_list: Option<String>,
    /// POST target.
    pub create: String,
    /// PUT target. `None` when the backend has no update route.
    pub update: Option<String>,
    /// DELETE target.
    pub delete: String,
}

impl ResourceRoutes {
    /// Whether the update route addresses a specific record.
    pub fn update_targets_record(&self) -> bool {
        self.update
            .as_deref()
            .is_some_and(|template| template.contains(ID_PLACEHOLDER))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub categories: ResourceRoutes,
    pub products: ResourceRoutes,
    pub debtors: ResourceRoutes,
    pub debt_summary: String,
    pub product_counts: String,
    pub product_calc: String,
    pub low_stock: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            categories: ResourceRoutes {
                list: "/categories".into(),
                scoped_list: None,
                create: "/categories".into(),
                update: None,
                delete: "/categories/{id}".into(),
            },
            products: ResourceRoutes {
                list: "/products/".into(),
                scoped_list: Some("/products/by_category_id/{id}".into()),
                create: "/products".into(),
                update: Some("/products/{id}".into()),
                delete: "/products/{id}".into(),
            },
            // The backend's debtor update route carries no id; it is kept
            // as-is and can be overridden through `with_debtor_update`.
            debtors: ResourceRoutes {
                list: "/debtors".into(),
                scoped_list: None,
                create: "/debtors".into(),
                update: Some("/debtors/".into()),
                delete: "/debtors/{id}".into(),
            },
            debt_summary: "/debtors/debts".into(),
            product_counts: "/products/counts".into(),
            product_calc: "/products/calc".into(),
            low_stock: "/analytics/low-stock".into(),
        }
    }
}

impl Endpoints {
    pub fn routes(&self, kind: ResourceKind) -> &ResourceRoutes {
        match kind {
            ResourceKind::Categories => &self.categories,
            ResourceKind::Products => &self.products,
            ResourceKind::Debtors => &self.debtors,
        }
    }

    pub fn with_debtor_update(mut self, template: impl Into<String>) -> Self {
        self.debtors.update = Some(template.into());
        self
    }
}

/// Substitutes `id` into `template`. Templates without a placeholder are
/// returned unchanged.
pub fn expand(template: &str, id: &RecordId) -> String {
    template.replace(ID_PLACEHOLDER, &id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_placeholder() {
        assert_eq!(expand("/products/{id}", &RecordId::from(9)), "/products/9");
        assert_eq!(expand("/debtors/", &RecordId::from(9)), "/debtors/");
    }

    #[test]
    fn default_debtor_update_has_no_identifier() {
        let endpoints = Endpoints::default();
        assert!(!endpoints.debtors.update_targets_record());
        assert!(endpoints.products.update_targets_record());
        assert!(endpoints.categories.update.is_none());
    }

    #[test]
    fn debtor_update_can_be_overridden() {
        let endpoints = Endpoints::default().with_debtor_update("/debtors/{id}");
        assert!(endpoints.debtors.update_targets_record());
    }
}
