//! State of the products page.
//!
//! Holds the product `CrudPage`, scoped to a category when the parent asks
//! for one, and a read-only category list used to resolve names.

use inventory_common::api::ListScope;
use inventory_common::model::{Category, Product};
use inventory_common::view::rows::scoped_category_name;
use inventory_common::view::{CrudPage, ListView};

const NOT_FOUND: &str = "Category not found or no products available.";

pub struct ProductsPage {
    /// Products in the current scope, with the add/edit form and delete dialog.
    pub page: CrudPage<Product>,
    /// Only used to resolve names; never mutated from this page.
    pub categories: ListView<Category>,
}

impl ProductsPage {
    pub fn new(scope: ListScope) -> Self {
        Self {
            page: CrudPage::new(scope).with_list(ListView::for_records().with_not_found_message(NOT_FOUND)),
            categories: ListView::for_records(),
        }
    }

    /// Name of the category the page is scoped to, `None` when unscoped.
    pub fn category_name(&self) -> Option<String> {
        scoped_category_name(self.page.scope().category(), self.categories.items())
    }
}
