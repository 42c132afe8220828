//! State of the categories page.
//!
//! Everything lives in a single `CrudPage`: the card list, the add form and
//! the delete dialog. Fields are `pub` because `view` and `update` read them.

use inventory_common::api::ListScope;
use inventory_common::model::Category;
use inventory_common::view::CrudPage;

/// State container for the categories component.
pub struct CategoriesPage {
    /// List, form and delete dialog, always unscoped.
    pub page: CrudPage<Category>,
}

impl CategoriesPage {
    pub fn new() -> Self {
        Self {
            page: CrudPage::new(ListScope::All),
        }
    }
}
