use inventory_common::model::RecordId;
use yew::prelude::*;

use crate::api::ApiHandle;

#[derive(Properties, PartialEq, Clone)]
pub struct CategoriesProps {
    pub api: ApiHandle,
    /// Fired with the category id when a card is clicked.
    pub on_open_category: Callback<RecordId>,
}
