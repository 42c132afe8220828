//! Messages handled by the products component.

use inventory_common::api::ApiError;
use inventory_common::model::{Category, Product};
use inventory_common::view::FetchTicket;

pub enum Msg {
    Load,
    Loaded(FetchTicket, Result<Vec<Product>, ApiError>),
    /// Refreshes the category names only; products are left as they are.
    LoadCategories,
    CategoriesLoaded(FetchTicket, Result<Vec<Category>, ApiError>),
    OpenCreate,
    OpenEdit(Product),
    CloseForm,
    SetField(&'static str, String),
    Submit,
    Submitted(FetchTicket, Result<(), ApiError>),
    RequestDelete(Product),
    CancelDelete,
    ConfirmDelete,
    Deleted(FetchTicket, Result<(), ApiError>),
}
