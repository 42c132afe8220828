//! Messages handled by the categories component.

use inventory_common::api::ApiError;
use inventory_common::model::{Category, RecordId};
use inventory_common::view::FetchTicket;

pub enum Msg {
    Load,
    Loaded(FetchTicket, Result<Vec<Category>, ApiError>),
    OpenCreate,
    CloseForm,
    SetField(&'static str, String),
    Submit,
    /// Completion of the save started under the ticket.
    Submitted(FetchTicket, Result<(), ApiError>),
    RequestDelete(Category),
    CancelDelete,
    ConfirmDelete,
    Deleted(FetchTicket, Result<(), ApiError>),
    /// A card was clicked; forwarded to the parent.
    Open(RecordId),
}
