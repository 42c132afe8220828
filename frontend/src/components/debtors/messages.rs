//! Messages handled by the debtors component.

use inventory_common::api::ApiError;
use inventory_common::model::{DebtSummary, Debtor};
use inventory_common::view::FetchTicket;

pub enum Msg {
    /// Fetches both the list and the summary.
    Load,
    Loaded(FetchTicket, Result<Vec<Debtor>, ApiError>),
    /// Summary response, checked against its own ticket.
    SummaryLoaded(FetchTicket, Result<DebtSummary, ApiError>),
    OpenCreate,
    OpenEdit(Debtor),
    CloseForm,
    SetField(&'static str, String),
    Submit,
    Submitted(FetchTicket, Result<(), ApiError>),
    RequestDelete(Debtor),
    CancelDelete,
    ConfirmDelete,
    Deleted(FetchTicket, Result<(), ApiError>),
}
