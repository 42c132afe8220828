//! Presentational pieces reused by every page: summary cards, charts, form
//! fields and the delete confirmation dialog.

mod card;
mod chart;
mod dialogs;

pub use card::{summary_cards, status_line};
pub use chart::chart;
pub use dialogs::{delete_dialog, number_field, text_field, DeleteDialog};
