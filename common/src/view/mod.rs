//! Framework-independent view state.
//!
//! Components own these containers and drive them from their message
//! handlers; nothing here touches the DOM or the network, so every
//! transition can be exercised natively.

pub mod delete;
pub mod form;
pub mod format;
pub mod loadable;
pub mod metrics;
pub mod page;
pub mod rows;

pub use delete::{DeleteGuard, DeleteOutcome};
pub use form::{FormModal, FormOutcome};
pub use loadable::{FetchTicket, ListView, LoadState, Loadable};
pub use metrics::{ChartKind, ChartPoint, ChartSource, ChartSpec, ScaledPoint, SummaryCard};
pub use page::CrudPage;
