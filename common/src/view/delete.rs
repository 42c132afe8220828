//! Two-step delete: pick a target, then confirm or cancel.
//!
//! Like form submissions, a confirmed delete carries a [`FetchTicket`];
//! cancelling or picking another target makes the in-flight one stale.

use log::{debug, warn};

use crate::api::ApiError;
use crate::model::{Record, RecordId};

use super::loadable::FetchTicket;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Deleted; the list must be refreshed.
    Deleted,
    Failed,
    /// Completion of a delete the dialog no longer waits for.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteGuard<R> {
    target: Option<R>,
    generation: u64,
    in_flight: Option<FetchTicket>,
    error: Option<String>,
}

impl<R> Default for DeleteGuard<R> {
    fn default() -> Self {
        Self {
            target: None,
            generation: 0,
            in_flight: None,
            error: None,
        }
    }
}

impl<R: Record> DeleteGuard<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the target and opens the confirmation dialog.
    pub fn request(&mut self, target: R) {
        self.target = Some(target);
        self.in_flight = None;
        self.error = None;
    }

    /// Closes the dialog without touching the backend.
    pub fn cancel(&mut self) -> Option<R> {
        self.in_flight = None;
        self.error = None;
        self.target.take()
    }

    /// Identifier to DELETE with its ticket, or `None` if there is nothing
    /// to confirm or a delete is already in flight.
    pub fn confirm(&mut self) -> Option<(FetchTicket, RecordId)> {
        if self.in_flight.is_some() {
            return None;
        }
        let id = self.target.as_ref()?.id().clone();
        let ticket = FetchTicket::issue(&mut self.generation);
        self.in_flight = Some(ticket);
        self.error = None;
        Some((ticket, id))
    }

    pub fn finish(&mut self, ticket: FetchTicket, result: Result<(), ApiError>) -> DeleteOutcome {
        if self.in_flight != Some(ticket) {
            match &result {
                Ok(()) => debug!("{} deleted after its dialog was closed", R::KIND.singular()),
                Err(err) => warn!("failed to delete {} after its dialog was closed: {}", R::KIND.singular(), err),
            }
            return DeleteOutcome::Stale;
        }

        self.in_flight = None;
        match result {
            Ok(()) => {
                self.target = None;
                self.error = None;
                DeleteOutcome::Deleted
            }
            Err(err) => {
                warn!("failed to delete {}: {}", R::KIND.singular(), err);
                self.error = Some(format!(
                    "Failed to delete the {}. Please try again.",
                    R::KIND.singular()
                ));
                DeleteOutcome::Failed
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn target(&self) -> Option<&R> {
        self.target.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;

    fn category(id: i64, name: &str) -> Category {
        Category {
            id: id.into(),
            name: name.into(),
            ..Category::default()
        }
    }

    #[test]
    fn confirm_yields_target_id_once() {
        let mut guard = DeleteGuard::new();
        guard.request(category(2, "Hats"));
        let (ticket, id) = guard.confirm().expect("target set");
        assert_eq!(id, RecordId::from(2));
        assert_eq!(guard.confirm(), None);

        assert_eq!(guard.finish(ticket, Ok(())), DeleteOutcome::Deleted);
        assert!(!guard.is_open());
    }

    #[test]
    fn cancel_discards_target() {
        let mut guard = DeleteGuard::new();
        guard.request(category(2, "Hats"));
        assert_eq!(guard.cancel().map(|c| c.name), Some("Hats".to_string()));
        assert_eq!(guard.confirm(), None);
    }

    #[test]
    fn failure_keeps_dialog_open() {
        let mut guard = DeleteGuard::new();
        guard.request(category(2, "Hats"));
        let (ticket, _) = guard.confirm().expect("target set");
        let outcome = guard.finish(ticket, Err(ApiError::Transport("offline".into())));

        assert_eq!(outcome, DeleteOutcome::Failed);
        assert!(guard.is_open());
        assert_eq!(guard.error(), Some("Failed to delete the category. Please try again."));
        assert_eq!(guard.confirm().map(|(_, id)| id), Some(RecordId::from(2)));
    }

    #[test]
    fn completion_after_cancel_leaves_next_dialog_alone() {
        let mut guard = DeleteGuard::new();
        guard.request(category(2, "Hats"));
        let (first, _) = guard.confirm().expect("target set");
        guard.cancel();

        guard.request(category(3, "Shoes"));
        assert!(!guard.is_pending());

        assert_eq!(guard.finish(first, Ok(())), DeleteOutcome::Stale);
        assert_eq!(guard.target().map(|c| c.name.as_str()), Some("Shoes"));

        let (second, id) = guard.confirm().expect("new target confirmable");
        assert_eq!(id, RecordId::from(3));
        assert_eq!(guard.finish(first, Err(ApiError::Transport("late".into()))), DeleteOutcome::Stale);
        assert!(guard.is_pending());
        assert_eq!(guard.error(), None);
        assert_eq!(guard.finish(second, Ok(())), DeleteOutcome::Deleted);
    }
}
