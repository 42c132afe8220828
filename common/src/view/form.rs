//! State of a create/edit form modal bound to a [`Draft`].
//!
//! Each submission carries a [`FetchTicket`]. Closing or reopening the form
//! invalidates it, so a save that completes after the user moved on cannot
//! close or overwrite the form they are looking at now.

use log::{debug, warn};

use crate::api::{ApiError, Submission};
use crate::model::Draft;

use super::loadable::FetchTicket;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// Saved; the modal is closed and the list must be refreshed.
    Saved,
    /// Not saved; the modal stays open with an error.
    Failed,
    /// Completion of a submission the form no longer waits for. The form is
    /// left untouched.
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormModal<R> {
    draft: Option<R>,
    error: Option<String>,
    generation: u64,
    in_flight: Option<FetchTicket>,
}

impl<R> Default for FormModal<R> {
    fn default() -> Self {
        Self {
            draft: None,
            error: None,
            generation: 0,
            in_flight: None,
        }
    }
}

impl<R: Draft> FormModal<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_create(&mut self, draft: R) {
        self.draft = Some(draft);
        self.error = None;
        self.in_flight = None;
    }

    /// Opens the form on a copy of `record`; edits never touch the list.
    pub fn open_edit(&mut self, record: &R) {
        self.open_create(record.clone());
    }

    /// Discards the draft. A submission still in flight becomes stale.
    pub fn close(&mut self) {
        self.draft = None;
        self.error = None;
        self.in_flight = None;
    }

    pub fn is_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn is_editing(&self) -> bool {
        self.draft.as_ref().is_some_and(|d| d.id().is_saved())
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn draft(&self) -> Option<&R> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut R> {
        self.draft.as_mut()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Binds one input to the draft. A rejected value leaves the draft as it
    /// was and shows the reason.
    pub fn set_field(&mut self, field: &str, value: &str) {
        let Some(draft) = self.draft.as_mut() else {
            return;
        };
        match draft.set_field(field, value) {
            Ok(()) => self.error = None,
            Err(err) => self.error = Some(format!("{}.", err)),
        }
    }

    /// Starts a submission. Returns `None` when the form is closed, already
    /// submitting, or a required field is blank; no request should be made
    /// in those cases. The ticket must be handed back to [`Self::finish_submit`].
    pub fn begin_submit(&mut self) -> Option<(FetchTicket, Submission<R>)> {
        if self.in_flight.is_some() {
            return None;
        }
        let draft = self.draft.as_ref()?;
        if let Err(err) = draft.validate() {
            self.error = Some(format!("{}.", err));
            return None;
        }
        let submission = Submission::for_draft(draft.clone());
        let ticket = FetchTicket::issue(&mut self.generation);
        self.in_flight = Some(ticket);
        self.error = None;
        Some((ticket, submission))
    }

    pub fn finish_submit(&mut self, ticket: FetchTicket, result: Result<(), ApiError>) -> FormOutcome {
        if self.in_flight != Some(ticket) {
            match &result {
                Ok(()) => debug!("{} saved after its form was closed", R::KIND.singular()),
                Err(err) => warn!("failed to save {} after its form was closed: {}", R::KIND.singular(), err),
            }
            return FormOutcome::Stale;
        }

        self.in_flight = None;
        match result {
            Ok(()) => {
                self.close();
                FormOutcome::Saved
            }
            Err(err) => {
                warn!("failed to save {}: {}", R::KIND.singular(), err);
                self.error = Some(format!(
                    "Failed to save the {}. Please try again.",
                    R::KIND.singular()
                ));
                FormOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Method;
    use crate::model::{Category, Product};

    fn named(name: &str) -> Category {
        Category {
            name: name.into(),
            ..Category::default()
        }
    }

    #[test]
    fn blank_required_field_blocks_submission() {
        let mut form = FormModal::<Category>::new();
        form.open_create(Category::default());

        assert!(form.begin_submit().is_none());
        assert_eq!(form.error(), Some("Name is required."));
        assert!(!form.is_submitting());
    }

    #[test]
    fn sentinel_id_posts_and_saved_id_puts() {
        let mut form = FormModal::<Product>::new();
        form.open_create(Product::default());
        form.set_field("sku", "A1");
        form.set_field("name", "Tee");
        assert_eq!(form.begin_submit().map(|(_, s)| s.method()), Some(Method::Post));

        let saved = Product {
            id: 8.into(),
            sku: "A1".into(),
            name: "Tee".into(),
            ..Product::default()
        };
        form.open_edit(&saved);
        assert!(form.is_editing());
        assert_eq!(form.begin_submit().map(|(_, s)| s.method()), Some(Method::Put));
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut form = FormModal::<Category>::new();
        form.open_create(named("Hats"));
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn failure_keeps_modal_open() {
        let mut form = FormModal::<Category>::new();
        form.open_create(named("Hats"));
        let (ticket, _) = form.begin_submit().expect("valid draft");

        let outcome = form.finish_submit(
            ticket,
            Err(ApiError::Status {
                status: 500,
                url: "x".into(),
            }),
        );
        assert_eq!(outcome, FormOutcome::Failed);
        assert!(form.is_open());
        assert_eq!(form.error(), Some("Failed to save the category. Please try again."));

        let (ticket, _) = form.begin_submit().expect("retry allowed");
        assert_eq!(form.finish_submit(ticket, Ok(())), FormOutcome::Saved);
        assert!(!form.is_open());
        assert!(form.draft().is_none());
    }

    #[test]
    fn late_save_leaves_reopened_form_alone() {
        let mut form = FormModal::<Category>::new();
        form.open_create(named("Hats"));
        let (first, _) = form.begin_submit().expect("valid draft");
        form.close();

        form.open_create(named("Shoes"));
        let (second, _) = form.begin_submit().expect("new form submits");
        assert_ne!(first, second);

        assert_eq!(form.finish_submit(first, Ok(())), FormOutcome::Stale);
        assert!(form.is_open());
        assert!(form.is_submitting());
        assert_eq!(form.draft().map(|c| c.name.as_str()), Some("Shoes"));

        assert_eq!(form.finish_submit(second, Ok(())), FormOutcome::Saved);
        assert!(!form.is_open());
    }

    #[test]
    fn late_failure_does_not_mark_new_draft() {
        let mut form = FormModal::<Category>::new();
        form.open_create(named("Hats"));
        let (first, _) = form.begin_submit().expect("valid draft");
        form.open_create(named("Shoes"));

        let outcome = form.finish_submit(first, Err(ApiError::Transport("offline".into())));
        assert_eq!(outcome, FormOutcome::Stale);
        assert_eq!(form.error(), None);
        assert!(!form.is_submitting());
    }

    #[test]
    fn invalid_number_is_reported() {
        let mut form = FormModal::<Product>::new();
        form.open_create(Product::default());
        form.set_field("quantity", "x");
        assert_eq!(form.error(), Some("Quantity must be a number."));
        form.set_field("quantity", "3");
        assert_eq!(form.error(), None);
        assert_eq!(form.draft().map(|p| p.quantity), Some(3));
    }
}
