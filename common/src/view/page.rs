use crate::api::{ApiError, ListScope};
use crate::model::Draft;

use super::delete::{DeleteGuard, DeleteOutcome};
use super::form::{FormModal, FormOutcome};
use super::loadable::{FetchTicket, ListView};

/// All local state of one entity CRUD view: the fetched list, the form
/// modal and the delete confirmation. Every successful mutation hands back
/// a ticket for the re-fetch that must follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct CrudPage<R> {
    pub list: ListView<R>,
    pub form: FormModal<R>,
    pub delete: DeleteGuard<R>,
    scope: ListScope,
}

impl<R: Draft> CrudPage<R> {
    pub fn new(scope: ListScope) -> Self {
        Self {
            list: ListView::for_records(),
            form: FormModal::new(),
            delete: DeleteGuard::new(),
            scope,
        }
    }

    pub fn with_list(mut self, list: ListView<R>) -> Self {
        self.list = list;
        self
    }

    pub fn scope(&self) -> &ListScope {
        &self.scope
    }

    pub fn refresh(&mut self) -> FetchTicket {
        self.list.begin_fetch()
    }

    /// Switches scope. Returns a ticket only when the scope actually changed.
    pub fn rescope(&mut self, scope: ListScope) -> Option<FetchTicket> {
        if self.scope == scope {
            return None;
        }
        self.scope = scope;
        Some(self.refresh())
    }

    /// Applies a save completion. A stale success still refreshes the list,
    /// because the backend changed, but leaves the form alone.
    pub fn after_submit(&mut self, ticket: FetchTicket, result: Result<(), ApiError>) -> Option<FetchTicket> {
        let succeeded = result.is_ok();
        match self.form.finish_submit(ticket, result) {
            FormOutcome::Saved => Some(self.refresh()),
            FormOutcome::Stale if succeeded => Some(self.refresh()),
            FormOutcome::Failed | FormOutcome::Stale => None,
        }
    }

    pub fn after_delete(&mut self, ticket: FetchTicket, result: Result<(), ApiError>) -> Option<FetchTicket> {
        let succeeded = result.is_ok();
        match self.delete.finish(ticket, result) {
            DeleteOutcome::Deleted => Some(self.refresh()),
            DeleteOutcome::Stale if succeeded => Some(self.refresh()),
            DeleteOutcome::Failed | DeleteOutcome::Stale => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, RecordId};

    #[test]
    fn rescoping_to_same_scope_is_a_no_op() {
        let mut page = CrudPage::<Product>::new(ListScope::Category(RecordId::from(1)));
        assert!(page.rescope(ListScope::Category(RecordId::from(1))).is_none());
        assert!(page.rescope(ListScope::All).is_some());
        assert!(page.list.is_loading());
    }

    fn tee(id: i64) -> Product {
        Product {
            id: id.into(),
            sku: "A1".into(),
            name: "Tee".into(),
            ..Product::default()
        }
    }

    #[test]
    fn failed_mutation_does_not_refresh() {
        let mut page = CrudPage::<Product>::new(ListScope::All);
        page.delete.request(tee(1));
        let (ticket, _) = page.delete.confirm().expect("target set");
        assert!(page.after_delete(ticket, Err(ApiError::Transport("down".into()))).is_none());

        let (ticket, _) = page.delete.confirm().expect("retry allowed");
        assert!(page.after_delete(ticket, Ok(())).is_some());
    }

    #[test]
    fn stale_save_refreshes_without_closing_new_form() {
        let mut page = CrudPage::<Product>::new(ListScope::All);
        page.form.open_create(tee(0));
        let (first, _) = page.form.begin_submit().expect("valid draft");
        page.form.close();
        page.form.open_edit(&tee(4));

        assert!(page.after_submit(first, Ok(())).is_some());
        assert!(page.form.is_open());
        assert!(page.form.is_editing());

        page.form.open_create(tee(0));
        let (failed, _) = page.form.begin_submit().expect("valid draft");
        page.form.close();
        assert!(page.after_submit(failed, Err(ApiError::Transport("down".into()))).is_none());
    }
}
