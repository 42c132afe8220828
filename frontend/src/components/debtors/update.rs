//! Update logic for the debtors page.

use inventory_common::model::{Debtor, Record};
use inventory_common::view::FetchTicket;
use yew::prelude::*;

use crate::api;
use crate::helpers::show_toast;

use super::messages::Msg;
use super::state::DebtorsPage;

/// Re-fetches the list under `ticket` and the summary under a fresh one.
fn reload(component: &mut DebtorsPage, ctx: &Context<DebtorsPage>, ticket: FetchTicket) {
    let handle = &ctx.props().api;
    api::fetch_list(ctx, handle, component.page.scope().clone(), ticket, Msg::Loaded);

    let summary_ticket = component.summary.begin_fetch();
    api::fetch_one(
        ctx,
        handle,
        summary_ticket,
        |api| async move { api.client().debt_summary().await },
        Msg::SummaryLoaded,
    );
}

pub fn update(component: &mut DebtorsPage, ctx: &Context<DebtorsPage>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            let ticket = component.page.refresh();
            reload(component, ctx, ticket);
            true
        }
        Msg::Loaded(ticket, result) => component.page.list.finish_fetch(ticket, result),
        Msg::SummaryLoaded(ticket, result) => component.summary.finish_fetch(ticket, result.map(Some)),
        Msg::OpenCreate => {
            component.page.form.open_create(Debtor::default());
            true
        }
        Msg::OpenEdit(debtor) => {
            component.page.form.open_edit(&debtor);
            true
        }
        Msg::CloseForm => {
            component.page.form.close();
            true
        }
        Msg::SetField(field, value) => {
            component.page.form.set_field(field, &value);
            true
        }
        Msg::Submit => {
            if let Some((ticket, submission)) = component.page.form.begin_submit() {
                api::submit(ctx, &ctx.props().api, ticket, submission, Msg::Submitted);
            }
            true
        }
        Msg::Submitted(ticket, result) => {
            if let Some(ticket) = component.page.after_submit(ticket, result) {
                show_toast("Debtor saved.");
                reload(component, ctx, ticket);
            }
            true
        }
        Msg::RequestDelete(debtor) => {
            component.page.delete.request(debtor);
            true
        }
        Msg::CancelDelete => {
            component.page.delete.cancel();
            true
        }
        Msg::ConfirmDelete => match component.page.delete.confirm() {
            Some((ticket, id)) => {
                api::delete(ctx, &ctx.props().api, ticket, Debtor::KIND, id, Msg::Deleted);
                true
            }
            None => false,
        },
        Msg::Deleted(ticket, result) => {
            if let Some(ticket) = component.page.after_delete(ticket, result) {
                show_toast("Debtor deleted.");
                reload(component, ctx, ticket);
            }
            true
        }
    }
}
