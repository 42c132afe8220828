use inventory_common::view::format::format_amount;
use inventory_common::view::metrics::debt_cards;
use inventory_common::view::rows::debtor_rows;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::shared::{delete_dialog, number_field, status_line, summary_cards, text_field, DeleteDialog};
use crate::modal::Modal;

use super::messages::Msg;
use super::state::DebtorsPage;

pub fn view(component: &DebtorsPage, ctx: &Context<DebtorsPage>) -> Html {
    let link = ctx.link();
    let list = &component.page.list;
    let summary = &component.summary;

    html! {
        <section class="page debtors-page">
            <header class="page-header">
                <h1>{ "Debtors" }</h1>
                <button onclick={link.callback(|_| Msg::OpenCreate)}>{ "Add Debtor" }</button>
            </header>

            { summary_cards(&debt_cards(summary.data().as_ref())) }
            { status_line(false, summary.error()) }
            { status_line(list.is_loading(), list.error()) }

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{ "Name" }</th>
                        <th>{ "Description" }</th>
                        <th>{ "Owes" }</th>
                        <th>{ "Owing Amount" }</th>
                        <th>{ "Paid" }</th>
                        <th>{ "Actions" }</th>
                    </tr>
                </thead>
                <tbody>
                    { for debtor_rows(list.items()).into_iter().zip(list.items()).map(|(row, debtor)| {
                        let edit = {
                            let debtor = debtor.clone();
                            link.callback(move |_| Msg::OpenEdit(debtor.clone()))
                        };
                        let remove = {
                            let debtor = debtor.clone();
                            link.callback(move |_| Msg::RequestDelete(debtor.clone()))
                        };
                        html! {
                            <tr>
                                <td>{ row.name }</td>
                                <td>{ row.description }</td>
                                <td>{ format_amount(row.owes) }</td>
                                <td>{ format_amount(row.initial_amount_owed) }</td>
                                <td>{ format_amount(row.paid) }</td>
                                <td>
                                    <button onclick={edit}>{ "Edit" }</button>
                                    <button class="danger" onclick={remove}>{ "Delete" }</button>
                                </td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>

            { form(component, link) }
            { confirm_delete(component, link) }
        </section>
    }
}

fn form(component: &DebtorsPage, link: &Scope<DebtorsPage>) -> Html {
    let form = &component.page.form;
    let Some(draft) = form.draft() else {
        return html! {};
    };
    let title = if form.is_editing() { "Edit Debtor" } else { "Add Debtor" };
    let on_input = link.callback(|(field, value): (&'static str, String)| Msg::SetField(field, value));
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <Modal {title} on_close={link.callback(|_| Msg::CloseForm)}>
            <form {onsubmit}>
                { text_field("Name", "name", &draft.name, true, &on_input) }
                { text_field("Description", "description", &draft.description, true, &on_input) }
                { number_field("Owing Amount", "initialAmountOwed", &draft.initial_amount_owed.to_string(), &on_input) }
                { number_field("Owes", "owes", &draft.owes.to_string(), &on_input) }
                { number_field("Paid", "paid", &draft.paid.to_string(), &on_input) }
                if let Some(error) = form.error() {
                    <p class="error">{ error }</p>
                }
                <div class="modal-actions">
                    <button type="button" onclick={link.callback(|_| Msg::CloseForm)}>{ "Cancel" }</button>
                    <button type="submit" disabled={form.is_submitting()}>{ "Save" }</button>
                </div>
            </form>
        </Modal>
    }
}

fn confirm_delete(component: &DebtorsPage, link: &Scope<DebtorsPage>) -> Html {
    let guard = &component.page.delete;
    let Some(target) = guard.target() else {
        return html! {};
    };

    delete_dialog(
        DeleteDialog {
            title: "Delete Debtor",
            target: target.name.clone(),
            pending: guard.is_pending(),
            error: guard.error(),
        },
        link.callback(|_| Msg::CancelDelete),
        link.callback(|_| Msg::ConfirmDelete),
    )
}
