//! Rendering for the categories page: card grid, add modal, delete dialog.

use inventory_common::view::rows::category_cards;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::shared::{delete_dialog, status_line, text_field, DeleteDialog};
use crate::modal::Modal;

use super::messages::Msg;
use super::state::CategoriesPage;

pub fn view(component: &CategoriesPage, ctx: &Context<CategoriesPage>) -> Html {
    let link = ctx.link();
    let page = &component.page;

    html! {
        <section class="page categories-page">
            <header class="page-header">
                <h1>{ "Categories" }</h1>
                <button onclick={link.callback(|_| Msg::OpenCreate)}>{ "Add Category" }</button>
            </header>

            { status_line(page.list.is_loading(), page.list.error()) }

            <div class="card-grid">
                { for category_cards(page.list.items()).into_iter().zip(page.list.items()).map(|(card, category)| {
                    let open = {
                        let id = card.id.clone();
                        link.callback(move |_| Msg::Open(id.clone()))
                    };
                    let remove = {
                        let category = category.clone();
                        link.callback(move |e: MouseEvent| {
                            e.stop_propagation();
                            Msg::RequestDelete(category.clone())
                        })
                    };
                    html! {
                        <div class="card category-card" onclick={open}>
                            <h3>{ card.title }</h3>
                            <p>{ card.subtitle }</p>
                            <button class="danger" onclick={remove}>{ "Delete" }</button>
                        </div>
                    }
                }) }
            </div>

            { form(component, link) }
            { confirm_delete(component, link) }
        </section>
    }
}

fn form(component: &CategoriesPage, link: &Scope<CategoriesPage>) -> Html {
    let form = &component.page.form;
    let Some(draft) = form.draft() else {
        return html! {};
    };
    let on_input = link.callback(|(field, value): (&'static str, String)| Msg::SetField(field, value));
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <Modal title="Add Category" on_close={link.callback(|_| Msg::CloseForm)}>
            <form {onsubmit}>
                { text_field("Name", "name", &draft.name, true, &on_input) }
                { text_field("Description", "description", draft.description.as_deref().unwrap_or_default(), false, &on_input) }
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

fn confirm_delete(component: &CategoriesPage, link: &Scope<CategoriesPage>) -> Html {
    let guard = &component.page.delete;
    let Some(target) = guard.target() else {
        return html! {};
    };

    delete_dialog(
        DeleteDialog {
            title: "Delete Category",
            target: target.name.clone(),
            pending: guard.is_pending(),
            error: guard.error(),
        },
        link.callback(|_| Msg::CancelDelete),
        link.callback(|_| Msg::ConfirmDelete),
    )
}
