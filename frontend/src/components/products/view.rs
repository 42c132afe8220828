//! Rendering for the products page.

use inventory_common::model::Record;
use inventory_common::view::format::{format_count, format_optional};
use inventory_common::view::rows::{empty_products_message, product_rows, products_heading};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::shared::{delete_dialog, number_field, status_line, text_field, DeleteDialog};
use crate::helpers::select_value;
use crate::modal::Modal;

use super::messages::Msg;
use super::state::ProductsPage;

pub fn view(component: &ProductsPage, ctx: &Context<ProductsPage>) -> Html {
    let link = ctx.link();
    let list = &component.page.list;
    let category_name = component.category_name();

    html! {
        <section class="page products-page">
            <header class="page-header">
                <h1>{ products_heading(category_name.as_deref()) }</h1>
                <button onclick={link.callback(|_| Msg::OpenCreate)}>{ "Add Product" }</button>
            </header>

            { status_line(list.is_loading(), list.error()) }

            if list.is_empty() && !list.is_loading() && list.error().is_none() {
                <p class="empty">{ empty_products_message(category_name.as_deref()) }</p>
            } else {
                { table(component, link) }
            }

            { form(component, link) }
            { confirm_delete(component, link) }
        </section>
    }
}

fn table(component: &ProductsPage, link: &Scope<ProductsPage>) -> Html {
    let products = component.page.list.items();
    let rows = product_rows(products, component.categories.items());

    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{ "SKU" }</th>
                    <th>{ "Name" }</th>
                    <th>{ "Description" }</th>
                    <th>{ "Quantity" }</th>
                    <th>{ "Price" }</th>
                    <th>{ "Low Stock Threshold" }</th>
                    <th>{ "Category" }</th>
                    <th>{ "Actions" }</th>
                </tr>
            </thead>
            <tbody>
                { for rows.into_iter().zip(products).map(|(row, product)| {
                    let edit = {
                        let product = product.clone();
                        link.callback(move |_| Msg::OpenEdit(product.clone()))
                    };
                    let remove = {
                        let product = product.clone();
                        link.callback(move |_| Msg::RequestDelete(product.clone()))
                    };
                    html! {
                        <tr class={classes!(row.low_stock.then_some("low-stock"))}>
                            <td>{ row.sku }</td>
                            <td>{ row.name }</td>
                            <td>{ row.description }</td>
                            <td>{ format_count(row.quantity) }</td>
                            <td>{ format_optional(row.price) }</td>
                            <td>{ row.low_stock_threshold.map(format_count).unwrap_or_default() }</td>
                            <td>{ row.category }</td>
                            <td>
                                <button onclick={edit}>{ "Edit" }</button>
                                <button class="danger" onclick={remove}>{ "Delete" }</button>
                            </td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}

fn form(component: &ProductsPage, link: &Scope<ProductsPage>) -> Html {
    let form = &component.page.form;
    let Some(draft) = form.draft() else {
        return html! {};
    };
    let scoped = component.page.scope().category().is_some();
    let title = if form.is_editing() { "Edit Product" } else { "Add Product" };
    let on_input = link.callback(|(field, value): (&'static str, String)| Msg::SetField(field, value));
    let on_category = link.callback(|e: Event| Msg::SetField("category_id", select_value(&e)));
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <Modal {title} on_close={link.callback(|_| Msg::CloseForm)}>
            <form {onsubmit}>
                { text_field("SKU", "sku", &draft.sku, true, &on_input) }
                { text_field("Name", "name", &draft.name, true, &on_input) }
                { text_field("Description", "description", draft.description.as_deref().unwrap_or_default(), false, &on_input) }
                { number_field("Quantity", "quantity", &draft.quantity.to_string(), &on_input) }
                { number_field("Price", "price", &optional(draft.price), &on_input) }
                { number_field("Low Stock Threshold", "low_stock_threshold", &optional(draft.low_stock_threshold), &on_input) }
                <label class="field">
                    <span>{ "Category" }</span>
                    <select name="category_id" disabled={scoped} onchange={on_category}>
                        <option value="" selected={draft.category_id.is_none()}>{ "Select a category" }</option>
                        { for component.categories.items().iter().map(|category| html! {
                            <option
                                value={category.id().to_string()}
                                selected={draft.category_id.as_ref() == Some(category.id())}
                            >
                                { category.name.clone() }
                            </option>
                        }) }
                    </select>
                </label>
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

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn confirm_delete(component: &ProductsPage, link: &Scope<ProductsPage>) -> Html {
    let guard = &component.page.delete;
    let Some(target) = guard.target() else {
        return html! {};
    };

    delete_dialog(
        DeleteDialog {
            title: "Delete Product",
            target: target.name.clone(),
            pending: guard.is_pending(),
            error: guard.error(),
        },
        link.callback(|_| Msg::CancelDelete),
        link.callback(|_| Msg::ConfirmDelete),
    )
}
