//! Update logic for the products page.
//!
//! Responses carry the ticket they were requested under, so a reply that a
//! newer request has overtaken cannot overwrite the page.

use inventory_common::api::ListScope;
use inventory_common::model::{Product, Record};
use inventory_common::view::FetchTicket;
use yew::prelude::*;

use crate::api;
use crate::helpers::show_toast;

use super::messages::Msg;
use super::state::ProductsPage;

pub fn fetch_products(component: &ProductsPage, ctx: &Context<ProductsPage>, ticket: FetchTicket) {
    let scope = component.page.scope().clone();
    api::fetch_list(ctx, &ctx.props().api, scope, ticket, Msg::Loaded);
}

pub fn update(component: &mut ProductsPage, ctx: &Context<ProductsPage>, msg: Msg) -> bool {
    let handle = &ctx.props().api;

    match msg {
        Msg::Load => {
            let ticket = component.page.refresh();
            fetch_products(component, ctx, ticket);
            true
        }
        Msg::Loaded(ticket, result) => component.page.list.finish_fetch(ticket, result),
        Msg::LoadCategories => {
            let ticket = component.categories.begin_fetch();
            api::fetch_list(ctx, handle, ListScope::All, ticket, Msg::CategoriesLoaded);
            false
        }
        Msg::CategoriesLoaded(ticket, result) => component.categories.finish_fetch(ticket, result),
        Msg::OpenCreate => {
            let scope = component.page.scope().category().cloned();
            component.page.form.open_create(Product::new_in_category(scope));
            true
        }
        Msg::OpenEdit(product) => {
            component.page.form.open_edit(&product);
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
            let scope = component.page.scope().category().cloned();
            if let Some(draft) = component.page.form.draft_mut() {
                draft.assign_scope(scope.as_ref());
            }
            if let Some((ticket, submission)) = component.page.form.begin_submit() {
                api::submit(ctx, handle, ticket, submission, Msg::Submitted);
            }
            true
        }
        Msg::Submitted(ticket, result) => {
            if let Some(ticket) = component.page.after_submit(ticket, result) {
                show_toast("Product saved.");
                fetch_products(component, ctx, ticket);
            }
            true
        }
        Msg::RequestDelete(product) => {
            component.page.delete.request(product);
            true
        }
        Msg::CancelDelete => {
            component.page.delete.cancel();
            true
        }
        Msg::ConfirmDelete => match component.page.delete.confirm() {
            Some((ticket, id)) => {
                api::delete(ctx, handle, ticket, Product::KIND, id, Msg::Deleted);
                true
            }
            None => false,
        },
        Msg::Deleted(ticket, result) => {
            if let Some(ticket) = component.page.after_delete(ticket, result) {
                show_toast("Product deleted.");
                fetch_products(component, ctx, ticket);
            }
            true
        }
    }
}
