//! Update logic for the categories page.

use inventory_common::model::{Category, Record};
use yew::prelude::*;

use crate::api;
use crate::helpers::show_toast;

use super::messages::Msg;
use super::state::CategoriesPage;

pub fn update(component: &mut CategoriesPage, ctx: &Context<CategoriesPage>, msg: Msg) -> bool {
    let handle = &ctx.props().api;
    let page = &mut component.page;

    match msg {
        Msg::Load => {
            let ticket = page.refresh();
            api::fetch_list(ctx, handle, page.scope().clone(), ticket, Msg::Loaded);
            true
        }
        Msg::Loaded(ticket, result) => page.list.finish_fetch(ticket, result),
        Msg::OpenCreate => {
            page.form.open_create(Category::default());
            true
        }
        Msg::CloseForm => {
            page.form.close();
            true
        }
        Msg::SetField(field, value) => {
            page.form.set_field(field, &value);
            true
        }
        Msg::Submit => {
            if let Some((ticket, submission)) = page.form.begin_submit() {
                api::submit(ctx, handle, ticket, submission, Msg::Submitted);
            }
            true
        }
        Msg::Submitted(ticket, result) => {
            if let Some(ticket) = page.after_submit(ticket, result) {
                show_toast("Category saved.");
                api::fetch_list(ctx, handle, page.scope().clone(), ticket, Msg::Loaded);
            }
            true
        }
        Msg::RequestDelete(category) => {
            page.delete.request(category);
            true
        }
        Msg::CancelDelete => {
            page.delete.cancel();
            true
        }
        Msg::ConfirmDelete => match page.delete.confirm() {
            Some((ticket, id)) => {
                api::delete(ctx, handle, ticket, Category::KIND, id, Msg::Deleted);
                true
            }
            None => false,
        },
        Msg::Deleted(ticket, result) => {
            if let Some(ticket) = page.after_delete(ticket, result) {
                show_toast("Category deleted.");
                api::fetch_list(ctx, handle, page.scope().clone(), ticket, Msg::Loaded);
            }
            true
        }
        Msg::Open(id) => {
            ctx.props().on_open_category.emit(id);
            false
        }
    }
}
