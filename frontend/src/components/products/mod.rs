//! Products page, optionally scoped to one category.
//!
//! The category list is fetched alongside the products so rows and the
//! header can show category names. A change of the `category` prop
//! re-scopes the page and re-fetches; older in-flight responses are
//! dropped by their fetch ticket.

use inventory_common::api::ListScope;
use inventory_common::model::RecordId;
use yew::prelude::*;

use crate::api::ApiHandle;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ProductsPage;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductsProps {
    pub api: ApiHandle,
    #[prop_or_default]
    pub category: Option<RecordId>,
}

fn scope_for(category: &Option<RecordId>) -> ListScope {
    match category {
        Some(id) => ListScope::Category(id.clone()),
        None => ListScope::All,
    }
}

impl Component for ProductsPage {
    type Message = Msg;
    type Properties = ProductsProps;

    fn create(ctx: &Context<Self>) -> Self {
        ProductsPage::new(scope_for(&ctx.props().category))
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        if let Some(ticket) = self.page.rescope(scope_for(&ctx.props().category)) {
            update::fetch_products(self, ctx, ticket);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message_batch(vec![Msg::LoadCategories, Msg::Load]);
        }
    }
}
