//! Debtors page: summary cards over a table with create, edit and delete.
//! The summary is re-fetched together with the list after every mutation.

use yew::prelude::*;

use crate::api::ApiHandle;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::DebtorsPage;

#[derive(Properties, PartialEq, Clone)]
pub struct DebtorsProps {
    pub api: ApiHandle,
}

impl Component for DebtorsPage {
    type Message = Msg;
    type Properties = DebtorsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DebtorsPage::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
        }
    }
}
