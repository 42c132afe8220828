//! Categories page: a grid of cards, an add form and a delete dialog.
//!
//! Clicking a card asks the parent to open the products view scoped to
//! that category.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::CategoriesProps;
pub use state::CategoriesPage;

impl Component for CategoriesPage {
    type Message = Msg;
    type Properties = CategoriesProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CategoriesPage::new()
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
