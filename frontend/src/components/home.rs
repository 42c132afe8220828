//! Landing page: product count cards and the low-stock table.

use inventory_common::api::ApiError;
use inventory_common::model::{LowStockEntry, ProductCounts};
use inventory_common::view::format::format_count;
use inventory_common::view::metrics::product_count_cards;
use inventory_common::view::{FetchTicket, Loadable};
use yew::prelude::*;

use crate::api::{self, ApiHandle};
use crate::components::shared::{status_line, summary_cards};

pub struct HomePage {
    counts: Loadable<Option<ProductCounts>>,
    low_stock: Loadable<Vec<LowStockEntry>>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct HomeProps {
    pub api: ApiHandle,
}

pub enum Msg {
    Load,
    CountsLoaded(FetchTicket, Result<ProductCounts, ApiError>),
    LowStockLoaded(FetchTicket, Result<Vec<LowStockEntry>, ApiError>),
}

impl Component for HomePage {
    type Message = Msg;
    type Properties = HomeProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            counts: Loadable::new("data"),
            low_stock: Loadable::new("low stock products"),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let handle = &ctx.props().api;
                let ticket = self.counts.begin_fetch();
                api::fetch_one(
                    ctx,
                    handle,
                    ticket,
                    |api| async move { api.client().product_counts().await },
                    Msg::CountsLoaded,
                );
                let ticket = self.low_stock.begin_fetch();
                api::fetch_one(
                    ctx,
                    handle,
                    ticket,
                    |api| async move { api.client().low_stock().await },
                    Msg::LowStockLoaded,
                );
                true
            }
            Msg::CountsLoaded(ticket, result) => self.counts.finish_fetch(ticket, result.map(Some)),
            Msg::LowStockLoaded(ticket, result) => self.low_stock.finish_fetch(ticket, result),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="page home-page">
                <h1>{ "Home" }</h1>
                { summary_cards(&product_count_cards(self.counts.data().as_ref())) }
                { status_line(self.counts.is_loading(), self.counts.error()) }

                <h2>{ "Low Stock" }</h2>
                { status_line(self.low_stock.is_loading(), self.low_stock.error()) }
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>{ "SKU" }</th>
                            <th>{ "Name" }</th>
                            <th>{ "Quantity" }</th>
                            <th>{ "Threshold" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for self.low_stock.data().iter().map(|entry| html! {
                            <tr>
                                <td>{ entry.sku.clone() }</td>
                                <td>{ entry.name.clone() }</td>
                                <td>{ format_count(entry.quantity) }</td>
                                <td>{ entry.low_stock_threshold.map(format_count).unwrap_or_default() }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </section>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
        }
    }
}
