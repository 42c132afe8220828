//! Finance charts. Each chart is drawn from one server-side aggregate; the
//! page never sums anything itself.

use inventory_common::api::ApiError;
use inventory_common::model::{DebtSummary, ProductCalc, ProductCounts};
use inventory_common::view::{ChartKind, ChartSource, ChartSpec, FetchTicket, Loadable};
use yew::prelude::*;

use crate::api::{self, ApiHandle};
use crate::components::shared::{chart, status_line};

pub struct FinancesPage {
    debts: Loadable<Option<DebtSummary>>,
    calc: Loadable<Option<ProductCalc>>,
    counts: Loadable<Option<ProductCounts>>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct FinancesProps {
    pub api: ApiHandle,
}

pub enum Msg {
    Load,
    DebtsLoaded(FetchTicket, Result<DebtSummary, ApiError>),
    CalcLoaded(FetchTicket, Result<ProductCalc, ApiError>),
    CountsLoaded(FetchTicket, Result<ProductCounts, ApiError>),
}

fn panel<T: ChartSource>(title: &str, kind: ChartKind, source: &Loadable<Option<T>>) -> Html {
    html! {
        <div class="chart-panel">
            { status_line(source.is_loading(), source.error()) }
            if let Some(data) = source.data() {
                { chart(title, &ChartSpec::from_source(kind, data)) }
            }
        </div>
    }
}

impl Component for FinancesPage {
    type Message = Msg;
    type Properties = FinancesProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            debts: Loadable::new("data"),
            calc: Loadable::new("data"),
            counts: Loadable::new("data"),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let handle = &ctx.props().api;
                let ticket = self.debts.begin_fetch();
                api::fetch_one(ctx, handle, ticket, |api| async move { api.client().debt_summary().await }, Msg::DebtsLoaded);
                let ticket = self.calc.begin_fetch();
                api::fetch_one(ctx, handle, ticket, |api| async move { api.client().product_calc().await }, Msg::CalcLoaded);
                let ticket = self.counts.begin_fetch();
                api::fetch_one(ctx, handle, ticket, |api| async move { api.client().product_counts().await }, Msg::CountsLoaded);
                true
            }
            Msg::DebtsLoaded(ticket, result) => self.debts.finish_fetch(ticket, result.map(Some)),
            Msg::CalcLoaded(ticket, result) => self.calc.finish_fetch(ticket, result.map(Some)),
            Msg::CountsLoaded(ticket, result) => self.counts.finish_fetch(ticket, result.map(Some)),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="page finances-page">
                <h1>{ "Finances" }</h1>
                <div class="chart-grid">
                    { panel("Debts", ChartKind::Bar, &self.debts) }
                    { panel("Profit and Sales", ChartKind::Area, &self.calc) }
                    { panel("Product Counts", ChartKind::Pie, &self.counts) }
                </div>
            </section>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Load);
        }
    }
}
