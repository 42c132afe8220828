use inventory_common::model::RecordId;
use yew::{html, Callback, Component, Context, Html};

use crate::api::ApiHandle;
use crate::components::categories::CategoriesPage;
use crate::components::debtors::DebtorsPage;
use crate::components::finances::FinancesPage;
use crate::components::home::HomePage;
use crate::components::products::ProductsPage;
use crate::shell::{fallback, MenuItem, Sidebar};

#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Home,
    /// Products, optionally scoped to a category.
    Products(Option<RecordId>),
    Categories,
    Finances,
    Debtors,
    /// A menu entry with no page behind it.
    Unavailable(MenuItem),
}

impl Page {
    fn menu_item(&self) -> MenuItem {
        match self {
            Page::Home => MenuItem::Home,
            Page::Products(_) => MenuItem::Products,
            Page::Categories => MenuItem::Categories,
            Page::Finances => MenuItem::Finances,
            Page::Debtors => MenuItem::Debtors,
            Page::Unavailable(item) => *item,
        }
    }
}

impl From<MenuItem> for Page {
    fn from(item: MenuItem) -> Self {
        match item {
            MenuItem::Home => Page::Home,
            MenuItem::Products => Page::Products(None),
            MenuItem::Categories => Page::Categories,
            MenuItem::Finances => Page::Finances,
            MenuItem::Debtors => Page::Debtors,
            MenuItem::Stores | MenuItem::Settings => Page::Unavailable(item),
        }
    }
}

pub enum Msg {
    Navigate(Page),
}

pub struct App {
    api: ApiHandle,
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            api: ApiHandle::from_build_env(),
            page: Page::Home,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                if self.page == page {
                    return false;
                }
                log::debug!("navigating to {:?}", page);
                self.page = page;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let api = self.api.clone();
        let on_select: Callback<MenuItem> = link.callback(|item: MenuItem| Msg::Navigate(item.into()));

        let content = match &self.page {
            Page::Home => html! { <HomePage {api} /> },
            Page::Products(category) => html! { <ProductsPage {api} category={category.clone()} /> },
            Page::Categories => html! {
                <CategoriesPage
                    {api}
                    on_open_category={link.callback(|id| Msg::Navigate(Page::Products(Some(id))))}
                />
            },
            Page::Finances => html! { <FinancesPage {api} /> },
            Page::Debtors => html! { <DebtorsPage {api} /> },
            Page::Unavailable(item) => fallback(item.label()),
        };

        html! {
            <div class="layout">
                <Sidebar active={self.page.menu_item()} {on_select} />
                <main class="content">{ content }</main>
            </div>
        }
    }
}
