use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Home,
    Products,
    Categories,
    Stores,
    Finances,
    Debtors,
    Settings,
}

impl MenuItem {
    pub const ALL: [MenuItem; 7] = [
        MenuItem::Home,
        MenuItem::Products,
        MenuItem::Categories,
        MenuItem::Stores,
        MenuItem::Finances,
        MenuItem::Debtors,
        MenuItem::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Home => "Home",
            MenuItem::Products => "Products",
            MenuItem::Categories => "Categories",
            MenuItem::Stores => "Stores",
            MenuItem::Finances => "Finances",
            MenuItem::Debtors => "Debtors",
            MenuItem::Settings => "Settings",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub active: MenuItem,
    pub on_select: Callback<MenuItem>,
}

pub struct Sidebar;

impl Component for Sidebar {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <nav class="sidebar">
                <h2>{ "Inventory" }</h2>
                <ul>
                    { for MenuItem::ALL.into_iter().map(|item| {
                        let onclick = props.on_select.reform(move |_: MouseEvent| item);
                        html! {
                            <li class={classes!((item == props.active).then_some("active"))} {onclick}>
                                { item.label() }
                            </li>
                        }
                    }) }
                </ul>
            </nav>
        }
    }
}
