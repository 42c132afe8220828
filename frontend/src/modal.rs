use uuid::Uuid;
use yew::prelude::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the
/// close button emits `on_close`; the parent decides whether to unmount.
pub struct Modal {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

impl Component for Modal {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("modal-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let title_id = format!("{}-title", self.id);
        let close = props.on_close.reform(|_: MouseEvent| ());

        html! {
            <div class="modal" id={self.id.clone()} role="dialog" aria-modal="true" aria-labelledby={title_id.clone()}>
                <div class="modal-backdrop" onclick={close.clone()}></div>
                <div class="modal-box">
                    <h2 id={title_id}>{ props.title.clone() }</h2>
                    <button class="modal-close" aria-label="Close" onclick={close}>{ "×" }</button>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
