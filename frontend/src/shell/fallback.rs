use yew::prelude::*;

/// Shown for navigation targets without a page.
pub fn fallback(target: &str) -> Html {
    html! {
        <section class="page fallback">
            <h1>{ "Unexpected Application Error" }</h1>
            <p class="error">{ format!("{} is not available.", target) }</p>
        </section>
    }
}
