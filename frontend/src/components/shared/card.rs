use inventory_common::view::SummaryCard;
use yew::prelude::*;


/// Row of labelled numbers. Cards stay visible with an empty value while
/// the aggregate is loading or after it failed.
pub fn summary_cards(cards: &[SummaryCard]) -> Html {
    html! {
        <div class="card-grid summary-cards">
            { for cards.iter().map(|card| html! {
                <div class="card summary-card">
                    <p class="card-label">{ card.label }</p>
                    <p class="card-value">{ card.display() }</p>
                </div>
            }) }
        </div>
    }
}

/// Loading indicator or error line for a fetch. Renders nothing otherwise.
pub fn status_line(loading: bool, error: Option<&str>) -> Html {
    match (loading, error) {
        (true, _) => html! { <p class="loading">{ "Loading..." }</p> },
        (false, Some(message)) => html! { <p class="error">{ message }</p> },
        (false, None) => html! {},
    }
}
