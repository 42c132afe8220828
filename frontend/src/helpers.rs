//! Small DOM utilities shared by the pages.
//!
//! - **Input binding**: pulling the current value out of `input`/`select`
//!   events so form fields can be forwarded to a `FormModal`.
//! - **User feedback**: a self-removing toast for successful saves/deletes.
//!
//! Number formatting lives in `inventory_common::view::format`.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::{Event, InputEvent, TargetCast};

/// Value of the `<input>` that fired `event`.
pub fn input_value(event: &InputEvent) -> String {
    event.target_unchecked_into::<HtmlInputElement>().value()
}

/// Value of the `<select>` that fired `event`.
pub fn select_value(event: &Event) -> String {
    event.target_unchecked_into::<HtmlSelectElement>().value()
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The element is appended to `<body>` and removes itself after three
/// seconds. Failures to reach the DOM are ignored: the toast is a courtesy,
/// the page state has already been updated.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    let toast: HtmlElement = toast.unchecked_into();
    let style = toast.style();
    for (property, value) in [
        ("position", "fixed"),
        ("bottom", "20px"),
        ("left", "50%"),
        ("transform", "translateX(-50%)"),
        ("background", "rgba(17, 64, 59, 0.9)"),
        ("color", "#fff"),
        ("padding", "10px 20px"),
        ("border-radius", "4px"),
        ("z-index", "10000"),
    ] {
        style.set_property(property, value).ok();
    }

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            toast.remove();
        });
    }
}
