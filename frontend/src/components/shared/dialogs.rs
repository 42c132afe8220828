use yew::prelude::*;

use crate::helpers::input_value;
use crate::modal::Modal;

/// Labelled text input. `on_input` receives `(field, value)`; `required`
/// mirrors the draft's own blank-field check in the browser.
pub fn text_field(
    label: &str,
    field: &'static str,
    value: &str,
    required: bool,
    on_input: &Callback<(&'static str, String)>,
) -> Html {
    let on_input = on_input.reform(move |e: InputEvent| (field, input_value(&e)));
    html! {
        <label class="field">
            <span>{ label.to_string() }</span>
            <input type="text" name={field} value={value.to_string()} {required} oninput={on_input} />
        </label>
    }
}

/// Labelled numeric input. The raw text is forwarded; coercion happens in
/// the draft.
pub fn number_field(label: &str, field: &'static str, value: &str, on_input: &Callback<(&'static str, String)>) -> Html {
    let on_input = on_input.reform(move |e: InputEvent| (field, input_value(&e)));
    html! {
        <label class="field">
            <span>{ label.to_string() }</span>
            <input type="number" step="any" name={field} value={value.to_string()} oninput={on_input} />
        </label>
    }
}

/// What the confirmation dialog needs to know about the pending delete.
pub struct DeleteDialog<'a> {
    pub title: &'a str,
    pub target: String,
    pub pending: bool,
    pub error: Option<&'a str>,
}

pub fn delete_dialog(dialog: DeleteDialog<'_>, on_cancel: Callback<()>, on_confirm: Callback<()>) -> Html {
    let confirm = on_confirm.reform(|_: MouseEvent| ());
    let cancel = on_cancel.reform(|_: MouseEvent| ());

    html! {
        <Modal title={dialog.title.to_string()} on_close={on_cancel}>
            <p>{ format!("Are you sure you want to delete {}? This action cannot be undone.", dialog.target) }</p>
            if let Some(error) = dialog.error {
                <p class="error">{ error }</p>
            }
            <div class="modal-actions">
                <button onclick={cancel}>{ "Cancel" }</button>
                <button class="danger" disabled={dialog.pending} onclick={confirm}>
                    { if dialog.pending { "Deleting..." } else { "Delete" } }
                </button>
            </div>
        </Modal>
    }
}
