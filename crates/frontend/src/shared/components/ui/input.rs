use super::{control_class, ControlAttrs};
use leptos::prelude::*;

/// Single-line `<input>` for text, email and number fields
#[component]
pub fn Input(
    attrs: ControlAttrs,
    input_type: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] placeholder: String,
    on_input: Callback<String>,
    on_blur: Callback<()>,
) -> impl IntoView {
    let ControlAttrs {
        id,
        disabled,
        required,
        invalid,
    } = attrs;

    view! {
        <input
            id=id
            type=input_type
            class=move || control_class("form__input", invalid.get())
            aria-invalid=move || invalid.get().to_string()
            placeholder=placeholder
            disabled=disabled
            required=required
            prop:value=move || value.get()
            on:input=move |ev| on_input.run(event_target_value(&ev))
            on:blur=move |_| on_blur.run(())
        />
    }
}
