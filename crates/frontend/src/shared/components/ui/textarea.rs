use super::{control_class, ControlAttrs};
use leptos::prelude::*;

#[component]
pub fn Textarea(
    attrs: ControlAttrs,
    rows: u32,
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
        <textarea
            id=id
            rows=rows
            class=move || control_class("form__textarea", invalid.get())
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
