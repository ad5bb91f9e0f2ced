use super::{control_class, ControlAttrs};
use crate::shared::forms::FieldOption;
use leptos::prelude::*;

/// `<select>` headed by a disabled placeholder option.
///
/// The placeholder is shown whenever the value matches none of `options`,
/// so its own value must differ from every option value.
#[component]
pub fn Select(
    attrs: ControlAttrs,
    #[prop(into)] value: Signal<String>,
    options: Vec<FieldOption>,
    placeholder: FieldOption,
    on_change: Callback<String>,
    on_blur: Callback<()>,
) -> impl IntoView {
    let ControlAttrs {
        id,
        disabled,
        required,
        invalid,
    } = attrs;

    let known: Vec<String> = options.iter().map(|o| o.value.clone()).collect();
    let unmatched = move || !known.contains(&value.get());

    let choices = options
        .into_iter()
        .map(|option| {
            let this = option.value.clone();
            view! {
                <option value=option.value selected=move || value.get() == this>
                    {option.label}
                </option>
            }
        })
        .collect_view();

    view! {
        <select
            id=id
            class=move || control_class("form__select", invalid.get())
            aria-invalid=move || invalid.get().to_string()
            disabled=disabled
            required=required
            on:change=move |ev| on_change.run(event_target_value(&ev))
            on:blur=move |_| on_blur.run(())
        >
            <option value=placeholder.value disabled=true selected=unmatched>
                {placeholder.label}
            </option>
            {choices}
        </select>
    }
}
