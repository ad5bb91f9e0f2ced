use super::{control_class, ControlAttrs};
use crate::shared::forms::FieldOption;
use leptos::prelude::*;

fn radio_choice(
    group_id: &str,
    name: &str,
    option: FieldOption,
    value: Signal<String>,
    disabled: bool,
    on_pick: Callback<String>,
) -> impl IntoView {
    let input_id = format!("{}-{}", group_id, option.value);
    let this = option.value.clone();
    let picked = option.value.clone();
    let choice_class = if disabled {
        "form__radio form__radio--disabled"
    } else {
        "form__radio"
    };

    let label_for = input_id.clone();

    view! {
        <label class=choice_class for=label_for>
            <input
                id=input_id
                type="radio"
                name=name.to_string()
                value=option.value
                disabled=disabled
                prop:checked=move || value.get() == this
                on:change=move |_| on_pick.run(picked.clone())
            />
            <span class="form__radio-label">{option.label}</span>
        </label>
    }
}

/// Radio buttons in a fieldset; `disabled` applies to the fieldset and to
/// every option.
#[component]
pub fn RadioGroup(
    attrs: ControlAttrs,
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    options: Vec<FieldOption>,
    #[prop(optional)] inline: bool,
    on_pick: Callback<String>,
) -> impl IntoView {
    let ControlAttrs {
        id,
        disabled,
        invalid,
        ..
    } = attrs;
    let base = if inline {
        "form__radio-group form__radio-group--inline"
    } else {
        "form__radio-group"
    };

    let choices = options
        .into_iter()
        .map(|option| radio_choice(&id, &name, option, value, disabled, on_pick))
        .collect_view();

    view! {
        <fieldset
            id=id
            role="radiogroup"
            class=move || control_class(base, invalid.get())
            aria-invalid=move || invalid.get().to_string()
            disabled=disabled
        >
            {choices}
        </fieldset>
    }
}
