use leptos::prelude::*;

/// One tick box of a multiselect
#[component]
pub fn Checkbox(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    disabled: bool,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let check_class = if disabled {
        "form__check form__check--disabled"
    } else {
        "form__check"
    };

    let label_for = id.clone();

    view! {
        <label class=check_class for=label_for>
            <input
                id=id
                type="checkbox"
                disabled=disabled
                prop:checked=move || checked.get()
                on:change=move |_| on_toggle.run(())
            />
            <span class="form__check-label">{label}</span>
        </label>
    }
}
