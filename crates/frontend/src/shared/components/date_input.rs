use leptos::prelude::*;

/// DateInput component with native date or datetime picker.
///
/// Emits the raw control string (`yyyy-mm-dd` or `yyyy-mm-ddThh:mm`);
/// an empty string means the user cleared the value.
#[component]
pub fn DateInput(
    /// The value in the control's wire format
    #[prop(into)]
    value: Signal<String>,
    /// Callback when the value changes
    on_change: Callback<String>,
    /// Render `datetime-local` instead of `date`
    #[prop(optional)]
    with_time: bool,
    /// Upper bound in the control's wire format
    #[prop(optional, into)]
    max: MaybeProp<String>,
    #[prop(optional)]
    disabled: bool,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    #[prop(optional)]
    on_blur: Option<Callback<()>>,
) -> impl IntoView {
    let input_type = if with_time { "datetime-local" } else { "date" };

    view! {
        <input
            id=move || id.get().unwrap_or_default()
            type=input_type
            class="form__input form__input--date"
            prop:value=value
            max=move || max.get()
            disabled=disabled
            on:change=move |ev| {
                on_change.run(event_target_value(&ev));
            }
            on:blur=move |_| {
                if let Some(handler) = on_blur {
                    handler.run(());
                }
            }
        />
    }
}
