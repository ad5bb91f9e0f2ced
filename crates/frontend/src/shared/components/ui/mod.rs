//! Bare form controls. Labels and helper text come from [`FormGroup`];
//! the controls only render the element and report input.

pub mod checkbox;
pub mod input;
pub mod radio;
pub mod select;
pub mod textarea;

pub use checkbox::Checkbox;
pub use input::Input;
pub use radio::RadioGroup;
pub use select::Select;
pub use textarea::Textarea;

use leptos::prelude::*;

/// Element attributes shared by every control
#[derive(Clone)]
pub struct ControlAttrs {
    pub id: String,
    pub disabled: bool,
    pub required: bool,
    pub invalid: Signal<bool>,
}

/// `base` plus its `--invalid` modifier when the control holds an error
pub fn control_class(base: &str, invalid: bool) -> String {
    if invalid {
        format!("{base} {base}--invalid")
    } else {
        base.to_string()
    }
}

/// Label + control + helper text wrapper shared by all form controls
#[component]
pub fn FormGroup(
    /// Label text, already carrying the mandatory marker
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// `for` attribute of the label
    #[prop(optional, into)]
    label_for: MaybeProp<String>,
    /// Error shown as helper text under the control
    #[prop(optional, into)]
    error: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let group_class = move || control_class("form__group", error.get().is_some());

    view! {
        <div class=group_class>
            {move || label.get().map(|l| view! {
                <label class="form__label" for=move || label_for.get().unwrap_or_default()>
                    {l}
                </label>
            })}
            {children()}
            {move || error.get().map(|e| view! {
                <div class="form__helper-text form__helper-text--error">{e}</div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_class_modifier() {
        assert_eq!(control_class("form__input", false), "form__input");
        assert_eq!(
            control_class("form__select", true),
            "form__select form__select--invalid"
        );
    }
}
