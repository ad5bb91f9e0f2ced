//! Dynamic Field Renderer
//!
//! `<DynamicField descriptor binding/>` renders the control chosen by
//! [`ControlSpec::resolve`] and wires it through a [`BoundField`], so the
//! same per-kind code serves standalone and form-context bindings.

use super::autocomplete::{filter_options, SuggestionFetcher, SuggestionState};
use super::binding::{BoundField, FieldBinding};
use super::control::{multiselect_summary, toggle_selection, ControlSpec};
use super::descriptor::{FieldDescriptor, FieldOption};
use super::validation::ValidationRuleSet;
use super::value::{parse_date_input, DateInput as ParsedDate, FieldValue};
use crate::shared::components::date_input::DateInput;
use crate::shared::components::ui::{
    control_class, Checkbox, ControlAttrs, FormGroup, Input, RadioGroup, Select, Textarea,
};
use leptos::prelude::*;

#[component]
pub fn DynamicField(
    descriptor: FieldDescriptor,
    binding: FieldBinding,
    /// Caller rules, merged with the mandatory rule
    #[prop(optional)]
    rules: Option<ValidationRuleSet>,
    /// Suggestion source for autocomplete fields
    #[prop(optional)]
    fetch_suggestions: Option<SuggestionFetcher>,
    /// Fired when an autocomplete suggestion is picked
    #[prop(optional)]
    on_select: Option<Callback<FieldOption>>,
) -> impl IntoView {
    if descriptor.missing_options() {
        log::warn!(
            "field '{}' of kind '{}' has no options",
            descriptor.name,
            descriptor.kind.tag()
        );
    }
    let rules = rules.unwrap_or_default();
    let bound = BoundField::bind(&descriptor, binding, &rules);
    let spec = ControlSpec::resolve(&descriptor);
    render_control(&descriptor, spec, bound, fetch_suggestions, on_select)
}

/// Convert raw `<input>` text into a field value
pub fn text_input_value(raw: String, numeric: bool) -> FieldValue {
    if numeric {
        if raw.trim().is_empty() {
            return FieldValue::Null;
        }
        if let Ok(n) = raw.trim().parse::<f64>() {
            return FieldValue::Number(n);
        }
    }
    FieldValue::Text(raw)
}

fn render_control(
    descriptor: &FieldDescriptor,
    spec: ControlSpec,
    bound: BoundField,
    fetch_suggestions: Option<SuggestionFetcher>,
    on_select: Option<Callback<FieldOption>>,
) -> AnyView {
    let label = descriptor.display_label();
    let id = format!("field-{}", descriptor.name);
    let name = descriptor.name.clone();
    let disabled = descriptor.disabled;
    let placeholder = descriptor.placeholder.clone().unwrap_or_default();
    let error = bound.error_message();
    let text_value = Signal::derive(move || bound.value.get().as_input_string());
    let attrs = ControlAttrs {
        id: id.clone(),
        disabled,
        required: descriptor.mandatory,
        invalid: Signal::derive(move || error.get().is_some()),
    };

    match spec {
        ControlSpec::Input { input_type } => {
            let numeric = input_type == "number";
            view! {
                <FormGroup label=label label_for=id error=error>
                    <Input
                        attrs=attrs
                        input_type=input_type
                        value=text_value
                        placeholder=placeholder
                        on_input=Callback::new(move |raw: String| {
                            bound.on_change.run(text_input_value(raw, numeric))
                        })
                        on_blur=bound.on_blur
                    />
                </FormGroup>
            }
            .into_any()
        }
        ControlSpec::Textarea { rows } => view! {
            <FormGroup label=label label_for=id error=error>
                <Textarea
                    attrs=attrs
                    rows=rows
                    value=text_value
                    placeholder=placeholder
                    on_input=Callback::new(move |raw: String| bound.on_change.run(FieldValue::Text(raw)))
                    on_blur=bound.on_blur
                />
            </FormGroup>
        }
        .into_any(),
        ControlSpec::Select {
            placeholder_value,
            placeholder_label,
            options,
        } => {
            let ph = placeholder_value.clone();
            view! {
                <FormGroup label=label label_for=id error=error>
                    <Select
                        attrs=attrs
                        value=text_value
                        options=options
                        placeholder=FieldOption::new(placeholder_value, placeholder_label)
                        on_change=Callback::new(move |raw: String| {
                            // the placeholder is disabled, but a forced change to it means "unset"
                            let value = if raw == ph { FieldValue::Null } else { FieldValue::Text(raw) };
                            bound.on_change.run(value)
                        })
                        on_blur=bound.on_blur
                    />
                </FormGroup>
            }
            .into_any()
        }
        ControlSpec::MultiSelect { options } => {
            let summary_options = options.clone();
            let summary = move || multiselect_summary(&bound.value.get().as_list(), &summary_options);
            let items = options
                .into_iter()
                .map(|option| {
                    let checked_value = option.value.clone();
                    let toggled_value = option.value.clone();
                    view! {
                        <Checkbox
                            id=format!("{}-{}", id, option.value)
                            label=option.label
                            checked=Signal::derive(move || {
                                bound.value.get().as_list().contains(&checked_value)
                            })
                            disabled=disabled
                            on_toggle=Callback::new(move |_| {
                                let current = bound.value.get_untracked().as_list();
                                bound.on_change.run(FieldValue::List(toggle_selection(&current, &toggled_value)));
                                bound.on_blur.run(());
                            })
                        />
                    }
                })
                .collect_view();
            view! {
                <FormGroup label=label error=error>
                    <div class="form__multiselect">
                        <div class="form__multiselect-summary">{summary}</div>
                        <div class="form__multiselect-options">{items}</div>
                    </div>
                </FormGroup>
            }
            .into_any()
        }
        ControlSpec::Radio { options, inline } => view! {
            <FormGroup label=label error=error>
                <RadioGroup
                    attrs=attrs
                    name=name
                    value=text_value
                    options=options
                    inline=inline
                    on_pick=Callback::new(move |raw: String| {
                        bound.on_change.run(FieldValue::Text(raw));
                        bound.on_blur.run(());
                    })
                />
            </FormGroup>
        }
        .into_any(),
        ControlSpec::Autocomplete { fallback } => render_autocomplete(
            label,
            id,
            placeholder,
            disabled,
            bound,
            error,
            fallback,
            fetch_suggestions,
            on_select,
        ),
        ControlSpec::Date { with_time, max } => {
            let max_day = descriptor.max_date;
            view! {
                <FormGroup label=label label_for=id.clone() error=error>
                    <DateInput
                        id=id
                        value=text_value
                        with_time=with_time
                        max=max
                        disabled=disabled
                        on_blur=bound.on_blur
                        on_change=Callback::new(move |raw: String| {
                            match parse_date_input(&raw, with_time, max_day) {
                                ParsedDate::Unset => bound.on_change.run(FieldValue::Null),
                                ParsedDate::Valid(value) => bound.on_change.run(value),
                                ParsedDate::Invalid(message) => bound.on_input_error.run(Some(message)),
                            }
                        })
                    />
                </FormGroup>
            }
            .into_any()
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_autocomplete(
    label: String,
    id: String,
    placeholder: String,
    disabled: bool,
    bound: BoundField,
    error: Signal<Option<String>>,
    fallback: Vec<FieldOption>,
    fetch_suggestions: Option<SuggestionFetcher>,
    on_select: Option<Callback<FieldOption>>,
) -> AnyView {
    let state = SuggestionState::new(bound.value.get_untracked().as_input_string());
    // form resets and programmatic writes replace the buffer
    Effect::new(move |_| {
        let current = bound.value.get().as_input_string();
        state.sync(&current);
    });

    let on_input = move |raw: String| {
        state.input.set(raw.clone());
        bound.on_change.run(FieldValue::Text(raw.clone()));
        match fetch_suggestions.clone() {
            Some(fetcher) => {
                wasm_bindgen_futures::spawn_local(async move {
                    state.refresh(raw, &fetcher).await;
                });
            }
            None => state.refresh_from(raw, &fallback),
        }
    };

    let pick = move |option: FieldOption| {
        state.accept(&option);
        bound.on_change.run(FieldValue::Text(option.label.clone()));
        if let Some(handler) = on_select {
            handler.run(option);
        }
    };

    view! {
        <FormGroup label=label label_for=id.clone() error=error>
            <div class="form__autocomplete">
                <input
                    id=id
                    type="text"
                    class=move || control_class("form__input", error.get().is_some())
                    autocomplete="off"
                    placeholder=placeholder
                    disabled=disabled
                    prop:value=move || state.input.get()
                    on:input=move |ev| on_input(event_target_value(&ev))
                    on:blur=move |_| bound.on_blur.run(())
                />
                {move || {
                    let suggestions = state.suggestions.get();
                    (!suggestions.is_empty()).then(|| {
                        let pick = pick.clone();
                        view! {
                            <ul class="form__suggestions">
                                {suggestions
                                    .into_iter()
                                    .map(|option| {
                                        let pick = pick.clone();
                                        let text = option.label.clone();
                                        view! {
                                            <li
                                                class="form__suggestion"
                                                on:mousedown=move |_| pick(option.clone())
                                            >
                                                {text}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                    })
                }}
            </div>
        </FormGroup>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_input_conversion() {
        assert_eq!(text_input_value("".into(), true), FieldValue::Null);
        assert_eq!(text_input_value("12".into(), true), FieldValue::Number(12.0));
        assert_eq!(text_input_value("1x".into(), true), FieldValue::text("1x"));
        assert_eq!(text_input_value("".into(), false), FieldValue::text(""));
    }

    #[test]
    fn test_fallback_suggestions_without_fetcher() {
        let options = vec![FieldOption::new("1", "Twice daily")];
        assert_eq!(filter_options(&options, "twice"), options);
    }
}
