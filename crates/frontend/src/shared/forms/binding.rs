//! Binding strategies of the Dynamic Field Renderer.
//!
//! Both strategies are reduced to one [`BoundField`] (value, error,
//! on_change, on_blur) so the per-kind rendering code exists once.

use super::descriptor::{BoundMode, FieldDescriptor, FieldKind};
use super::validation::{ComposedRules, FieldErrorState, ValidationRule, ValidationRuleSet};
use super::value::FieldValue;
use leptos::prelude::*;
use std::collections::HashMap;

/// Form-wide value/error registry for form-context bound fields.
///
/// Passed explicitly to every field that binds to it.
#[derive(Clone, Copy)]
pub struct FormContext {
    values: RwSignal<HashMap<String, FieldValue>>,
    errors: RwSignal<HashMap<String, FieldErrorState>>,
    /// Raw control input that could not become a value, keyed by field
    input_errors: RwSignal<HashMap<String, String>>,
    rules: StoredValue<HashMap<String, ComposedRules>>,
    submitted: RwSignal<bool>,
}

impl FormContext {
    pub fn new(initial: HashMap<String, FieldValue>) -> Self {
        Self {
            values: RwSignal::new(initial),
            errors: RwSignal::new(HashMap::new()),
            input_errors: RwSignal::new(HashMap::new()),
            rules: StoredValue::new(HashMap::new()),
            submitted: RwSignal::new(false),
        }
    }

    /// Control registration: compose and remember the field's rules.
    ///
    /// Re-registering a field replaces its composed rules.
    pub fn register(&self, descriptor: &FieldDescriptor, caller: &ValidationRuleSet) {
        let composed = ComposedRules::compose(descriptor, caller);
        self.rules.update_value(|rules| {
            rules.insert(descriptor.name.clone(), composed);
        });
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.rules.with_value(|rules| rules.contains_key(name))
    }

    pub fn value(&self, name: &str) -> FieldValue {
        self.values
            .with_untracked(|values| values.get(name).cloned().unwrap_or_default())
    }

    pub fn value_signal(&self, name: &str) -> Signal<FieldValue> {
        let values = self.values;
        let name = name.to_string();
        Signal::derive(move || values.with(|v| v.get(&name).cloned().unwrap_or_default()))
    }

    pub fn error(&self, name: &str) -> FieldErrorState {
        self.errors
            .with_untracked(|errors| errors.get(name).cloned().unwrap_or_default())
    }

    pub fn error_signal(&self, name: &str) -> Signal<FieldErrorState> {
        let errors = self.errors;
        let name = name.to_string();
        Signal::derive(move || errors.with(|e| e.get(&name).cloned().unwrap_or_default()))
    }

    pub fn submitted(&self) -> Signal<bool> {
        self.submitted.into()
    }

    /// Store a value and synchronously recompute the field's error.
    ///
    /// A stored value supersedes any rejected input for the field.
    pub fn set_value(&self, name: &str, value: FieldValue) {
        self.input_errors.update(|pending| {
            pending.remove(name);
        });
        let state = self
            .rules
            .with_value(|rules| rules.get(name).map(|r| r.evaluate(&value)));
        self.values.update(|values| {
            values.insert(name.to_string(), value);
        });
        if let Some(state) = state {
            self.errors.update(|errors| {
                errors.insert(name.to_string(), state);
            });
        }
    }

    /// Record (or clear) control input the field could not accept.
    ///
    /// The stored value is left alone; while the message is present the
    /// field is invalid and [`FormContext::validate_all`] fails.
    pub fn set_input_error(&self, name: &str, message: Option<String>) {
        let state = match &message {
            Some(message) => Some(FieldErrorState::invalid(message.clone())),
            None => {
                let value = self.value(name);
                self.rules
                    .with_value(|rules| rules.get(name).map(|r| r.evaluate(&value)))
            }
        };
        self.input_errors.update(|pending| match message {
            Some(message) => {
                pending.insert(name.to_string(), message);
            }
            None => {
                pending.remove(name);
            }
        });
        if let Some(state) = state {
            self.errors.update(|errors| {
                errors.insert(name.to_string(), state);
            });
        }
    }

    pub fn input_error(&self, name: &str) -> Option<String> {
        self.input_errors
            .with_untracked(|pending| pending.get(name).cloned())
    }

    /// Submit attempt: evaluate every registered field.
    ///
    /// Rejected control input counts as invalid regardless of the stored
    /// value. Returns `true` when no field is invalid.
    pub fn validate_all(&self) -> bool {
        self.submitted.set(true);
        let values = self.values.get_untracked();
        let mut results: HashMap<String, FieldErrorState> = self.rules.with_value(|rules| {
            rules
                .iter()
                .map(|(name, composed)| {
                    let value = values.get(name).cloned().unwrap_or_default();
                    (name.clone(), composed.evaluate(&value))
                })
                .collect()
        });
        self.input_errors.with_untracked(|pending| {
            for (name, message) in pending {
                results.insert(name.clone(), FieldErrorState::invalid(message.clone()));
            }
        });
        let all_valid = results.values().all(|state| !state.is_invalid);
        self.errors.set(results);
        all_valid
    }

    /// Replace all values and drop errors and the submitted flag
    pub fn reset(&self, values: HashMap<String, FieldValue>) {
        self.values.set(values);
        self.errors.set(HashMap::new());
        self.input_errors.set(HashMap::new());
        self.submitted.set(false);
    }

    pub fn snapshot(&self) -> HashMap<String, FieldValue> {
        self.values.get_untracked()
    }
}

/// How a rendered field obtains and reports its value
#[derive(Clone)]
pub enum FieldBinding {
    /// Explicit value + change callback owned by the caller.
    ///
    /// `submitted` is the form-wide flag that releases error display
    /// for fields the user never blurred.
    Standalone {
        value: Signal<FieldValue>,
        on_change: Callback<FieldValue>,
        submitted: Signal<bool>,
    },
    /// Named field inside a [`FormContext`]
    FormContext { form: FormContext, name: String },
}

impl FieldBinding {
    pub fn mode(&self) -> BoundMode {
        match self {
            FieldBinding::Standalone { .. } => BoundMode::Standalone,
            FieldBinding::FormContext { .. } => BoundMode::FormContext,
        }
    }
}

/// Value/error/change plumbing shared by every control kind
#[derive(Clone, Copy)]
pub struct BoundField {
    pub value: Signal<FieldValue>,
    pub error: Signal<FieldErrorState>,
    pub on_change: Callback<FieldValue>,
    pub on_blur: Callback<()>,
    /// Raw input the control could not turn into a value; `None` clears it
    pub on_input_error: Callback<Option<String>>,
}

impl BoundField {
    pub fn bind(
        descriptor: &FieldDescriptor,
        binding: FieldBinding,
        rules: &ValidationRuleSet,
    ) -> Self {
        if binding.mode() != descriptor.bound_mode {
            log::warn!(
                "field '{}' declared {:?} but was bound as {:?}",
                descriptor.name,
                descriptor.bound_mode,
                binding.mode()
            );
        }

        match binding {
            FieldBinding::Standalone {
                value,
                on_change,
                submitted,
            } => {
                let mut composed = ComposedRules::compose(descriptor, rules);
                // form-context fields defer entirely to the composer
                if descriptor.kind == FieldKind::Email {
                    composed = composed.with_rule(ValidationRule::email());
                }
                let touched = RwSignal::new(false);
                let input_error = RwSignal::new(None::<String>);
                let error = Signal::derive(move || match input_error.get() {
                    Some(message) => FieldErrorState::invalid(message),
                    None => composed.evaluate_for(
                        BoundMode::Standalone,
                        &value.get(),
                        touched.get(),
                        submitted.get(),
                    ),
                });
                BoundField {
                    value,
                    error,
                    on_change: Callback::new(move |v: FieldValue| {
                        input_error.set(None);
                        on_change.run(v);
                    }),
                    on_blur: Callback::new(move |_| touched.set(true)),
                    on_input_error: Callback::new(move |message: Option<String>| input_error.set(message)),
                }
            }
            FieldBinding::FormContext { form, name } => {
                form.register(descriptor, rules);
                let field = name.clone();
                let rejected = name.clone();
                BoundField {
                    value: form.value_signal(&name),
                    error: form.error_signal(&name),
                    on_change: Callback::new(move |v: FieldValue| form.set_value(&field, v)),
                    on_blur: Callback::new(|_| {}),
                    on_input_error: Callback::new(move |message: Option<String>| {
                        form.set_input_error(&rejected, message)
                    }),
                }
            }
        }
    }

    /// Error message when the field is currently invalid
    pub fn error_message(&self) -> Signal<Option<String>> {
        let error = self.error;
        Signal::derive(move || {
            let state = error.get();
            state.is_invalid.then_some(state.message)
        })
    }
}
