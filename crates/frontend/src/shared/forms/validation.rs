//! Validation Rule Composer
//!
//! Merges a field's mandatory flag with caller supplied rules into one
//! ordered rule list and evaluates it into a [`FieldErrorState`].
//! Evaluation is pure: the same value always yields the same state.

use super::descriptor::{BoundMode, FieldDescriptor};
use super::value::{date_after_max_message, FieldValue};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Soft email format check applied by standalone email fields
pub static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\S+@\S+\.\S+").unwrap_or_else(|e| panic!("invalid email pattern: {e}"))
});

pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";

pub type RulePredicate = Arc<dyn Fn(&FieldValue) -> bool + Send + Sync>;

/// Predicate plus the message shown when it fails
#[derive(Clone)]
pub struct ValidationRule {
    pub message: String,
    check: RulePredicate,
}

impl ValidationRule {
    pub fn new(
        message: impl Into<String>,
        check: impl Fn(&FieldValue) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            check: Arc::new(check),
        }
    }

    /// Built-in mandatory-presence rule
    pub fn required(label: &str) -> Self {
        Self::new(required_message(label), |v| !v.is_empty())
    }

    /// Text must match `pattern`; empty values pass
    pub fn pattern(pattern: Regex, message: impl Into<String>) -> Self {
        Self::new(message, move |v| match v {
            FieldValue::Text(s) if !s.is_empty() => pattern.is_match(s),
            _ => true,
        })
    }

    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Self::new(message, move |v| v.as_input_string().chars().count() <= max)
    }

    /// Dates and datetimes must fall on or before `max`; other values pass
    pub fn max_date(max: NaiveDate) -> Self {
        Self::new(date_after_max_message(max), move |v| {
            v.as_date().map_or(true, |day| day <= max)
        })
    }

    /// Soft email rule; empty values pass so it never acts as "required"
    pub fn email() -> Self {
        Self::new(EMAIL_MESSAGE, |v| match v {
            FieldValue::Text(s) if !s.is_empty() => EMAIL_PATTERN.is_match(s),
            _ => true,
        })
    }

    pub fn is_satisfied_by(&self, value: &FieldValue) -> bool {
        (self.check)(value)
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

pub fn required_message(label: &str) -> String {
    format!("{} is required", label)
}

/// Caller supplied rules keyed by field name, in declaration order
#[derive(Clone, Debug, Default)]
pub struct ValidationRuleSet {
    rules: HashMap<String, Vec<ValidationRule>>,
}

impl ValidationRuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, field: impl Into<String>, rule: ValidationRule) -> Self {
        self.push(field, rule);
        self
    }

    pub fn push(&mut self, field: impl Into<String>, rule: ValidationRule) {
        self.rules.entry(field.into()).or_default().push(rule);
    }

    pub fn rules_for(&self, field: &str) -> &[ValidationRule] {
        self.rules.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append every rule of `other`; existing rules are kept
    pub fn merge(mut self, other: &ValidationRuleSet) -> Self {
        for (field, rules) in &other.rules {
            self.rules
                .entry(field.clone())
                .or_default()
                .extend(rules.iter().cloned());
        }
        self
    }
}

/// Derived error state of one field
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrorState {
    pub is_invalid: bool,
    pub message: String,
}

impl FieldErrorState {
    pub fn valid() -> Self {
        Self::default()
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_invalid: true,
            message: message.into(),
        }
    }
}

/// Ordered rule list for one field: mandatory rule first, then the date
/// bound, then caller rules
#[derive(Clone, Debug)]
pub struct ComposedRules {
    pub field: String,
    rules: Vec<ValidationRule>,
}

impl ComposedRules {
    pub fn compose(descriptor: &FieldDescriptor, caller: &ValidationRuleSet) -> Self {
        let mut rules = Vec::new();
        if descriptor.mandatory {
            rules.push(ValidationRule::required(&descriptor.label));
        }
        if let Some(max) = descriptor.max_date {
            rules.push(ValidationRule::max_date(max));
        }
        rules.extend(caller.rules_for(&descriptor.name).iter().cloned());
        Self {
            field: descriptor.name.clone(),
            rules,
        }
    }

    /// Layer an additional rule after the composed ones
    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First failing rule wins
    pub fn evaluate(&self, value: &FieldValue) -> FieldErrorState {
        self.rules
            .iter()
            .find(|rule| !rule.is_satisfied_by(value))
            .map(|rule| FieldErrorState::invalid(rule.message.clone()))
            .unwrap_or_default()
    }

    /// Evaluate only when the binding strategy says the error is due.
    ///
    /// Standalone fields stay quiet until blurred or until the form-wide
    /// submitted flag is raised; form-context fields validate continuously.
    pub fn evaluate_for(
        &self,
        mode: BoundMode,
        value: &FieldValue,
        touched: bool,
        submitted: bool,
    ) -> FieldErrorState {
        if should_evaluate(mode, touched, submitted) {
            self.evaluate(value)
        } else {
            FieldErrorState::valid()
        }
    }
}

pub fn should_evaluate(mode: BoundMode, touched: bool, submitted: bool) -> bool {
    match mode {
        BoundMode::FormContext => true,
        BoundMode::Standalone => touched || submitted,
    }
}
