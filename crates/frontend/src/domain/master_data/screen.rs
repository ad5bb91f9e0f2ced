use crate::shared::entity_controller::EntityController;
use crate::shared::forms::{FieldDescriptor, FieldValue, SuggestionFetcher, ValidationRuleSet};
use chrono::{NaiveDate, NaiveDateTime};
use contracts::domain::common::EntityRecord;
use std::collections::HashMap;

pub type FormValues = HashMap<String, FieldValue>;

/// Per-entity description of a master-data screen.
///
/// The generic list and details pages know nothing about a record beyond
/// what this trait exposes.
pub trait MasterDataScreen: 'static {
    type Record: EntityRecord + Default;

    /// Prefix of generated codes, e.g. `PAY` for `PAY001`
    const CODE_PREFIX: &'static str;
    const CODE_PAD: usize = 3;
    /// Form field holding the record code
    const CODE_FIELD: &'static str;

    fn fields() -> Vec<FieldDescriptor>;

    fn rules() -> ValidationRuleSet {
        ValidationRuleSet::new()
    }

    /// Grid column headers, the active-flag column excluded
    fn columns() -> Vec<&'static str>;

    fn cells(record: &Self::Record) -> Vec<String>;

    fn to_values(record: &Self::Record) -> FormValues;

    /// Overlay form values on `base`, keeping identity and active flag
    fn from_values(base: Self::Record, values: &FormValues) -> Self::Record;

    /// Async suggestion source for autocomplete fields
    fn suggestions(
        _field: &str,
        _controller: &EntityController<Self::Record>,
    ) -> Option<SuggestionFetcher> {
        None
    }
}

pub fn text_of(values: &FormValues, name: &str) -> String {
    values
        .get(name)
        .map(FieldValue::as_input_string)
        .unwrap_or_default()
}

pub fn optional_text_of(values: &FormValues, name: &str) -> Option<String> {
    values
        .get(name)
        .cloned()
        .and_then(FieldValue::into_optional_text)
}

pub fn list_of(values: &FormValues, name: &str) -> Vec<String> {
    values.get(name).map(FieldValue::as_list).unwrap_or_default()
}

pub fn date_of(values: &FormValues, name: &str) -> Option<NaiveDate> {
    values.get(name).and_then(FieldValue::as_date)
}

pub fn datetime_of(values: &FormValues, name: &str) -> Option<NaiveDateTime> {
    values.get(name).and_then(FieldValue::as_datetime)
}

/// Label of `value` in a `(value, label)` table, or the value itself
pub fn label_in(table: &[(&str, &str)], value: &str) -> String {
    table
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, l)| l.to_string())
        .unwrap_or_else(|| value.to_string())
}
