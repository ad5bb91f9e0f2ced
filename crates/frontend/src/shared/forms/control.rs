//! Kind dispatch of the Dynamic Field Renderer.
//!
//! [`ControlSpec::resolve`] is the single table mapping a [`FieldKind`] to
//! the concrete control; both binding strategies render through it.

use super::descriptor::{FieldDescriptor, FieldKind, FieldOption};
use super::value::DATE_FORMAT;

/// Concrete control chosen for a field
#[derive(Debug, Clone, PartialEq)]
pub enum ControlSpec {
    /// `<input>` with the given `type`
    Input { input_type: &'static str },
    Textarea { rows: u32 },
    Select {
        placeholder_value: String,
        placeholder_label: String,
        options: Vec<FieldOption>,
    },
    /// Checkbox list; the selection summary is derived from the live value
    MultiSelect { options: Vec<FieldOption> },
    Radio {
        options: Vec<FieldOption>,
        inline: bool,
    },
    Autocomplete { fallback: Vec<FieldOption> },
    Date {
        with_time: bool,
        /// `max` attribute in the control's wire format
        max: Option<String>,
    },
}

impl ControlSpec {
    pub fn resolve(descriptor: &FieldDescriptor) -> Self {
        match &descriptor.kind {
            FieldKind::Text => ControlSpec::Input { input_type: "text" },
            FieldKind::Email => ControlSpec::Input { input_type: "email" },
            FieldKind::Number => ControlSpec::Input { input_type: "number" },
            FieldKind::Textarea => ControlSpec::Textarea { rows: 3 },
            FieldKind::Select => ControlSpec::Select {
                placeholder_value: placeholder_value(&descriptor.options),
                placeholder_label: descriptor
                    .placeholder
                    .clone()
                    .unwrap_or_else(|| format!("Select {}", descriptor.label.to_lowercase())),
                options: descriptor.options.clone(),
            },
            FieldKind::MultiSelect => ControlSpec::MultiSelect {
                options: descriptor.options.clone(),
            },
            FieldKind::Radio => ControlSpec::Radio {
                options: descriptor.options.clone(),
                inline: descriptor.inline,
            },
            FieldKind::Autocomplete => ControlSpec::Autocomplete {
                fallback: descriptor.options.clone(),
            },
            FieldKind::Date => ControlSpec::Date {
                with_time: false,
                max: descriptor
                    .max_date
                    .map(|d| d.format(DATE_FORMAT).to_string()),
            },
            FieldKind::DateTime => ControlSpec::Date {
                with_time: true,
                max: descriptor
                    .max_date
                    .map(|d| format!("{}T23:59", d.format(DATE_FORMAT))),
            },
            FieldKind::Unknown(tag) => {
                log::warn!(
                    "field '{}' has unknown kind '{}', rendering as text",
                    descriptor.name,
                    tag
                );
                ControlSpec::Input { input_type: "text" }
            }
        }
    }
}

/// Value of the disabled "nothing selected" option.
///
/// Guaranteed not to collide with any real option value, so an unset
/// select is never mistaken for its first option.
pub fn placeholder_value(options: &[FieldOption]) -> String {
    let mut candidate = String::new();
    while options.iter().any(|o| o.value == candidate) {
        candidate.insert_str(0, "__");
    }
    candidate
}

/// Labels of the selected values joined with `", "`.
///
/// Values without a matching option are shown raw.
pub fn multiselect_summary(selected: &[String], options: &[FieldOption]) -> String {
    selected
        .iter()
        .map(|value| {
            options
                .iter()
                .find(|o| &o.value == value)
                .map(|o| o.label.clone())
                .unwrap_or_else(|| value.clone())
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Toggle `value` in a multiselect selection, keeping selection order
pub fn toggle_selection(selected: &[String], value: &str) -> Vec<String> {
    if selected.iter().any(|v| v == value) {
        selected.iter().filter(|v| *v != value).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(value.to_string());
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn options() -> Vec<FieldOption> {
        vec![FieldOption::new("x", "LabelForX"), FieldOption::new("z", "LabelForZ")]
    }

    #[test]
    fn test_multiselect_summary_tolerates_foreign_values() {
        let selected = vec!["x".to_string(), "y".to_string()];
        assert_eq!(multiselect_summary(&selected, &options()), "LabelForX, y");
    }

    #[test]
    fn test_multiselect_summary_follows_selection_order() {
        let selected = vec!["z".to_string(), "x".to_string()];
        assert_eq!(multiselect_summary(&selected, &options()), "LabelForZ, LabelForX");

        let d = FieldDescriptor::new(FieldKind::MultiSelect, "departments", "Departments")
            .options(options());
        assert_eq!(
            ControlSpec::resolve(&d),
            ControlSpec::MultiSelect { options: options() }
        );
    }

    #[test]
    fn test_placeholder_never_collides() {
        assert_eq!(placeholder_value(&options()), "");
        let with_empty = vec![FieldOption::new("", "None"), FieldOption::new("__", "Odd")];
        let value = placeholder_value(&with_empty);
        assert!(with_empty.iter().all(|o| o.value != value));
    }

    #[test]
    fn test_unknown_kind_falls_back_to_text() {
        let d = FieldDescriptor::new(FieldKind::from_tag("signature"), "sig", "Signature");
        assert_eq!(
            ControlSpec::resolve(&d),
            ControlSpec::Input { input_type: "text" }
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let kinds = [
            FieldKind::Text,
            FieldKind::Email,
            FieldKind::Number,
            FieldKind::Textarea,
            FieldKind::Select,
            FieldKind::MultiSelect,
            FieldKind::Radio,
            FieldKind::Date,
            FieldKind::DateTime,
        ];
        for kind in kinds {
            let d = FieldDescriptor::new(kind, "f", "Field").options(options());
            assert_eq!(ControlSpec::resolve(&d), ControlSpec::resolve(&d));
        }
    }

    #[test]
    fn test_date_max_formats() {
        let max = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        let date = FieldDescriptor::new(FieldKind::Date, "d", "D").max_date(max);
        let datetime = FieldDescriptor::new(FieldKind::DateTime, "d", "D").max_date(max);
        assert_eq!(
            ControlSpec::resolve(&date),
            ControlSpec::Date { with_time: false, max: Some("2025-06-30".into()) }
        );
        assert_eq!(
            ControlSpec::resolve(&datetime),
            ControlSpec::Date { with_time: true, max: Some("2025-06-30T23:59".into()) }
        );
    }

    #[test]
    fn test_toggle_selection() {
        let selected = vec!["a".to_string()];
        assert_eq!(toggle_selection(&selected, "b"), vec!["a", "b"]);
        assert_eq!(toggle_selection(&selected, "a"), Vec::<String>::new());
    }
}
