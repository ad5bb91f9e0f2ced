use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Input kind of a form field.
///
/// Tags that are not recognized survive as `Unknown` so that a newer
/// screen definition never breaks an older renderer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Text,
    Email,
    Number,
    Textarea,
    Select,
    MultiSelect,
    Radio,
    Autocomplete,
    Date,
    DateTime,
    Unknown(String),
}

impl FieldKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "text" => FieldKind::Text,
            "email" => FieldKind::Email,
            "number" => FieldKind::Number,
            "textarea" => FieldKind::Textarea,
            "select" => FieldKind::Select,
            "multiselect" => FieldKind::MultiSelect,
            "radio" => FieldKind::Radio,
            "autocomplete" => FieldKind::Autocomplete,
            "date" => FieldKind::Date,
            "datetime" => FieldKind::DateTime,
            _ => FieldKind::Unknown(tag.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Number => "number",
            FieldKind::Textarea => "textarea",
            FieldKind::Select => "select",
            FieldKind::MultiSelect => "multiselect",
            FieldKind::Radio => "radio",
            FieldKind::Autocomplete => "autocomplete",
            FieldKind::Date => "date",
            FieldKind::DateTime => "datetime",
            FieldKind::Unknown(tag) => tag,
        }
    }

    /// Kinds whose `options` list is meaningful
    pub fn uses_options(&self) -> bool {
        matches!(
            self,
            FieldKind::Select | FieldKind::MultiSelect | FieldKind::Radio | FieldKind::Autocomplete
        )
    }
}

impl From<String> for FieldKind {
    fn from(tag: String) -> Self {
        FieldKind::from_tag(&tag)
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.tag().to_string()
    }
}

/// Selectable option of select/multiselect/radio/autocomplete fields
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Build options from `(value, label)` constant tables
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Vec<FieldOption> {
        pairs.iter().map(|(v, l)| FieldOption::new(*v, *l)).collect()
    }
}

/// How a field is wired to its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BoundMode {
    /// Explicit value + on_change supplied by the caller
    #[default]
    Standalone,
    /// Named field inside a `FormContext`
    FormContext,
}

/// Declarative description of one form field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub kind: FieldKind,
    pub name: String,
    pub label: String,
    pub options: Vec<FieldOption>,
    pub mandatory: bool,
    pub disabled: bool,
    pub bound_mode: BoundMode,
    pub placeholder: Option<String>,
    /// Radio layout
    pub inline: bool,
    /// Upper bound for date/datetime controls
    pub max_date: Option<NaiveDate>,
}

impl FieldDescriptor {
    pub fn new(kind: FieldKind, name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            label: label.into(),
            options: Vec::new(),
            mandatory: false,
            disabled: false,
            bound_mode: BoundMode::Standalone,
            placeholder: None,
            inline: false,
            max_date: None,
        }
    }

    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn inline(mut self) -> Self {
        self.inline = true;
        self
    }

    pub fn max_date(mut self, max: NaiveDate) -> Self {
        self.max_date = Some(max);
        self
    }

    pub fn bound(mut self, mode: BoundMode) -> Self {
        self.bound_mode = mode;
        self
    }

    /// Option-based kinds without options are rendered anyway, but the
    /// screen definition is almost certainly wrong.
    pub fn missing_options(&self) -> bool {
        self.kind.uses_options() && self.kind != FieldKind::Autocomplete && self.options.is_empty()
    }

    /// Label with the mandatory marker appended
    pub fn display_label(&self) -> String {
        if self.mandatory {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }

    pub fn label_for(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_round_trip_through_serde() {
        let kind: FieldKind = serde_json::from_str("\"multiselect\"").unwrap();
        assert_eq!(kind, FieldKind::MultiSelect);
        assert_eq!(serde_json::to_string(&FieldKind::DateTime).unwrap(), "\"datetime\"");
    }

    #[test]
    fn test_unrecognized_tag_is_preserved() {
        let kind: FieldKind = serde_json::from_str("\"colour\"").unwrap();
        assert_eq!(kind, FieldKind::Unknown("colour".into()));
        assert_eq!(kind.tag(), "colour");
    }

    #[test]
    fn test_options_only_checked_for_option_kinds() {
        let text = FieldDescriptor::new(FieldKind::Text, "name", "Name");
        assert!(!text.missing_options());

        let select = FieldDescriptor::new(FieldKind::Select, "mode", "Mode");
        assert!(select.missing_options());

        let filled = select.options(vec![FieldOption::new("A", "Alpha")]);
        assert!(!filled.missing_options());
    }

    #[test]
    fn test_display_label_marks_mandatory() {
        let d = FieldDescriptor::new(FieldKind::Text, "code", "Code").mandatory();
        assert_eq!(d.display_label(), "Code *");
    }
}
