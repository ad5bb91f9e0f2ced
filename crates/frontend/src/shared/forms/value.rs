use chrono::{NaiveDate, NaiveDateTime};

/// Wire format of `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Wire format of `<input type="datetime-local">`
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Value held by a single form field.
///
/// `Null` stands for both "null" and "never set".
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    #[default]
    Null,
    Text(String),
    Number(f64),
    List(Vec<String>),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    pub fn from_option<T: Into<FieldValue>>(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }

    /// Presence check behind the mandatory rule.
    ///
    /// Empty means `Null`, `""` or an empty list. Whitespace-only text is
    /// not empty; nothing else varies by field kind.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Number(_) | FieldValue::Date(_) | FieldValue::DateTime(_) => false,
        }
    }

    /// String shown inside a single-value input
    pub fn as_input_string(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            FieldValue::List(items) => items.join(", "),
            FieldValue::Date(d) => d.format(DATE_FORMAT).to_string(),
            FieldValue::DateTime(dt) => dt.format(DATETIME_FORMAT).to_string(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Vec<String> {
        match self {
            FieldValue::List(items) => items.clone(),
            FieldValue::Text(s) if !s.is_empty() => vec![s.clone()],
            _ => Vec::new(),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(d) => Some(*d),
            FieldValue::DateTime(dt) => Some(dt.date()),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Text as optional string, mapping empty text to `None`
    pub fn into_optional_text(self) -> Option<String> {
        match self {
            FieldValue::Text(s) if !s.is_empty() => Some(s),
            FieldValue::Null | FieldValue::Text(_) => None,
            other => Some(other.as_input_string()),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(dt: NaiveDateTime) -> Self {
        FieldValue::DateTime(dt)
    }
}

pub const INVALID_DATE_MESSAGE: &str = "Invalid date";

pub fn date_after_max_message(max: NaiveDate) -> String {
    format!("Date must not be after {}", max.format(DATE_FORMAT))
}

/// Outcome of parsing raw date-control input
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    Unset,
    Valid(FieldValue),
    /// Rejected input and the message to show for it
    Invalid(String),
}

/// Parse the raw string emitted by a date or datetime control.
///
/// An empty string is the unset value; anything unparsable, or a day later
/// than `max`, is reported as invalid rather than collapsed into unset.
pub fn parse_date_input(raw: &str, with_time: bool, max: Option<NaiveDate>) -> DateInput {
    let raw = raw.trim();
    if raw.is_empty() {
        return DateInput::Unset;
    }
    let parsed = if with_time {
        NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
            .map(FieldValue::DateTime)
    } else {
        NaiveDate::parse_from_str(raw, DATE_FORMAT).map(FieldValue::Date)
    };
    let Ok(value) = parsed else {
        return DateInput::Invalid(INVALID_DATE_MESSAGE.to_string());
    };
    match (max, value.as_date()) {
        (Some(max), Some(day)) if day > max => DateInput::Invalid(date_after_max_message(max)),
        _ => DateInput::Valid(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emptiness() {
        assert!(FieldValue::Null.is_empty());
        assert!(FieldValue::text("").is_empty());
        assert!(FieldValue::List(vec![]).is_empty());

        assert!(!FieldValue::text(" ").is_empty());
        assert!(!FieldValue::Number(0.0).is_empty());
        assert!(!FieldValue::List(vec!["x".into()]).is_empty());
        assert!(!FieldValue::Date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).is_empty());
    }

    #[test]
    fn test_number_input_string() {
        assert_eq!(FieldValue::Number(12.0).as_input_string(), "12");
        assert_eq!(FieldValue::Number(1.5).as_input_string(), "1.5");
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(parse_date_input("", false, None), DateInput::Unset);
        assert_eq!(
            parse_date_input("2024-02-29", false, None),
            DateInput::Valid(FieldValue::Date(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()))
        );
        assert_eq!(
            parse_date_input("2023-02-29", false, None),
            DateInput::Invalid(INVALID_DATE_MESSAGE.into())
        );
        assert!(matches!(
            parse_date_input("2024-02-29T08:30", true, None),
            DateInput::Valid(FieldValue::DateTime(_))
        ));
    }

    #[test]
    fn test_parse_date_input_respects_max() {
        let max = NaiveDate::from_ymd_opt(2025, 6, 30).unwrap();
        assert!(matches!(
            parse_date_input("2025-06-30", false, Some(max)),
            DateInput::Valid(_)
        ));
        assert!(matches!(
            parse_date_input("2025-06-30T23:59", true, Some(max)),
            DateInput::Valid(_)
        ));
        assert_eq!(
            parse_date_input("2025-07-01", false, Some(max)),
            DateInput::Invalid("Date must not be after 2025-06-30".into())
        );
        assert_eq!(
            parse_date_input("2025-07-01T00:00", true, Some(max)),
            DateInput::Invalid(date_after_max_message(max))
        );
    }
}
