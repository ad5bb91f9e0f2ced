use crate::domain::master_data::screen::{
    label_in, optional_text_of, text_of, FormValues,
};
use crate::domain::master_data::{master_data_page, MasterDataScreen};
use crate::shared::forms::validation::ValidationRule;
use crate::shared::forms::{
    BoundMode, FieldDescriptor, FieldKind, FieldOption, FieldValue, ValidationRuleSet,
};
use contracts::domain::a001_payment_type::aggregate::{PaymentType, PAYMENT_MODES};
use leptos::prelude::*;

pub struct PaymentTypeScreen;

/// Sort order as stored: a whole number within `i32`.
///
/// Blank is `Some(0)`; fractions, non-numeric text and out-of-range
/// numbers are `None`.
pub fn sort_order_value(value: &FieldValue) -> Option<i32> {
    if value.is_empty() {
        return Some(0);
    }
    let n = value.as_number()?;
    let in_range = (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&n);
    (in_range && n.fract() == 0.0).then_some(n as i32)
}

impl MasterDataScreen for PaymentTypeScreen {
    type Record = PaymentType;

    const CODE_PREFIX: &'static str = "PAY";
    const CODE_FIELD: &'static str = "payCode";

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new(FieldKind::Text, "payCode", "Code").mandatory(),
            FieldDescriptor::new(FieldKind::Text, "payName", "Name").mandatory(),
            FieldDescriptor::new(FieldKind::Radio, "payMode", "Mode")
                .options(FieldOption::from_pairs(PAYMENT_MODES))
                .inline()
                .mandatory(),
            FieldDescriptor::new(FieldKind::Number, "sortOrder", "Sort order"),
            FieldDescriptor::new(FieldKind::Textarea, "rNotes", "Notes"),
        ]
        .into_iter()
        .map(|d| d.bound(BoundMode::FormContext))
        .collect()
    }

    fn rules() -> ValidationRuleSet {
        ValidationRuleSet::new()
            .rule(
                "payCode",
                ValidationRule::max_length(10, "Code must be at most 10 characters"),
            )
            .rule(
                "sortOrder",
                ValidationRule::new("Sort order must be a whole number", |v: &FieldValue| {
                    sort_order_value(v).is_some()
                }),
            )
            .rule(
                "sortOrder",
                ValidationRule::new("Sort order must not be negative", |v: &FieldValue| {
                    v.as_number().map_or(true, |n| n >= 0.0)
                }),
            )
    }

    fn columns() -> Vec<&'static str> {
        vec!["Code", "Name", "Mode", "Sort order"]
    }

    fn cells(record: &PaymentType) -> Vec<String> {
        vec![
            record.pay_code.clone(),
            record.pay_name.clone(),
            label_in(PAYMENT_MODES, &record.pay_mode),
            record.sort_order.to_string(),
        ]
    }

    fn to_values(record: &PaymentType) -> FormValues {
        FormValues::from([
            ("payCode".to_string(), FieldValue::text(&record.pay_code)),
            ("payName".to_string(), FieldValue::text(&record.pay_name)),
            ("payMode".to_string(), FieldValue::text(&record.pay_mode)),
            ("sortOrder".to_string(), FieldValue::from(record.sort_order)),
            (
                "rNotes".to_string(),
                FieldValue::from_option(record.r_notes.clone()),
            ),
        ])
    }

    fn from_values(mut base: PaymentType, values: &FormValues) -> PaymentType {
        base.pay_code = text_of(values, "payCode").trim().to_string();
        base.pay_name = text_of(values, "payName");
        base.pay_mode = text_of(values, "payMode");
        base.sort_order = values
            .get("sortOrder")
            .and_then(sort_order_value)
            .unwrap_or(0);
        base.r_notes = optional_text_of(values, "rNotes");
        base
    }
}

#[component]
pub fn PaymentTypeList() -> impl IntoView {
    master_data_page::<PaymentTypeScreen>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::FormContext;
    use contracts::domain::common::EntityRecord;

    #[test]
    fn test_values_roundtrip_keeps_identity() {
        let record = PaymentType {
            pay_id: 5,
            pay_code: "PAY005".into(),
            pay_name: "Cash".into(),
            pay_mode: "CASH".into(),
            sort_order: 2,
            ..Default::default()
        };
        let mut values = PaymentTypeScreen::to_values(&record);
        values.insert("payName".into(), FieldValue::text("Cash desk"));
        values.insert("sortOrder".into(), FieldValue::Null);

        let edited = PaymentTypeScreen::from_values(record.clone(), &values);
        assert_eq!(edited.identity(), 5);
        assert_eq!(edited.pay_name, "Cash desk");
        assert_eq!(edited.sort_order, 0);
        assert_eq!(edited.r_notes, None);
    }

    #[test]
    fn test_form_blocks_submit_until_mandatory_filled() {
        let form = FormContext::new(PaymentTypeScreen::to_values(&PaymentType::default()));
        let rules = PaymentTypeScreen::rules();
        for field in PaymentTypeScreen::fields() {
            form.register(&field, &rules);
        }

        assert!(!form.validate_all());
        assert_eq!(form.error("payName").message, "Name is required");
        assert_eq!(form.error("payMode").message, "Mode is required");

        form.set_value("payCode", FieldValue::text("PAY001"));
        form.set_value("payName", FieldValue::text("Cash"));
        form.set_value("payMode", FieldValue::text("CASH"));
        form.set_value("sortOrder", FieldValue::Number(-1.0));
        assert!(!form.validate_all());
        assert_eq!(form.error("sortOrder").message, "Sort order must not be negative");

        form.set_value("sortOrder", FieldValue::Number(1.0));
        assert!(form.validate_all());
    }

    #[test]
    fn test_sort_order_rejects_fractions_and_overflow() {
        assert_eq!(sort_order_value(&FieldValue::Null), Some(0));
        assert_eq!(sort_order_value(&FieldValue::Number(12.0)), Some(12));
        assert_eq!(sort_order_value(&FieldValue::text("7")), Some(7));
        assert_eq!(sort_order_value(&FieldValue::Number(2.5)), None);
        assert_eq!(sort_order_value(&FieldValue::Number(3e9)), None);
        assert_eq!(sort_order_value(&FieldValue::text("1x")), None);

        let form = FormContext::new(PaymentTypeScreen::to_values(&PaymentType::default()));
        let rules = PaymentTypeScreen::rules();
        for field in PaymentTypeScreen::fields() {
            form.register(&field, &rules);
        }
        form.set_value("payCode", FieldValue::text("PAY001"));
        form.set_value("payName", FieldValue::text("Cash"));
        form.set_value("payMode", FieldValue::text("CASH"));

        for bad in [FieldValue::Number(1.5), FieldValue::Number(3e9), FieldValue::text("1x")] {
            form.set_value("sortOrder", bad);
            assert!(!form.validate_all());
            assert_eq!(form.error("sortOrder").message, "Sort order must be a whole number");
        }

        form.set_value("sortOrder", FieldValue::Number(3.0));
        assert!(form.validate_all());
        let saved = PaymentTypeScreen::from_values(PaymentType::default(), &form.snapshot());
        assert_eq!(saved.sort_order, 3);
    }
}
