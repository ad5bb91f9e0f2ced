use crate::domain::master_data::screen::{
    date_of, label_in, list_of, optional_text_of, text_of, FormValues,
};
use crate::domain::master_data::{master_data_page, MasterDataScreen};
use crate::shared::forms::control::multiselect_summary;
use crate::shared::forms::{BoundMode, FieldDescriptor, FieldKind, FieldOption, FieldValue};
use contracts::domain::a002_service_group::aggregate::{
    ServiceGroup, DEPARTMENTS, SERVICE_CATEGORIES,
};
use leptos::prelude::*;

pub struct ServiceGroupScreen;

impl MasterDataScreen for ServiceGroupScreen {
    type Record = ServiceGroup;

    const CODE_PREFIX: &'static str = "SG";
    const CODE_FIELD: &'static str = "sGrpCode";

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new(FieldKind::Text, "sGrpCode", "Code").mandatory(),
            FieldDescriptor::new(FieldKind::Text, "sGrpName", "Name").mandatory(),
            FieldDescriptor::new(FieldKind::Select, "category", "Category")
                .options(FieldOption::from_pairs(SERVICE_CATEGORIES))
                .mandatory(),
            FieldDescriptor::new(FieldKind::MultiSelect, "departments", "Departments")
                .options(FieldOption::from_pairs(DEPARTMENTS))
                .mandatory(),
            FieldDescriptor::new(FieldKind::Email, "contactEmail", "Contact email"),
            FieldDescriptor::new(FieldKind::Date, "effectiveFrom", "Effective from"),
            FieldDescriptor::new(FieldKind::Textarea, "rNotes", "Notes"),
        ]
        .into_iter()
        .map(|d| d.bound(BoundMode::FormContext))
        .collect()
    }

    fn columns() -> Vec<&'static str> {
        vec!["Code", "Name", "Category", "Departments", "Effective from"]
    }

    fn cells(record: &ServiceGroup) -> Vec<String> {
        vec![
            record.s_grp_code.clone(),
            record.s_grp_name.clone(),
            label_in(SERVICE_CATEGORIES, &record.category),
            multiselect_summary(&record.departments, &FieldOption::from_pairs(DEPARTMENTS)),
            record
                .effective_from
                .map(|d| d.format("%d.%m.%Y").to_string())
                .unwrap_or_default(),
        ]
    }

    fn to_values(record: &ServiceGroup) -> FormValues {
        FormValues::from([
            ("sGrpCode".to_string(), FieldValue::text(&record.s_grp_code)),
            ("sGrpName".to_string(), FieldValue::text(&record.s_grp_name)),
            ("category".to_string(), FieldValue::text(&record.category)),
            (
                "departments".to_string(),
                FieldValue::List(record.departments.clone()),
            ),
            (
                "contactEmail".to_string(),
                FieldValue::from_option(record.contact_email.clone()),
            ),
            (
                "effectiveFrom".to_string(),
                FieldValue::from_option(record.effective_from),
            ),
            (
                "rNotes".to_string(),
                FieldValue::from_option(record.r_notes.clone()),
            ),
        ])
    }

    fn from_values(mut base: ServiceGroup, values: &FormValues) -> ServiceGroup {
        base.s_grp_code = text_of(values, "sGrpCode").trim().to_string();
        base.s_grp_name = text_of(values, "sGrpName");
        base.category = text_of(values, "category");
        base.departments = list_of(values, "departments");
        base.contact_email = optional_text_of(values, "contactEmail");
        base.effective_from = date_of(values, "effectiveFrom");
        base.r_notes = optional_text_of(values, "rNotes");
        base
    }
}

#[component]
pub fn ServiceGroupList() -> impl IntoView {
    master_data_page::<ServiceGroupScreen>()
}
