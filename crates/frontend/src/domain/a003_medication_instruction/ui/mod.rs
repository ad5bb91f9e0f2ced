use crate::domain::master_data::screen::{datetime_of, optional_text_of, text_of, FormValues};
use crate::domain::master_data::{master_data_page, MasterDataScreen};
use crate::shared::entity_controller::EntityController;
use crate::shared::forms::autocomplete::filter_options;
use crate::shared::forms::{
    BoundMode, FieldDescriptor, FieldKind, FieldOption, FieldValue, SuggestionFetcher,
    SuggestionFuture,
};
use chrono::Local;
use contracts::domain::a003_medication_instruction::aggregate::MedicationInstruction;
use leptos::prelude::*;
use std::sync::Arc;

pub struct MedicationInstructionScreen;

/// Existing descriptions offered while typing a new one
fn description_options(items: &[MedicationInstruction]) -> Vec<FieldOption> {
    let mut options: Vec<FieldOption> = Vec::new();
    for item in items {
        if !options.iter().any(|o| o.label == item.mins_description) {
            options.push(FieldOption::new(
                item.mins_code.clone(),
                item.mins_description.clone(),
            ));
        }
    }
    options
}

impl MasterDataScreen for MedicationInstructionScreen {
    type Record = MedicationInstruction;

    const CODE_PREFIX: &'static str = "MI";
    const CODE_PAD: usize = 4;
    const CODE_FIELD: &'static str = "minsCode";

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new(FieldKind::Text, "minsCode", "Code").mandatory(),
            FieldDescriptor::new(FieldKind::Autocomplete, "minsDescription", "Description")
                .placeholder("e.g. After food")
                .mandatory(),
            FieldDescriptor::new(FieldKind::Textarea, "minsLDescription", "Local description"),
            FieldDescriptor::new(FieldKind::DateTime, "reviewedAt", "Reviewed at")
                .max_date(Local::now().date_naive()),
        ]
        .into_iter()
        .map(|d| d.bound(BoundMode::FormContext))
        .collect()
    }

    fn columns() -> Vec<&'static str> {
        vec!["Code", "Description", "Local description", "Reviewed at"]
    }

    fn cells(record: &MedicationInstruction) -> Vec<String> {
        vec![
            record.mins_code.clone(),
            record.mins_description.clone(),
            record.mins_l_description.clone().unwrap_or_default(),
            record
                .reviewed_at
                .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
                .unwrap_or_default(),
        ]
    }

    fn to_values(record: &MedicationInstruction) -> FormValues {
        FormValues::from([
            ("minsCode".to_string(), FieldValue::text(&record.mins_code)),
            (
                "minsDescription".to_string(),
                FieldValue::text(&record.mins_description),
            ),
            (
                "minsLDescription".to_string(),
                FieldValue::from_option(record.mins_l_description.clone()),
            ),
            (
                "reviewedAt".to_string(),
                FieldValue::from_option(record.reviewed_at),
            ),
        ])
    }

    fn from_values(mut base: MedicationInstruction, values: &FormValues) -> MedicationInstruction {
        base.mins_code = text_of(values, "minsCode").trim().to_string();
        base.mins_description = text_of(values, "minsDescription");
        base.mins_l_description = optional_text_of(values, "minsLDescription");
        base.reviewed_at = datetime_of(values, "reviewedAt");
        base
    }

    fn suggestions(
        field: &str,
        controller: &EntityController<MedicationInstruction>,
    ) -> Option<SuggestionFetcher> {
        if field != "minsDescription" {
            return None;
        }
        let items = controller.items();
        Some(Arc::new(move |query: String| {
            let found = filter_options(&description_options(&items.get_untracked()), &query);
            Box::pin(async move { Ok(found) }) as SuggestionFuture
        }))
    }
}

#[component]
pub fn MedicationInstructionList() -> impl IntoView {
    master_data_page::<MedicationInstructionScreen>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instruction(code: &str, description: &str) -> MedicationInstruction {
        MedicationInstruction {
            mins_code: code.into(),
            mins_description: description.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_description_options_are_unique() {
        let items = vec![
            instruction("MI0001", "After food"),
            instruction("MI0002", "After food"),
            instruction("MI0003", "At bedtime"),
        ];
        let options = description_options(&items);
        assert_eq!(options.len(), 2);
        assert_eq!(filter_options(&options, "bed")[0].value, "MI0003");
    }

    #[test]
    fn test_reviewed_at_has_upper_bound() {
        let reviewed = MedicationInstructionScreen::fields()
            .into_iter()
            .find(|f| f.name == "reviewedAt")
            .and_then(|f| f.max_date);
        assert!(reviewed.is_some());
    }
}
