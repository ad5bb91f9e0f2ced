use super::service::SampleRecords;
use chrono::NaiveDate;
use contracts::domain::a001_payment_type::aggregate::PaymentType;
use contracts::domain::a002_service_group::aggregate::ServiceGroup;
use contracts::domain::a003_medication_instruction::aggregate::MedicationInstruction;

impl SampleRecords for PaymentType {
    fn samples() -> Vec<Self> {
        [
            ("PAY001", "Cash", "CASH", "Paid at the billing counter"),
            ("PAY002", "Debit card", "CARD", ""),
            ("PAY003", "Credit card", "CARD", ""),
            ("PAY004", "Insurance", "INSR", "Requires a policy number"),
        ]
        .into_iter()
        .enumerate()
        .map(|(i, (code, name, mode, notes))| PaymentType {
            pay_code: code.into(),
            pay_name: name.into(),
            pay_mode: mode.into(),
            sort_order: (i as i32 + 1) * 10,
            r_notes: (!notes.is_empty()).then(|| notes.to_string()),
            ..Default::default()
        })
        .collect()
    }
}

impl SampleRecords for ServiceGroup {
    fn samples() -> Vec<Self> {
        let effective_from = NaiveDate::from_ymd_opt(2024, 1, 1);
        vec![
            ServiceGroup {
                s_grp_code: "SG001".into(),
                s_grp_name: "Blood tests".into(),
                category: "LAB".into(),
                departments: vec!["OPD".into(), "IPD".into()],
                contact_email: Some("lab@hospital.local".into()),
                effective_from,
                ..Default::default()
            },
            ServiceGroup {
                s_grp_code: "SG002".into(),
                s_grp_name: "X-ray".into(),
                category: "RAD".into(),
                departments: vec!["OPD".into(), "ER".into()],
                effective_from,
                ..Default::default()
            },
            ServiceGroup {
                s_grp_code: "SG003".into(),
                s_grp_name: "Specialist consultation".into(),
                category: "CON".into(),
                departments: vec!["OPD".into()],
                ..Default::default()
            },
        ]
    }
}

impl SampleRecords for MedicationInstruction {
    fn samples() -> Vec<Self> {
        [
            ("MI0001", "After food"),
            ("MI0002", "Before food"),
            ("MI0003", "At bedtime"),
            ("MI0004", "Twice a day"),
        ]
        .into_iter()
        .map(|(code, description)| MedicationInstruction {
            mins_code: code.into(),
            mins_description: description.into(),
            ..Default::default()
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityRecord;

    fn assert_samples_valid<T: SampleRecords>() {
        let samples = T::samples();
        assert!(!samples.is_empty());
        for sample in &samples {
            assert!(sample.is_new());
            assert!(sample.validate().is_ok(), "{:?}", sample);
        }
    }

    #[test]
    fn test_samples_are_valid_new_records() {
        assert_samples_valid::<PaymentType>();
        assert_samples_valid::<ServiceGroup>();
        assert_samples_valid::<MedicationInstruction>();
    }
}
