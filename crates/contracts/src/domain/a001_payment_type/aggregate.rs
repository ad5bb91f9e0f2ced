use crate::domain::common::{ActiveFlag, EntityRecord};
use serde::{Deserialize, Serialize};

/// Payment type accepted at billing counters (cash, card, insurance, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PaymentType {
    #[serde(rename = "payID")]
    pub pay_id: i64,

    #[serde(rename = "payCode")]
    pub pay_code: String,

    #[serde(rename = "payName")]
    pub pay_name: String,

    /// Settlement mode, one of [`PAYMENT_MODES`]
    #[serde(rename = "payMode", default)]
    pub pay_mode: String,

    #[serde(rename = "sortOrder", default)]
    pub sort_order: i32,

    #[serde(rename = "rActiveYN", default)]
    pub r_active_yn: ActiveFlag,

    #[serde(rename = "rNotes", default)]
    pub r_notes: Option<String>,
}

/// (value, label) pairs for the settlement mode
pub const PAYMENT_MODES: &[(&str, &str)] = &[
    ("CASH", "Cash"),
    ("CARD", "Card"),
    ("INSR", "Insurance"),
];

impl EntityRecord for PaymentType {
    const IDENTITY_FIELD: &'static str = "payID";
    const COLLECTION: &'static str = "payment-types";

    fn element_name() -> &'static str {
        "Payment type"
    }

    fn list_name() -> &'static str {
        "Payment types"
    }

    fn identity(&self) -> i64 {
        self.pay_id
    }

    fn set_identity(&mut self, id: i64) {
        self.pay_id = id;
    }

    fn code(&self) -> &str {
        &self.pay_code
    }

    fn active_flag(&self) -> ActiveFlag {
        self.r_active_yn
    }

    fn set_active_flag(&mut self, flag: ActiveFlag) {
        self.r_active_yn = flag;
    }

    fn validate(&self) -> Result<(), String> {
        if self.pay_code.trim().is_empty() {
            return Err("Payment code must not be empty".into());
        }
        if self.pay_name.trim().is_empty() {
            return Err("Payment name must not be empty".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let json = r#"{"payID":7,"payCode":"PAY007","payName":"Card","rActiveYN":"N"}"#;
        let record: PaymentType = serde_json::from_str(json).unwrap();
        assert_eq!(record.identity(), 7);
        assert_eq!(record.active_flag(), ActiveFlag::No);
        assert!(record.r_notes.is_none());

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back[PaymentType::IDENTITY_FIELD], 7);
    }

    #[test]
    fn test_new_record_has_zero_identity() {
        assert!(PaymentType::default().is_new());
    }
}
