use crate::domain::common::{ActiveFlag, EntityRecord};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Standard dosing instruction printed on prescriptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MedicationInstruction {
    #[serde(rename = "minsId")]
    pub mins_id: i64,

    #[serde(rename = "minsCode")]
    pub mins_code: String,

    #[serde(rename = "minsDescription")]
    pub mins_description: String,

    /// Description in the local language
    #[serde(rename = "minsLDescription", default)]
    pub mins_l_description: Option<String>,

    #[serde(rename = "reviewedAt", default)]
    pub reviewed_at: Option<NaiveDateTime>,

    #[serde(rename = "rActiveYN", default)]
    pub r_active_yn: ActiveFlag,
}

impl EntityRecord for MedicationInstruction {
    const IDENTITY_FIELD: &'static str = "minsId";
    const COLLECTION: &'static str = "medication-instructions";

    fn element_name() -> &'static str {
        "Medication instruction"
    }

    fn list_name() -> &'static str {
        "Medication instructions"
    }

    fn identity(&self) -> i64 {
        self.mins_id
    }

    fn set_identity(&mut self, id: i64) {
        self.mins_id = id;
    }

    fn code(&self) -> &str {
        &self.mins_code
    }

    fn active_flag(&self) -> ActiveFlag {
        self.r_active_yn
    }

    fn set_active_flag(&mut self, flag: ActiveFlag) {
        self.r_active_yn = flag;
    }

    fn validate(&self) -> Result<(), String> {
        if self.mins_code.trim().is_empty() {
            return Err("Instruction code must not be empty".into());
        }
        if self.mins_description.trim().is_empty() {
            return Err("Instruction text must not be empty".into());
        }
        Ok(())
    }
}
