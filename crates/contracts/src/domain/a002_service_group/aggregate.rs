use crate::domain::common::{ActiveFlag, EntityRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Group of billable hospital services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServiceGroup {
    #[serde(rename = "sGrpID")]
    pub s_grp_id: i64,

    #[serde(rename = "sGrpCode")]
    pub s_grp_code: String,

    #[serde(rename = "sGrpName")]
    pub s_grp_name: String,

    #[serde(default)]
    pub category: String,

    /// Department codes the group is offered in
    #[serde(default)]
    pub departments: Vec<String>,

    #[serde(rename = "contactEmail", default)]
    pub contact_email: Option<String>,

    #[serde(rename = "effectiveFrom", default)]
    pub effective_from: Option<NaiveDate>,

    #[serde(rename = "rActiveYN", default)]
    pub r_active_yn: ActiveFlag,

    #[serde(rename = "rNotes", default)]
    pub r_notes: Option<String>,
}

pub const SERVICE_CATEGORIES: &[(&str, &str)] = &[
    ("LAB", "Laboratory"),
    ("RAD", "Radiology"),
    ("CON", "Consultation"),
    ("PRC", "Procedure"),
];

pub const DEPARTMENTS: &[(&str, &str)] = &[
    ("OPD", "Outpatient"),
    ("IPD", "Inpatient"),
    ("ER", "Emergency"),
    ("ICU", "Intensive care"),
];

impl EntityRecord for ServiceGroup {
    const IDENTITY_FIELD: &'static str = "sGrpID";
    const COLLECTION: &'static str = "service-groups";

    fn element_name() -> &'static str {
        "Service group"
    }

    fn list_name() -> &'static str {
        "Service groups"
    }

    fn identity(&self) -> i64 {
        self.s_grp_id
    }

    fn set_identity(&mut self, id: i64) {
        self.s_grp_id = id;
    }

    fn code(&self) -> &str {
        &self.s_grp_code
    }

    fn active_flag(&self) -> ActiveFlag {
        self.r_active_yn
    }

    fn set_active_flag(&mut self, flag: ActiveFlag) {
        self.r_active_yn = flag;
    }

    fn validate(&self) -> Result<(), String> {
        if self.s_grp_code.trim().is_empty() {
            return Err("Service group code must not be empty".into());
        }
        if self.s_grp_name.trim().is_empty() {
            return Err("Service group name must not be empty".into());
        }
        Ok(())
    }
}
