use super::ActiveFlag;
use serde::{de::DeserializeOwned, Serialize};

/// Contract every master-data record satisfies.
///
/// The identity field is declared explicitly per type rather than guessed
/// from field names: `IDENTITY_FIELD` is its wire name (`payID`, `sGrpID`, ...)
/// and `identity()` reads it. An identity of `0` marks an unsaved record.
pub trait EntityRecord:
    Clone + PartialEq + std::fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Wire name of the numeric identity field
    const IDENTITY_FIELD: &'static str;

    /// Collection key used in API paths and storage (`payment-types`)
    const COLLECTION: &'static str;

    /// Human readable name of a single record
    fn element_name() -> &'static str;

    /// Human readable name of the list
    fn list_name() -> &'static str;

    fn identity(&self) -> i64;

    fn set_identity(&mut self, id: i64);

    /// Business code shown to users (`PAY001`)
    fn code(&self) -> &str;

    fn active_flag(&self) -> ActiveFlag;

    fn set_active_flag(&mut self, flag: ActiveFlag);

    fn is_new(&self) -> bool {
        self.identity() == 0
    }

    /// Record-level validation run by the service before writes
    fn validate(&self) -> Result<(), String> {
        if self.code().trim().is_empty() {
            return Err("Code must not be empty".into());
        }
        Ok(())
    }
}
