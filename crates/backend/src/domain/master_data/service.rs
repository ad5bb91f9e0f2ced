use super::error::{MasterDataError, Result};
use super::repository::{self, Model};
use contracts::domain::common::{ActiveFlag, EntityRecord};
use sea_orm::{DatabaseConnection, TransactionTrait};

/// Rebuild a record from its row; the row id is the authoritative identity
fn decode<T: EntityRecord>(model: &Model) -> Result<T> {
    let mut record: T = serde_json::from_str(&model.payload)?;
    record.set_identity(model.id);
    Ok(record)
}

pub async fn list_all<T: EntityRecord>(db: &DatabaseConnection) -> Result<Vec<T>> {
    repository::list(db, T::COLLECTION)
        .await?
        .iter()
        .map(decode)
        .collect()
}

pub async fn get_by_id<T: EntityRecord>(db: &DatabaseConnection, id: i64) -> Result<T> {
    let model = repository::find(db, T::COLLECTION, id)
        .await?
        .ok_or(MasterDataError::NotFound {
            entity: T::element_name(),
            id,
        })?;
    decode(&model)
}

/// Create when the identity is 0, otherwise update the existing row.
///
/// Codes are unique within a collection.
pub async fn save<T: EntityRecord>(db: &DatabaseConnection, mut record: T) -> Result<T> {
    record.validate().map_err(MasterDataError::Validation)?;
    let code = record.code().trim().to_string();
    let existing_id = (!record.is_new()).then(|| record.identity());

    let txn = db.begin().await?;

    if repository::code_taken(&txn, T::COLLECTION, &code, existing_id).await? {
        return Err(MasterDataError::Validation(format!(
            "Code '{}' already exists",
            code
        )));
    }

    let is_active = record.active_flag().is_active();
    let model = match existing_id {
        None => {
            let inserted =
                repository::insert(&txn, T::COLLECTION, &code, is_active, String::new()).await?;
            record.set_identity(inserted.id);
            let payload = serde_json::to_string(&record)?;
            repository::update(&txn, inserted.id, &code, is_active, payload).await?
        }
        Some(id) => {
            if repository::find(&txn, T::COLLECTION, id).await?.is_none() {
                return Err(MasterDataError::NotFound {
                    entity: T::element_name(),
                    id,
                });
            }
            let payload = serde_json::to_string(&record)?;
            repository::update(&txn, id, &code, is_active, payload).await?
        }
    };

    txn.commit().await?;
    tracing::info!(
        "{} '{}' saved with id {}",
        T::element_name(),
        model.code,
        model.id
    );
    decode(&model)
}

/// Flip the active flag; records are never deleted
pub async fn update_active_status<T: EntityRecord>(
    db: &DatabaseConnection,
    id: i64,
    active: bool,
) -> Result<T> {
    let mut record: T = get_by_id(db, id).await?;
    record.set_active_flag(ActiveFlag::from_bool(active));
    let payload = serde_json::to_string(&record)?;
    let model = repository::update(db, id, record.code(), active, payload).await?;
    decode(&model)
}

/// `prefix` followed by the next free number, zero padded to `pad_length`
pub fn compute_next_code(prefix: &str, pad_length: usize, codes: &[String]) -> String {
    let max = codes
        .iter()
        .filter_map(|code| code.strip_prefix(prefix))
        .filter(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
        .filter_map(|rest| rest.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{}{:0>width$}", prefix, max + 1, width = pad_length)
}

pub async fn next_code<T: EntityRecord>(
    db: &DatabaseConnection,
    prefix: &str,
    pad_length: usize,
) -> Result<String> {
    let codes = repository::codes_with_prefix(db, T::COLLECTION, prefix).await?;
    Ok(compute_next_code(prefix, pad_length, &codes))
}

/// Sample rows for the `testdata` endpoint
pub trait SampleRecords: EntityRecord {
    fn samples() -> Vec<Self>;
}

/// Insert the samples whose codes are still free; returns how many were added
pub async fn insert_test_data<T: SampleRecords>(db: &DatabaseConnection) -> Result<usize> {
    let mut inserted = 0;
    for sample in T::samples() {
        if repository::code_taken(db, T::COLLECTION, sample.code(), None).await? {
            continue;
        }
        save(db, sample).await?;
        inserted += 1;
    }
    tracing::info!("Inserted {} sample {}", inserted, T::list_name().to_lowercase());
    Ok(inserted)
}
