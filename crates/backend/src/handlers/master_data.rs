use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::common::EntityRecord;
use contracts::shared::{ActiveStatusRequest, ApiResponse, NextCodeQuery};

use crate::domain::master_data::{service, MasterDataError, SampleRecords};
use crate::shared::data::db::get_connection;

/// Wrap a service result in the envelope; failures are logged and reported
/// with `success: false`
fn respond<D>(operation: &str, result: Result<D, MasterDataError>) -> Json<ApiResponse<D>> {
    match result {
        Ok(data) => Json(ApiResponse::ok(data)),
        Err(e) => {
            if e.is_client_error() {
                tracing::warn!("{} rejected: {}", operation, e);
            } else {
                tracing::error!("{} failed: {}", operation, e);
            }
            Json(ApiResponse::fail(e.to_string()))
        }
    }
}

/// GET /api/<collection>
pub async fn list_all<T: EntityRecord>() -> Json<ApiResponse<Vec<T>>> {
    let result = async { service::list_all::<T>(get_connection()?).await }.await;
    respond(T::list_name(), result)
}

/// GET /api/<collection>/:id
pub async fn get_by_id<T: EntityRecord>(Path(id): Path<i64>) -> Json<ApiResponse<T>> {
    let result = async { service::get_by_id::<T>(get_connection()?, id).await }.await;
    respond(T::element_name(), result)
}

/// POST /api/<collection>
pub async fn save<T: EntityRecord>(Json(record): Json<T>) -> Json<ApiResponse<T>> {
    let result = async { service::save(get_connection()?, record).await }.await;
    respond(T::element_name(), result)
}

/// PUT /api/<collection>/:id/active
pub async fn update_active_status<T: EntityRecord>(
    Path(id): Path<i64>,
    Json(body): Json<ActiveStatusRequest>,
) -> Json<ApiResponse<()>> {
    let result = async {
        service::update_active_status::<T>(get_connection()?, id, body.active).await?;
        Ok::<(), MasterDataError>(())
    }
    .await;
    respond(T::element_name(), result)
}

/// GET /api/<collection>/next-code?prefix=&padLength=
pub async fn next_code<T: EntityRecord>(
    Query(query): Query<NextCodeQuery>,
) -> Json<ApiResponse<String>> {
    let result = async {
        service::next_code::<T>(get_connection()?, &query.prefix, query.pad_length).await
    }
    .await;
    respond(T::element_name(), result)
}

/// POST /api/<collection>/testdata
pub async fn insert_test_data<T: SampleRecords>() -> Json<ApiResponse<usize>> {
    let result = async { service::insert_test_data::<T>(get_connection()?).await }.await;
    respond(T::list_name(), result)
}

/// Any other `/api/...` path
pub async fn unknown_collection(Path(rest): Path<String>) -> Json<ApiResponse<()>> {
    respond("Routing", Err(MasterDataError::UnknownCollection(rest)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_respond_success() {
        let Json(resp) = respond("Test", Ok(5));
        assert_eq!(resp, ApiResponse::ok(5));
    }

    #[test]
    fn test_respond_failure_carries_message() {
        let Json(resp) = respond::<i32>(
            "Test",
            Err(MasterDataError::NotFound {
                entity: "Payment type",
                id: 9,
            }),
        );
        assert!(!resp.success);
        assert_eq!(
            resp.error_message.as_deref(),
            Some("Payment type with id 9 was not found")
        );
    }

    #[tokio::test]
    async fn test_unknown_collection_is_reported() {
        let Json(resp) = unknown_collection(Path("wards".to_string())).await;
        assert!(!resp.success);
        assert!(resp.message_or_default().contains("wards"));
    }
}
