//! Backend Service Adapter: the five CRUD calls every master-data screen
//! talks to, plus the HTTP implementation against the backend crate.

use crate::shared::api_utils::api_url;
use async_trait::async_trait;
use contracts::domain::common::EntityRecord;
use contracts::shared::{ActiveStatusRequest, ApiResponse};
use gloo_net::http::Request;
use std::marker::PhantomData;

/// Envelope-returning CRUD service for one entity type.
///
/// `Err` is a transport failure (request never produced an envelope);
/// `Ok` with `success: false` is a business failure.
#[async_trait(?Send)]
pub trait EntityServiceAdapter<T: EntityRecord>: Send + Sync {
    async fn get_all(&self) -> Result<ApiResponse<Vec<T>>, String>;

    async fn get_by_id(&self, id: i64) -> Result<ApiResponse<T>, String>;

    /// Create when the record's identity is 0, update otherwise
    async fn save(&self, record: &T) -> Result<ApiResponse<T>, String>;

    async fn update_active_status(&self, id: i64, active: bool)
        -> Result<ApiResponse<()>, String>;

    async fn get_next_code(
        &self,
        prefix: &str,
        pad_length: usize,
    ) -> Result<ApiResponse<String>, String>;
}

/// Adapter over `/api/<collection>` of the backend
pub struct HttpServiceAdapter<T> {
    collection: &'static str,
    _record: PhantomData<fn() -> T>,
}

impl<T: EntityRecord> HttpServiceAdapter<T> {
    pub fn new() -> Self {
        Self {
            collection: T::COLLECTION,
            _record: PhantomData,
        }
    }

    fn url(&self, suffix: &str) -> String {
        api_url(&format!("/api/{}{}", self.collection, suffix))
    }
}

impl<T: EntityRecord> Default for HttpServiceAdapter<T> {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_envelope<D: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<ApiResponse<D>, String> {
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<ApiResponse<D>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

#[async_trait(?Send)]
impl<T: EntityRecord> EntityServiceAdapter<T> for HttpServiceAdapter<T> {
    async fn get_all(&self) -> Result<ApiResponse<Vec<T>>, String> {
        let response = Request::get(&self.url(""))
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;
        read_envelope(response).await
    }

    async fn get_by_id(&self, id: i64) -> Result<ApiResponse<T>, String> {
        let response = Request::get(&self.url(&format!("/{}", id)))
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;
        read_envelope(response).await
    }

    async fn save(&self, record: &T) -> Result<ApiResponse<T>, String> {
        let response = Request::post(&self.url(""))
            .json(record)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;
        read_envelope(response).await
    }

    async fn update_active_status(
        &self,
        id: i64,
        active: bool,
    ) -> Result<ApiResponse<()>, String> {
        let response = Request::put(&self.url(&format!("/{}/active", id)))
            .json(&ActiveStatusRequest { active })
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;
        read_envelope(response).await
    }

    async fn get_next_code(
        &self,
        prefix: &str,
        pad_length: usize,
    ) -> Result<ApiResponse<String>, String> {
        let query = format!(
            "/next-code?prefix={}&padLength={}",
            urlencoding::encode(prefix),
            pad_length
        );
        let response = Request::get(&self.url(&query))
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;
        read_envelope(response).await
    }
}
