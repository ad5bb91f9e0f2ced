use axum::{
    routing::{any, get, post, put},
    Router,
};
use contracts::domain::a001_payment_type::aggregate::PaymentType;
use contracts::domain::a002_service_group::aggregate::ServiceGroup;
use contracts::domain::a003_medication_instruction::aggregate::MedicationInstruction;

use crate::domain::master_data::SampleRecords;
use crate::handlers::master_data;

/// Routes of one collection, mounted under `/api/<collection>`
fn master_data_routes<T: SampleRecords>() -> Router {
    let base = format!("/api/{}", T::COLLECTION);
    Router::new()
        .route(
            &base,
            get(master_data::list_all::<T>).post(master_data::save::<T>),
        )
        .route(
            &format!("{}/next-code", base),
            get(master_data::next_code::<T>),
        )
        .route(
            &format!("{}/testdata", base),
            post(master_data::insert_test_data::<T>),
        )
        .route(&format!("{}/:id", base), get(master_data::get_by_id::<T>))
        .route(
            &format!("{}/:id/active", base),
            put(master_data::update_active_status::<T>),
        )
}

/// All application routes
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(master_data_routes::<PaymentType>())
        .merge(master_data_routes::<ServiceGroup>())
        .merge(master_data_routes::<MedicationInstruction>())
        .route("/api/*rest", any(master_data::unknown_collection))
}
