//! Generic storage and business rules shared by every master-data collection

pub mod error;
pub mod repository;
pub mod samples;
pub mod service;

pub use error::MasterDataError;
pub use service::SampleRecords;
