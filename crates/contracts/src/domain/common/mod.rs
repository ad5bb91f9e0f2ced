//! Common types and traits for all master-data records

pub mod active_flag;
pub mod entity_record;

// Re-exports
pub use active_flag::ActiveFlag;
pub use entity_record::EntityRecord;
