pub mod a001_payment_type;
pub mod a002_service_group;
pub mod a003_medication_instruction;
pub mod common;
