//! Shared DTOs between the admin frontend and the master-data backend.

pub mod domain;
pub mod shared;
