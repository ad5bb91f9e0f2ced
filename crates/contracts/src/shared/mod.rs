pub mod api_response;
pub mod requests;

pub use api_response::{ApiResponse, GENERIC_ERROR_MESSAGE};
pub use requests::{ActiveStatusRequest, NextCodeQuery};
