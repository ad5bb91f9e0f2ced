pub mod api_utils;
pub mod components;
pub mod entity_controller;
pub mod forms;
pub mod icons;
pub mod notifications;
