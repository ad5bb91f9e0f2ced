//! API utilities for frontend-backend communication

/// Port the backend listens on (see `[server] port` in config.toml)
pub const BACKEND_PORT: u16 = 3000;

/// Base URL of the backend derived from the current window location.
///
/// Returns an empty string outside a browser, which makes every URL
/// relative to the page origin.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Full API URL for a path starting with `/api/`
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
