use serde::{Deserialize, Serialize};

/// Generic fallback used when a failed response carries no message
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Envelope returned by every master-data endpoint.
///
/// `success:false` is a business failure and is expected to carry
/// `error_message`; HTTP-level failures never reach this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error_message: None,
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error_message: Some(message.into()),
        }
    }

    /// Message to surface for a failed response
    pub fn message_or_default(&self) -> String {
        self.error_message
            .clone()
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }

    /// Collapse the envelope into a `Result`.
    ///
    /// A successful response without `data` is treated as a failure for
    /// operations that need a payload.
    pub fn into_result(self) -> Result<T, String> {
        if !self.success {
            return Err(self.message_or_default());
        }
        match self.data {
            Some(data) => Ok(data),
            None => Err(self.message_or_default()),
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope for operations without a payload
    pub fn done() -> Self {
        Self {
            success: true,
            data: None,
            error_message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_is_camel_case() {
        let resp: ApiResponse<i32> = ApiResponse::fail("boom");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["errorMessage"], "boom");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_missing_fields_deserialize() {
        let resp: ApiResponse<String> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(resp.message_or_default(), GENERIC_ERROR_MESSAGE);
        assert_eq!(resp.into_result(), Err(GENERIC_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_success_without_data_is_error() {
        let resp: ApiResponse<String> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(resp.into_result().is_err());
    }
}
