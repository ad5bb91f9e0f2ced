use serde::{Deserialize, Serialize};

pub const DEFAULT_CODE_PAD: usize = 3;

/// Body of `PUT /api/<collection>/:id/active`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveStatusRequest {
    pub active: bool,
}

/// Query of `GET /api/<collection>/next-code`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextCodeQuery {
    #[serde(default)]
    pub prefix: String,
    #[serde(default = "default_pad")]
    pub pad_length: usize,
}

fn default_pad() -> usize {
    DEFAULT_CODE_PAD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_code_query_defaults() {
        let query: NextCodeQuery = serde_json::from_str(r#"{"prefix":"PAY"}"#).unwrap();
        assert_eq!(query.pad_length, DEFAULT_CODE_PAD);

        let query: NextCodeQuery =
            serde_json::from_str(r#"{"prefix":"MI","padLength":4}"#).unwrap();
        assert_eq!(query.pad_length, 4);
    }
}
