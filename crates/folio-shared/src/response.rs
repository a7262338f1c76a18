//! Uniform API response envelope.
//!
//! Every successful response is `{ ok: true, data, message? }`; every
//! error is `{ ok: false, message }` with an HTTP status among
//! 400/401/403/404/409/500.

use serde::{Deserialize, Serialize};

/// Successful response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub ok: bool,
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Paginated list payload. `page` is 1-based.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_serializes_with_ok_false() {
        let body = ErrorBody::new("missing field");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["message"], "missing field");
    }

    #[test]
    fn ok_response_omits_absent_message() {
        let json = serde_json::to_string(&ApiResponse::ok(1)).unwrap();
        assert!(!json.contains("message"));
    }
}
