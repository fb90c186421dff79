//! Uniform response envelope.
//!
//! Every endpoint answers with the same wrapper, success or failure:
//! `{"success": bool, "message": string, "data": payload | field-map | null}`.
//! `data` is always present so clients can rely on the shape.

use serde::{Deserialize, Serialize};

/// Wrapper returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request achieved its effect.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// Payload on success, a field→message map on validation failure,
    /// null otherwise.
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying `data`.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Failure envelope with no payload.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Failure envelope carrying supplementary `data`, such as the
    /// field-error map of a validation failure.
    pub fn failure_with(message: impl Into<String>, data: T) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::ApiResponse;

    #[test]
    fn failure_serialises_with_explicit_null_data() {
        let envelope = ApiResponse::<Value>::failure("Invalid username or password");
        let value = serde_json::to_value(&envelope).expect("serialise envelope");
        assert_eq!(
            value,
            json!({
                "success": false,
                "message": "Invalid username or password",
                "data": null,
            })
        );
    }

    #[test]
    fn success_carries_the_payload() {
        let envelope = ApiResponse::success("ok", json!({"username": "ada"}));
        let value = serde_json::to_value(&envelope).expect("serialise envelope");
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["username"], "ada");
    }
}
