// src/report/envelope.rs
use serde::{Deserialize, Serialize};

/// JSON wrapper used when results are handed to other services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub data: Option<T>,
    pub message: String,
    pub success: bool,
}

impl<T> ResponseEnvelope<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            data: Some(data),
            message: message.into(),
            success: true,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            message: message.into(),
            success: false,
        }
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::extract_analysis;

    #[test]
    fn test_success_envelope_json() {
        let result = extract_analysis("Summary: s\nFeedback: f\nScore: 61");
        let envelope = ResponseEnvelope::success(result, "File processed successfully");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "File processed successfully");
        assert_eq!(json["data"]["summary"], "s");
        assert_eq!(json["data"]["feedback"], "f");
        assert_eq!(json["data"]["score"], 61.0);
    }

    #[test]
    fn test_error_envelope_has_null_data() {
        let envelope: ResponseEnvelope<()> = ResponseEnvelope::error("Could not read analysis input");
        let json = serde_json::to_value(&envelope).unwrap();
        assert!(json["data"].is_null());
        assert_eq!(json["success"], false);
    }
}
