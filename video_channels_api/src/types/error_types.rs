use serde::{Deserialize, Serialize};

/// Error body returned by the server on a failed request.
///
/// Validation failures come back as `{ "errors": { "<field>": {...} } }`,
/// everything else as `{ "error": "<message>" }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

impl ApiError {
    /// True when at least one of the known fields was present.
    pub fn is_populated(&self) -> bool {
        self.error.is_some() || self.errors.is_some()
    }

    /// Names of the fields that failed validation, if any.
    pub fn invalid_fields(&self) -> Vec<String> {
        match &self.errors {
            Some(serde_json::Value::Object(map)) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_validation_errors() {
        let body = r#"{"errors":{"name":{"msg":"Should have a valid name"},"support":{"msg":"bad"}}}"#;
        let err: ApiError = serde_json::from_str(body).unwrap();
        assert!(err.is_populated());
        assert_eq!(err.error, None);
        assert_eq!(err.invalid_fields(), vec!["name".to_string(), "support".to_string()]);
    }

    #[test]
    fn unrelated_json_is_not_populated() {
        let err: ApiError = serde_json::from_str(r#"{"total":0,"data":[]}"#).unwrap();
        assert!(!err.is_populated());
        assert!(err.invalid_fields().is_empty());
    }
}
