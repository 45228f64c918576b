use serde_json::{Value, json};

/// Required record keys; a record missing either is never dispatched.
pub const IMAGE_URL_KEY: &str = "image_url";
pub const OCR_MODEL_KEY: &str = "OCR_model";

/// Fixed result object for a record missing a required key.
pub fn invalid_entry_result() -> Value {
    json!({
        "error": "Invalid entry",
        "details": "Missing 'image_url' or 'OCR_model'"
    })
}

/// Fixed result object for a transport-level request failure.
pub fn request_error_result(details: impl std::fmt::Display) -> Value {
    json!({
        "error": "An error occurred while making the request",
        "details": details.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invalid_entry_result_shape() {
        let result = invalid_entry_result();
        assert_eq!(result["error"], "Invalid entry");
        assert_eq!(result["details"], "Missing 'image_url' or 'OCR_model'");
        assert_eq!(result.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_request_error_result_carries_details() {
        let result = request_error_result("connection refused");
        assert_eq!(result["error"], "An error occurred while making the request");
        assert_eq!(result["details"], "connection refused");
    }
}
