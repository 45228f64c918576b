use crate::api::{IMAGE_URL_KEY, OCR_MODEL_KEY, OcrApi, invalid_entry_result, request_error_result};
use serde_json::Value;
use tracing::{debug, warn};

/// A record is dispatched only when both required keys are present.
/// Presence is all that is checked; the values themselves are not
/// inspected, and extra keys pass through to the API untouched.
pub fn is_valid_record(record: &Value) -> bool {
    record.get(IMAGE_URL_KEY).is_some() && record.get(OCR_MODEL_KEY).is_some()
}

/// Processes one record into one result value.
///
/// Never returns an error: an invalid record maps to the fixed
/// invalid-entry object without touching the network, and a transport
/// failure maps to the fixed request-error object carrying the
/// stringified cause. A valid record's result is the API response
/// verbatim.
pub async fn process_record(api: &dyn OcrApi, record: &Value) -> Value {
    if !is_valid_record(record) {
        debug!("Skipping dispatch for record missing a required key");
        return invalid_entry_result();
    }

    match api.submit(record).await {
        Ok(response) => response,
        Err(e) => {
            warn!("OCR API request failed: {}", e);
            request_error_result(e)
        }
    }
}

/// Maps every record of a batch to its result, in order.
///
/// The output has the same length as the input; a failed or invalid
/// record never stops processing of the remainder.
pub async fn process_entries(api: &dyn OcrApi, entries: &[Value]) -> Vec<Value> {
    let mut results = Vec::with_capacity(entries.len());
    for entry in entries {
        results.push(process_record(api, entry).await);
    }
    results
}
