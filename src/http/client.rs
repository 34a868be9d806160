use serde_json::Value;

use super::error::FetchError;

/// Issue a single GET against `address` and decode the body as JSON.
///
/// No timeout, retry or cancellation is applied; the address is handed to
/// reqwest as-is, so a malformed address surfaces as a network failure.
pub async fn fetch_json(address: String) -> Result<Value, FetchError> {
    let client = reqwest::Client::new();

    let response = client
        .get(&address)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Network(format!("failed to read response: {e}")))?;
    serde_json::from_slice(&bytes).map_err(|e| FetchError::Parse(e.to_string()))
}
