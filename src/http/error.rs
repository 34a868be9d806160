use thiserror::Error;

/// Why a fetch did not produce a JSON value.
///
/// Details are kept as strings so the error can travel inside a UI message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("unexpected status {code} {reason}")]
    Status { code: u16, reason: String },

    #[error("response is not valid JSON: {0}")]
    Parse(String),
}
