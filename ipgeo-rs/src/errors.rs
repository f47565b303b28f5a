use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{provider} returned error ({status})")]
    ApiError {
        provider: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Malformed response from {provider}: {reason}")]
    Decode {
        provider: &'static str,
        reason: String,
    },

    #[error("An error occurred while fetching data for {ip}: {reasons}")]
    NoData { ip: String, reasons: String },
}
