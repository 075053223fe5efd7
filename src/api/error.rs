use thiserror::Error;

/// Errors produced by the FullSlate client.
///
/// The first group is local validation, returned before any network
/// activity. The rest surface remote problems: a JSON body carrying the
/// FullSlate `failure` flag, an unexpected HTTP status, a transport
/// failure, or a body that did not decode.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No key defined")]
    MissingKey,

    #[error("FullSlate token missing")]
    MissingToken,

    #[error("Invalid services specified")]
    MissingServices,

    #[error("Invalid booking id")]
    MissingBookingId,

    #[error("Invalid {0}")]
    InvalidBooking(&'static str),

    /// The server answered with `failure: true`; `message` is its
    /// `errorMessage` field verbatim.
    #[error("{message}")]
    Failure { message: String },

    #[error("Unauthorized - check the API token")]
    Unauthorized,

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Maximum length for response bodies embedded in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl ApiError {
    /// Truncate a response body so error messages stay bounded. The cut
    /// backs up to a char boundary; a fixed byte offset would split
    /// multi-byte characters.
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut cut = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..cut],
            body.len()
        )
    }

    /// Map a non-success HTTP status to an error, keeping a truncated
    /// copy of the body for context
    pub(crate) fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            401 => ApiError::Unauthorized,
            403 => ApiError::AccessDenied(truncated),
            404 => ApiError::NotFound(truncated),
            500..=599 => ApiError::ServerError(truncated),
            _ => ApiError::UnexpectedStatus {
                status,
                body: truncated,
            },
        }
    }
}
