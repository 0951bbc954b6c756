//! Error type for calls against the REST API.
//!
//! ERROR HANDLING
//! ==============
//! Variants exist for logging and tests. The UI does not branch on them:
//! every failure becomes the same kind of error toast, and the startup
//! profile check treats all of them as "not signed in".

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16 },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("response contained no data")]
    MissingData,
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Text shown in an error toast.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Network(_) => "Unable to reach the server.".to_owned(),
            Self::Status { status } => format!("Request failed ({status})."),
            Self::Decode(_) | Self::MissingData => "Unexpected response from the server.".to_owned(),
            Self::Unavailable => "Not available.".to_owned(),
        }
    }
}
