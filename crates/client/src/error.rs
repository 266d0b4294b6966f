/// Errors from the durable key/value store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors surfaced by client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a failure body.
    #[error("API rejected request ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// The `message` field of the failure body.
        message: String,
    },

    /// The API answered with a non-2xx status and an unreadable body.
    #[error("Unexpected API response ({status}): {body}")]
    Unexpected { status: u16, body: String },

    /// Reading or writing durable state failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ClientError {
    /// The server's own explanation, when it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }

    /// HTTP status of a rejected or unexpected response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Rejected { status, .. } | ClientError::Unexpected { status, .. } => {
                Some(*status)
            }
            ClientError::Request(e) => e.status().map(|s| s.as_u16()),
            ClientError::Storage(_) => None,
        }
    }
}
