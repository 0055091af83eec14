#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-2xx response. `message` is the backend's own text when it sent one.
    #[error("Backend rejected request ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Checkout blocked: {0}")]
    CheckoutBlocked(String),

    #[error("A submission is already in flight")]
    SubmitInFlight,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
