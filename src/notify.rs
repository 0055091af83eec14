//! Transient user-facing notifications ("toasts").
//!
//! Failures at the network edge end here: they are converted once, at the
//! call site, and never propagated further.

use crate::error::StorefrontError;

pub const CRITICAL_ERROR_MESSAGE: &str = "A critical error occurred. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    /// Backend rejections keep the backend's text verbatim; local validation
    /// keeps its own text; transport and decode failures get the generic
    /// critical-error message.
    pub fn from_error(err: &StorefrontError) -> Self {
        let message = match err {
            StorefrontError::Backend { message, .. } => message.clone(),
            StorefrontError::Validation(msg)
            | StorefrontError::CheckoutBlocked(msg)
            | StorefrontError::NotFound(msg)
            | StorefrontError::InvalidArgument(msg) => msg.clone(),
            StorefrontError::SubmitInFlight => "Please wait, your request is being processed.".to_string(),
            StorefrontError::Http(_)
            | StorefrontError::Io(_)
            | StorefrontError::Json(_) => CRITICAL_ERROR_MESSAGE.to_string(),
        };
        Self::error(message)
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}

impl From<&StorefrontError> for Notification {
    fn from(err: &StorefrontError) -> Self {
        Notification::from_error(err)
    }
}
