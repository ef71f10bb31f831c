//! Notification error types.
//!
//! These errors are serializable so a host can forward them over IPC to the
//! scripting layer, which turns them into the matching exception type.

use serde::Serialize;
use thiserror::Error;

/// Exception class a script binding should raise for a [`NotificationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// Caller-supplied input has the wrong shape.
    TypeError,
    /// The data payload could not be serialized for storage.
    DataCloneError,
    /// Host-side failure unrelated to caller input.
    Internal,
}

/// Errors reported synchronously to the caller of the notification API.
///
/// All variants serialize to a structured JSON object.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "type", content = "details")]
pub enum NotificationError {
    /// `renotify` was requested without a tag to renotify against.
    #[error("options[\"tag\"] cannot be the empty string when options[\"renotify\"] is set to true")]
    EmptyTagWithRenotify,

    /// A vibration pattern was supplied for a silent notification.
    #[error("options[\"vibrate\"] cannot be set when options[\"silent\"] is true")]
    SilentWithVibrate,

    /// The constructor was called from a service worker global scope.
    #[error("Notification cannot be constructed in a service worker global scope")]
    ServiceWorkerScope,

    /// Actions were supplied to the constructor, which does not accept them.
    #[error("options[\"actions\"] must be empty, got {count} action(s)")]
    ActionsNotSupported { count: usize },

    /// The opaque data payload could not be serialized.
    #[error("Failed to serialize notification data: {message}")]
    DataClone { message: String },

    /// Configuration could not be loaded.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        path: Option<String>,
    },

    /// The background show worker has stopped.
    #[error("Notification worker is not running")]
    WorkerUnavailable,
}

impl NotificationError {
    /// Create a data clone error.
    pub fn data_clone(message: impl Into<String>) -> Self {
        Self::DataClone {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error for a specific file.
    pub fn config_at(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Which exception class the script layer should raise.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyTagWithRenotify
            | Self::SilentWithVibrate
            | Self::ServiceWorkerScope
            | Self::ActionsNotSupported { .. } => ErrorKind::TypeError,
            Self::DataClone { .. } => ErrorKind::DataCloneError,
            Self::Config { .. } | Self::WorkerUnavailable => ErrorKind::Internal,
        }
    }

    /// Check if this error is a caller input error.
    pub fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::TypeError
    }
}

impl From<serde_json::Error> for NotificationError {
    fn from(err: serde_json::Error) -> Self {
        Self::config(format!("JSON error: {}", err))
    }
}
