//! Data models for notifications.
//!
//! `options` holds what callers pass in; `notification` holds the validated
//! record and the script-facing wrapper built from it.

pub mod notification;
pub mod options;

// Re-exports for convenient access
pub use notification::{
    EpochTimeStamp, Notification, NotificationRecord, RecordAction, SerializedData,
};
pub use options::{
    NotificationAction, NotificationDirection, NotificationOptions, VibratePattern,
};
