//! Web notifications core.
//!
//! Validates caller-supplied notification options into immutable records and
//! hands them to the host's native notification service.

pub mod backend;
pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use backend::{NotificationBackend, NotificationId, NOT_DISPLAYED};
pub use config::NotificationConfig;
pub use error::{ErrorKind, NotificationError};
pub use models::{Notification, NotificationOptions, NotificationRecord};
pub use services::{notify, Dispatcher, NotificationBuilder, ShowHandle, ShowWorker};
