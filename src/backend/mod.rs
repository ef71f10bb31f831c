//! Platform notification backends.
//!
//! Each backend hands a notification to the host's native notification
//! service. Exactly one backend is compiled in per target; the rest of the
//! crate only sees the [`NotificationBackend`] trait.

pub mod desktop_bus;
pub mod unimplemented;
#[cfg(all(target_os = "linux", feature = "dbus"))]
pub mod zbus_session;

use crate::config::NotificationConfig;
use thiserror::Error;

#[cfg(not(all(target_os = "linux", feature = "dbus")))]
use self::unimplemented as platform;
#[cfg(all(target_os = "linux", feature = "dbus"))]
use self::zbus_session as platform;

/// Identifier assigned by the native notification service.
pub type NotificationId = u32;

/// Returned by [`NotificationBackend::send`] when nothing was displayed.
pub const NOT_DISPLAYED: NotificationId = 0;

/// Backend connection and protocol failures.
///
/// These never reach the caller of the dispatch facade; they are logged and
/// turned into [`NOT_DISPLAYED`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("Failed to connect to the D-Bus session bus: {0}")]
    SessionBusUnavailable(String),

    #[error("Notification service is not available: {0}")]
    ServiceUnavailable(String),

    #[error("D-Bus error calling Notify: {name}: {message}")]
    ErrorReply { name: String, message: String },

    #[error("Malformed Notify reply: {0}")]
    MalformedReply(String),

    #[error("D-Bus error: {0}")]
    Bus(String),

    #[error("Backend is not connected")]
    NotConnected,
}

/// Capability contract implemented by every platform backend.
pub trait NotificationBackend: Send {
    /// Current connection health. Never blocks.
    fn is_connected(&self) -> bool;

    /// Establish the backend's connection if it is not already up.
    ///
    /// Failures are recorded and observed through [`is_connected`](Self::is_connected).
    fn connect(&mut self);

    /// Display a notification carrying `title`.
    ///
    /// Returns the service-assigned identifier, or [`NOT_DISPLAYED`].
    fn send(&mut self, title: &str) -> NotificationId;
}

/// Create the backend compiled in for this platform.
pub fn platform_backend(config: &NotificationConfig) -> Box<dyn NotificationBackend> {
    platform::create_backend(config)
}
