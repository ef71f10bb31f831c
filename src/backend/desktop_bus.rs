//! Desktop notifications over the freedesktop D-Bus protocol.
//!
//! The backend owns one connection to `org.freedesktop.Notifications`,
//! established when the backend is created and reused for its lifetime.
//! A failed connection is not retried automatically; call
//! [`NotificationBackend::connect`] again to retry.
//!
//! See <https://specifications.freedesktop.org/notification/latest-single/#command-notify>.

use super::{BackendError, NotificationBackend, NotificationId, NOT_DISPLAYED};
use crate::config::NotificationConfig;
use std::collections::HashMap;

pub const NOTIFICATIONS_SERVICE: &str = "org.freedesktop.Notifications";
pub const NOTIFICATIONS_PATH: &str = "/org/freedesktop/Notifications";
pub const NOTIFICATIONS_INTERFACE: &str = "org.freedesktop.Notifications";
pub const NOTIFY_METHOD: &str = "Notify";

/// Arguments of a `Notify` call, in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyCall {
    pub app_name: String,
    pub replaces_id: u32,
    pub app_icon: String,
    pub summary: String,
    pub body: String,
    pub actions: Vec<String>,
    pub hints: HashMap<String, String>,
    pub expire_timeout: i32,
}

impl NotifyCall {
    /// A call that displays `summary` and nothing else.
    pub fn summary_only(
        app_name: impl Into<String>,
        summary: impl Into<String>,
        expire_timeout: i32,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            replaces_id: 0,
            app_icon: String::new(),
            summary: summary.into(),
            body: String::new(),
            actions: Vec::new(),
            hints: HashMap::new(),
            expire_timeout,
        }
    }
}

/// A proxy bound to the notification service's object and interface.
pub trait NotificationsProxy: Send {
    /// Whether the service behind the proxy can be reached.
    fn is_valid(&self) -> bool;

    /// Invoke `Notify` and return the identifier from the reply.
    fn notify(&self, call: &NotifyCall) -> Result<u32, BackendError>;
}

/// Opens a session bus connection and binds a notifications proxy to it.
pub trait BusConnector: Send {
    type Proxy: NotificationsProxy;

    fn session_proxy(&self) -> Result<Self::Proxy, BackendError>;
}

/// Connection lifecycle of a [`DesktopBusBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
    Failed,
}

/// Backend that calls `org.freedesktop.Notifications.Notify`.
pub struct DesktopBusBackend<C: BusConnector> {
    connector: C,
    proxy: Option<C::Proxy>,
    state: ConnectionState,
    last_error: Option<BackendError>,
    app_name: String,
    expire_timeout: i32,
}

impl<C: BusConnector> DesktopBusBackend<C> {
    /// Create the backend and connect to the session bus.
    pub fn new(connector: C, config: &NotificationConfig) -> Self {
        let mut backend = Self {
            connector,
            proxy: None,
            state: ConnectionState::Disconnected,
            last_error: None,
            app_name: config.app_name.clone(),
            expire_timeout: config.expire_timeout,
        };
        backend.connect();
        backend
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// The failure that moved the backend to [`ConnectionState::Failed`].
    pub fn last_error(&self) -> Option<&BackendError> {
        self.last_error.as_ref()
    }

    fn fail(&mut self, error: BackendError) {
        log::error!("[dbus] {}", error);
        self.proxy = None;
        self.state = ConnectionState::Failed;
        self.last_error = Some(error);
    }
}

impl<C: BusConnector> NotificationBackend for DesktopBusBackend<C> {
    fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
            && self.proxy.as_ref().is_some_and(|p| p.is_valid())
    }

    fn connect(&mut self) {
        if self.state == ConnectionState::Connected {
            return;
        }

        self.state = ConnectionState::Connecting;
        let proxy = match self.connector.session_proxy() {
            Ok(proxy) => proxy,
            Err(e) => return self.fail(e),
        };

        if !proxy.is_valid() {
            return self.fail(BackendError::ServiceUnavailable(format!(
                "no owner for {}",
                NOTIFICATIONS_SERVICE
            )));
        }

        log::debug!("[dbus] Connected to {}", NOTIFICATIONS_SERVICE);
        self.proxy = Some(proxy);
        self.state = ConnectionState::Connected;
        self.last_error = None;
    }

    fn send(&mut self, title: &str) -> NotificationId {
        let Some(proxy) = self.proxy.as_ref().filter(|_| self.state == ConnectionState::Connected)
        else {
            log::warn!("[dbus] {}, dropping '{}'", BackendError::NotConnected, title);
            return NOT_DISPLAYED;
        };

        let call = NotifyCall::summary_only(&self.app_name, title, self.expire_timeout);
        match proxy.notify(&call) {
            Ok(id) => {
                log::debug!("[dbus] Notification sent successfully with ID: {}", id);
                id
            }
            Err(e) => {
                log::error!("[dbus] {}", e);
                NOT_DISPLAYED
            }
        }
    }
}
