//! Dispatch facade: the single entry point that displays notifications.

use crate::backend::{platform_backend, NotificationBackend, NotificationId, NOT_DISPLAYED};
use crate::config::NotificationConfig;
use crate::models::NotificationRecord;
use parking_lot::Mutex;
use std::sync::OnceLock;

/// Forwards display requests to one backend.
///
/// The backend sits behind a mutex so concurrent callers are serialized.
pub struct Dispatcher {
    backend: Mutex<Box<dyn NotificationBackend>>,
    config: NotificationConfig,
}

static PLATFORM_DISPATCHER: OnceLock<Dispatcher> = OnceLock::new();

impl Dispatcher {
    pub fn new(backend: Box<dyn NotificationBackend>) -> Self {
        Self::with_config(backend, NotificationConfig::default())
    }

    pub fn with_config(backend: Box<dyn NotificationBackend>, config: NotificationConfig) -> Self {
        Self {
            backend: Mutex::new(backend),
            config,
        }
    }

    /// A dispatcher using the backend compiled in for this platform.
    pub fn for_platform(config: &NotificationConfig) -> Self {
        Self::with_config(platform_backend(config), config.clone())
    }

    /// Configure the process-wide dispatcher.
    ///
    /// Must run before the first [`notify`] or [`Dispatcher::platform`] call.
    /// Returns `false` if the dispatcher already exists; its configuration is
    /// left unchanged.
    pub fn init_platform(config: &NotificationConfig) -> bool {
        let initialized = init_once(&PLATFORM_DISPATCHER, || Self::for_platform(config));
        if !initialized {
            log::warn!("[dispatch] Platform dispatcher already initialized, ignoring new configuration");
        }
        initialized
    }

    /// The process-wide dispatcher, created with default configuration on first use.
    pub fn platform() -> &'static Dispatcher {
        PLATFORM_DISPATCHER.get_or_init(|| Self::for_platform(&NotificationConfig::default()))
    }

    /// Configuration the backend was created with.
    pub fn config(&self) -> &NotificationConfig {
        &self.config
    }

    /// Display `title` if the backend is connected.
    ///
    /// Returns the identifier assigned by the native service, or `None` if
    /// nothing was displayed.
    pub fn notify(&self, title: &str) -> Option<NotificationId> {
        let mut backend = self.backend.lock();
        if !backend.is_connected() {
            log::error!("[dispatch] Notification backend is not connected, dropping '{}'", title);
            return None;
        }

        let id = backend.send(title);
        if id == NOT_DISPLAYED {
            log::warn!("[dispatch] Notification '{}' was not displayed", title);
            return None;
        }

        log::debug!("[dispatch] Notification sent: {}", id);
        Some(id)
    }

    pub fn is_connected(&self) -> bool {
        self.backend.lock().is_connected()
    }

    /// Retry the backend connection.
    pub fn reconnect(&self) -> bool {
        let mut backend = self.backend.lock();
        backend.connect();
        backend.is_connected()
    }
}

/// Fill `cell` with `make()` unless it is already set. `true` if this call filled it.
fn init_once(cell: &OnceLock<Dispatcher>, make: impl FnOnce() -> Dispatcher) -> bool {
    let mut created = false;
    cell.get_or_init(|| {
        created = true;
        make()
    });
    created
}

/// Display `title` through the process-wide dispatcher.
pub fn notify(title: &str) -> Option<NotificationId> {
    Dispatcher::platform().notify(title)
}

/// Run the notification show steps for `record`.
///
/// There is no list of notifications yet, so nothing is ever replaced and
/// the record is always displayed. Only the title reaches the backend.
pub fn show_steps(dispatcher: &Dispatcher, record: &NotificationRecord) -> Option<NotificationId> {
    // TODO: replace the notification with the same tag and origin once the
    // list of notifications exists.
    dispatcher.notify(record.title())
}
