//! Backend for platforms without desktop notification integration.

use super::{NotificationBackend, NotificationId, NOT_DISPLAYED};
use crate::config::NotificationConfig;

/// Never connected; every send is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedBackend;

impl NotificationBackend for UnimplementedBackend {
    fn is_connected(&self) -> bool {
        false
    }

    fn connect(&mut self) {}

    fn send(&mut self, title: &str) -> NotificationId {
        log::debug!("Notifications are not implemented on this platform, dropping '{}'", title);
        NOT_DISPLAYED
    }
}

#[allow(dead_code)]
pub(crate) fn create_backend(_config: &NotificationConfig) -> Box<dyn NotificationBackend> {
    Box::new(UnimplementedBackend)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_connects() {
        let mut backend = UnimplementedBackend;
        backend.connect();
        assert!(!backend.is_connected());
        assert_eq!(backend.send("Hello"), NOT_DISPLAYED);
    }
}
