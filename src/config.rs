//! Notification configuration.

use crate::error::NotificationError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application name sent to the desktop notification service.
pub const DEFAULT_APP_NAME: &str = "Ladybird";

/// Expire timeout meaning "never expire" in the desktop notification protocol.
pub const EXPIRE_NEVER: i32 = -1;

/// Number of action buttons any backend can currently deliver.
pub const MAX_ACTIONS: usize = 0;

/// Default capacity of the show worker's request channel.
pub const DEFAULT_QUEUE_CAPACITY: usize = 16;

/// Notification configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationConfig {
    /// Application identifier shown by the notification service.
    pub app_name: String,

    /// Expire timeout in milliseconds; `-1` never expires.
    pub expire_timeout: i32,

    /// Maximum number of actions copied into a record.
    pub max_actions: usize,

    /// Pending show requests the worker buffers before callers wait.
    pub queue_capacity: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            expire_timeout: EXPIRE_NEVER,
            max_actions: MAX_ACTIONS,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl NotificationConfig {
    /// Parse a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, NotificationError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self, NotificationError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            NotificationError::config_at(
                format!("Failed to read config: {}", e),
                path.display().to_string(),
            )
        })?;

        Self::from_json(&contents).map_err(|e| match e {
            NotificationError::Config { message, .. } => {
                NotificationError::config_at(message, path.display().to_string())
            }
            other => other,
        })
    }

    fn validate(&self) -> Result<(), NotificationError> {
        if self.app_name.is_empty() {
            return Err(NotificationError::config("appName cannot be empty"));
        }
        if self.queue_capacity == 0 {
            return Err(NotificationError::config("queueCapacity must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = NotificationConfig::default();
        assert_eq!(config.app_name, "Ladybird");
        assert_eq!(config.expire_timeout, -1);
        assert_eq!(config.max_actions, 0);
        assert_eq!(config.queue_capacity, 16);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = NotificationConfig::from_json(r#"{"appName": "Browser"}"#).unwrap();
        assert_eq!(config.app_name, "Browser");
        assert_eq!(config.expire_timeout, EXPIRE_NEVER);
        assert_eq!(config.queue_capacity, DEFAULT_QUEUE_CAPACITY);
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = NotificationConfig::from_json(r#"{"queueCapacity": 0}"#).unwrap_err();
        assert!(matches!(err, NotificationError::Config { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notifications.json");
        std::fs::write(&path, r#"{"expireTimeout": 5000, "maxActions": 2}"#).unwrap();

        let config = NotificationConfig::load(&path).unwrap();
        assert_eq!(config.expire_timeout, 5000);
        assert_eq!(config.max_actions, 2);
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{not json").unwrap();

        match NotificationConfig::load(&path).unwrap_err() {
            NotificationError::Config { path: Some(p), .. } => {
                assert!(p.ends_with("broken.json"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let result = NotificationConfig::load(&dir.path().join("missing.json"));
        assert!(result.is_err());
    }
}
