//! Caller-supplied notification options.

use serde::{Deserialize, Serialize};

/// Text direction of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationDirection {
    #[default]
    Auto,
    Ltr,
    Rtl,
}

/// An action button as supplied by, and reported back to, the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationAction {
    /// Identifier reported when the action is activated.
    pub action: String,

    /// Button label.
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigate: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl NotificationAction {
    pub fn new(action: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            title: title.into(),
            navigate: None,
            icon: None,
        }
    }
}

/// A vibration pattern: one duration, or alternating vibrate and pause durations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VibratePattern {
    Duration(u32),
    Pattern(Vec<u32>),
}

impl VibratePattern {
    /// Durations in milliseconds; a single duration reads as a one-entry pattern.
    pub fn as_slice(&self) -> &[u32] {
        match self {
            Self::Duration(ms) => std::slice::from_ref(ms),
            Self::Pattern(pattern) => pattern,
        }
    }
}

impl From<u32> for VibratePattern {
    fn from(ms: u32) -> Self {
        Self::Duration(ms)
    }
}

impl From<Vec<u32>> for VibratePattern {
    fn from(pattern: Vec<u32>) -> Self {
        Self::Pattern(pattern)
    }
}

/// The loosely-typed options bag passed to the constructor.
///
/// Every field is optional; absent keys take the defaults below when the bag
/// is parsed from JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationOptions {
    pub dir: NotificationDirection,
    pub lang: String,
    pub body: String,
    pub navigate: Option<String>,
    pub tag: String,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub badge: Option<String>,

    pub vibrate: Option<VibratePattern>,

    /// Milliseconds since the Unix epoch.
    pub timestamp: Option<u64>,
    pub renotify: bool,
    pub silent: Option<bool>,
    pub require_interaction: bool,

    /// Opaque payload, serialized for storage and never inspected.
    pub data: serde_json::Value,
    pub actions: Vec<NotificationAction>,
}

impl NotificationOptions {
    /// Parse an options bag from a JSON value.
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}
