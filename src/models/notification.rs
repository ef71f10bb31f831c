//! Validated notification record and its script-facing wrapper.

use super::options::{NotificationAction, NotificationDirection};
use crate::services::serializer::StorageSerializer;
use url::{Origin, Url};

/// Milliseconds since the Unix epoch.
pub type EpochTimeStamp = u64;

/// Opaque blob produced by a [`StorageSerializer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedData(Vec<u8>);

impl SerializedData {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// An action with its addresses resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordAction {
    pub(crate) name: String,
    pub(crate) title: String,
    pub(crate) navigation_url: Option<Url>,
    pub(crate) icon_url: Option<Url>,
}

impl RecordAction {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn navigation_url(&self) -> Option<&Url> {
        self.navigation_url.as_ref()
    }

    pub fn icon_url(&self) -> Option<&Url> {
        self.icon_url.as_ref()
    }
}

/// The validated, immutable representation of one notification.
///
/// Only the builder creates records. Every address is either absent or an
/// absolute URL, and `renotify` implies a non-empty tag.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRecord {
    pub(crate) title: String,
    pub(crate) direction: NotificationDirection,
    pub(crate) language: String,
    pub(crate) body: String,
    pub(crate) navigation_url: Option<Url>,
    pub(crate) tag: String,
    pub(crate) data: SerializedData,
    pub(crate) timestamp: EpochTimeStamp,
    pub(crate) origin: Origin,
    pub(crate) renotify_preference: bool,
    pub(crate) silent_preference: Option<bool>,
    pub(crate) require_interaction_preference: bool,
    pub(crate) image_url: Option<Url>,
    pub(crate) icon_url: Option<Url>,
    pub(crate) badge_url: Option<Url>,
    pub(crate) vibration_pattern: Vec<u32>,
    pub(crate) actions: Vec<RecordAction>,
}

impl NotificationRecord {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn direction(&self) -> NotificationDirection {
        self.direction
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn navigation_url(&self) -> Option<&Url> {
        self.navigation_url.as_ref()
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn data(&self) -> &SerializedData {
        &self.data
    }

    pub fn timestamp(&self) -> EpochTimeStamp {
        self.timestamp
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn renotify_preference(&self) -> bool {
        self.renotify_preference
    }

    pub fn silent_preference(&self) -> Option<bool> {
        self.silent_preference
    }

    pub fn require_interaction_preference(&self) -> bool {
        self.require_interaction_preference
    }

    pub fn image_url(&self) -> Option<&Url> {
        self.image_url.as_ref()
    }

    pub fn icon_url(&self) -> Option<&Url> {
        self.icon_url.as_ref()
    }

    pub fn badge_url(&self) -> Option<&Url> {
        self.badge_url.as_ref()
    }

    pub fn vibration_pattern(&self) -> &[u32] {
        &self.vibration_pattern
    }

    pub fn actions(&self) -> &[RecordAction] {
        &self.actions
    }
}

/// Script-facing notification object.
///
/// Getters mirror the `Notification` interface: absent URLs read as the empty
/// string and `actions()` returns a fresh copy on every call.
#[derive(Debug, Clone)]
pub struct Notification {
    record: NotificationRecord,
}

impl Notification {
    pub(crate) fn new(record: NotificationRecord) -> Self {
        Self { record }
    }

    /// The underlying record handed to the show steps.
    pub fn record(&self) -> &NotificationRecord {
        &self.record
    }

    /// Number of actions the platform can display.
    pub fn max_actions() -> usize {
        crate::config::MAX_ACTIONS
    }

    pub fn title(&self) -> &str {
        &self.record.title
    }

    pub fn dir(&self) -> NotificationDirection {
        self.record.direction
    }

    pub fn lang(&self) -> &str {
        &self.record.language
    }

    pub fn body(&self) -> &str {
        &self.record.body
    }

    pub fn navigate(&self) -> String {
        serialize_or_empty(self.record.navigation_url.as_ref())
    }

    pub fn tag(&self) -> &str {
        &self.record.tag
    }

    pub fn image(&self) -> String {
        serialize_or_empty(self.record.image_url.as_ref())
    }

    pub fn icon(&self) -> String {
        serialize_or_empty(self.record.icon_url.as_ref())
    }

    pub fn badge(&self) -> String {
        serialize_or_empty(self.record.badge_url.as_ref())
    }

    pub fn timestamp(&self) -> EpochTimeStamp {
        self.record.timestamp
    }

    pub fn renotify(&self) -> bool {
        self.record.renotify_preference
    }

    pub fn silent(&self) -> Option<bool> {
        self.record.silent_preference
    }

    pub fn require_interaction(&self) -> bool {
        self.record.require_interaction_preference
    }

    pub fn vibrate(&self) -> Vec<u32> {
        self.record.vibration_pattern.clone()
    }

    /// Report the record's actions in the caller-facing shape.
    pub fn actions(&self) -> Vec<NotificationAction> {
        self.record
            .actions
            .iter()
            .map(|entry| NotificationAction {
                action: entry.name.clone(),
                title: entry.title.clone(),
                navigate: entry.navigation_url.as_ref().map(|u| u.to_string()),
                icon: entry.icon_url.as_ref().map(|u| u.to_string()),
            })
            .collect()
    }

    /// Deserialize the stored data payload, or `null` if that fails.
    pub fn data(&self, serializer: &dyn StorageSerializer) -> serde_json::Value {
        serializer
            .deserialize(&self.record.data)
            .unwrap_or(serde_json::Value::Null)
    }
}

fn serialize_or_empty(url: Option<&Url>) -> String {
    url.map(|u| u.to_string()).unwrap_or_default()
}
