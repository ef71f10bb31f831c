//! Turns a caller's options bag into a validated notification record.
//!
//! Building is pure: it validates, resolves URLs and serializes the data
//! payload, but never performs I/O or dispatch. Unresolvable URLs leave the
//! corresponding field absent instead of failing the build.

use crate::config::{NotificationConfig, MAX_ACTIONS};
use crate::error::NotificationError;
use crate::models::{
    EpochTimeStamp, Notification, NotificationOptions, NotificationRecord, RecordAction,
};
use crate::services::context::{ExecutionContext, GlobalScope};
use crate::services::serializer::{JsonStorageSerializer, StorageSerializer};
use crate::services::url_resolver::resolve;
use std::sync::Arc;
use url::{Origin, Url};

/// Longest vibration pattern kept in a record.
pub const MAX_VIBRATE_ENTRIES: usize = 10;

/// Longest single vibration or pause, in milliseconds.
pub const MAX_VIBRATE_DURATION_MS: u32 = 10_000;

/// Builds notification records.
#[derive(Clone)]
pub struct NotificationBuilder {
    serializer: Arc<dyn StorageSerializer>,
    max_actions: usize,
}

impl Default for NotificationBuilder {
    fn default() -> Self {
        Self::new(Arc::new(JsonStorageSerializer))
    }
}

impl NotificationBuilder {
    /// Create a builder using `serializer` for data payloads.
    pub fn new(serializer: Arc<dyn StorageSerializer>) -> Self {
        Self {
            serializer,
            max_actions: MAX_ACTIONS,
        }
    }

    /// Create a builder honoring the configured action cap.
    pub fn from_config(serializer: Arc<dyn StorageSerializer>, config: &NotificationConfig) -> Self {
        Self::new(serializer).max_actions(config.max_actions)
    }

    /// Set how many actions are copied into a record; excess entries are skipped.
    pub fn max_actions(mut self, max_actions: usize) -> Self {
        self.max_actions = max_actions;
        self
    }

    pub fn serializer(&self) -> &dyn StorageSerializer {
        self.serializer.as_ref()
    }

    /// Create a notification record from explicit origin, base URL and fallback timestamp.
    pub fn build(
        &self,
        title: impl Into<String>,
        options: &NotificationOptions,
        origin: Origin,
        base_url: &Url,
        fallback_timestamp: EpochTimeStamp,
    ) -> Result<NotificationRecord, NotificationError> {
        if options.silent == Some(true) && options.vibrate.is_some() {
            return Err(NotificationError::SilentWithVibrate);
        }

        if options.renotify && options.tag.is_empty() {
            return Err(NotificationError::EmptyTagWithRenotify);
        }

        let data = self.serializer.serialize_for_storage(&options.data)?;

        let try_resolve = |candidate: &Option<String>| -> Option<Url> {
            candidate.as_deref().and_then(|c| resolve(base_url, c))
        };

        let actions = options
            .actions
            .iter()
            .take(self.max_actions)
            .map(|entry| RecordAction {
                name: entry.action.clone(),
                title: entry.title.clone(),
                navigation_url: try_resolve(&entry.navigate),
                icon_url: try_resolve(&entry.icon),
            })
            .collect();

        if options.actions.len() > self.max_actions {
            log::debug!(
                "Skipping {} action(s) beyond the supported maximum of {}",
                options.actions.len() - self.max_actions,
                self.max_actions
            );
        }

        Ok(NotificationRecord {
            title: title.into(),
            direction: options.dir,
            language: options.lang.clone(),
            body: options.body.clone(),
            navigation_url: try_resolve(&options.navigate),
            tag: options.tag.clone(),
            data,
            timestamp: options.timestamp.unwrap_or(fallback_timestamp),
            origin,
            renotify_preference: options.renotify,
            silent_preference: options.silent,
            require_interaction_preference: options.require_interaction,
            image_url: try_resolve(&options.image),
            icon_url: try_resolve(&options.icon),
            badge_url: try_resolve(&options.badge),
            vibration_pattern: options
                .vibrate
                .as_ref()
                .map(|pattern| normalize_vibration_pattern(pattern.as_slice()))
                .unwrap_or_default(),
            actions,
        })
    }

    /// Create a notification record using the origin, base URL and clock of `context`.
    pub fn build_with_context(
        &self,
        title: impl Into<String>,
        options: &NotificationOptions,
        context: &dyn ExecutionContext,
    ) -> Result<NotificationRecord, NotificationError> {
        let origin = context.origin();
        let base_url = context.api_base_url();
        let fallback_timestamp = round_wall_time(context.current_wall_time());

        self.build(title, options, origin, &base_url, fallback_timestamp)
    }

    /// Constructor entry point of the `Notification` interface.
    ///
    /// Rejects service worker scopes and any actions before building.
    pub fn construct(
        &self,
        title: impl Into<String>,
        options: &NotificationOptions,
        context: &dyn ExecutionContext,
    ) -> Result<Notification, NotificationError> {
        if context.global_scope() == GlobalScope::ServiceWorker {
            return Err(NotificationError::ServiceWorkerScope);
        }

        if !options.actions.is_empty() {
            return Err(NotificationError::ActionsNotSupported {
                count: options.actions.len(),
            });
        }

        let record = self.build_with_context(title, options, context)?;
        Ok(Notification::new(record))
    }
}

/// Clamp each entry and truncate the pattern to the supported length.
pub fn normalize_vibration_pattern(pattern: &[u32]) -> Vec<u32> {
    pattern
        .iter()
        .take(MAX_VIBRATE_ENTRIES)
        .map(|&ms| ms.min(MAX_VIBRATE_DURATION_MS))
        .collect()
}

/// Round a wall time in milliseconds to the nearest whole millisecond.
fn round_wall_time(ms: f64) -> EpochTimeStamp {
    if ms.is_finite() && ms > 0.0 {
        ms.round() as EpochTimeStamp
    } else {
        0
    }
}
