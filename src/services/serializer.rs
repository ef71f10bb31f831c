//! Storage serialization for opaque notification data.

use crate::error::NotificationError;
use crate::models::SerializedData;
use serde_json::Value;

/// Serializes caller data for storage in a record and reads it back.
pub trait StorageSerializer: Send + Sync {
    /// Serialize a value so it can outlive the calling context.
    fn serialize_for_storage(&self, value: &Value) -> Result<SerializedData, NotificationError>;

    /// Deserialize a stored blob. `None` if the blob cannot be read.
    fn deserialize(&self, data: &SerializedData) -> Option<Value>;
}

/// Stores data as JSON bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStorageSerializer;

impl StorageSerializer for JsonStorageSerializer {
    fn serialize_for_storage(&self, value: &Value) -> Result<SerializedData, NotificationError> {
        serde_json::to_vec(value)
            .map(SerializedData::new)
            .map_err(|e| NotificationError::data_clone(e.to_string()))
    }

    fn deserialize(&self, data: &SerializedData) -> Option<Value> {
        match serde_json::from_slice(data.as_bytes()) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Failed to deserialize notification data: {}", e);
                None
            }
        }
    }
}
