use chrono::{SecondsFormat, Utc};
use photogroups_shared::{public_object_url, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server-assigned fields of an image. Client fields are merged on top.
#[derive(Debug, Clone)]
pub struct ImageRecord {
    pub image_id: String,
    pub group_id: String,
    /// ISO 8601, millisecond precision, `Z` suffix.
    pub timestamp: String,
    pub image_url: String,
}

impl ImageRecord {
    pub fn new(group_id: &str, bucket: &str) -> Self {
        let image_id = uuid::Uuid::new_v4().to_string();
        Self {
            image_url: public_object_url(bucket, &image_id),
            image_id,
            group_id: group_id.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    pub fn into_record(self) -> Record {
        let mut record = Record::new();
        record.insert("imageId".to_string(), Value::String(self.image_id));
        record.insert("groupId".to_string(), Value::String(self.group_id));
        record.insert("timestamp".to_string(), Value::String(self.timestamp));
        record.insert("imageUrl".to_string(), Value::String(self.image_url));
        record
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateImageResponse {
    pub new_item: Record,
    pub upload_url: String,
}
