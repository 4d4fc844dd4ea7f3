use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use photogroups_shared::{ApiError, AppConfig, MemoryStore, Record, RecordStore, UploadSigner};

pub const GROUPS: &str = "Groups-test";
pub const IMAGES: &str = "Images-test";
pub const BUCKET: &str = "photos-test";

pub fn config() -> AppConfig {
    AppConfig {
        groups_table: GROUPS.to_string(),
        images_table: IMAGES.to_string(),
        images_bucket: BUCKET.to_string(),
        signed_url_expiration: Duration::from_secs(300),
    }
}

pub fn store() -> MemoryStore {
    MemoryStore::new()
        .with_table(GROUPS, "id")
        .with_table(IMAGES, "imageId")
}

pub fn record(value: serde_json::Value) -> Record {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

/// Signs nothing; returns a URL shaped like S3's and remembers each call.
#[derive(Default)]
pub struct RecordingSigner {
    pub calls: Mutex<Vec<(String, String, Duration)>>,
}

#[async_trait]
impl UploadSigner for RecordingSigner {
    async fn presign_put(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, ApiError> {
        self.calls
            .lock()
            .push((bucket.to_string(), key.to_string(), expires_in));
        Ok(format!(
            "https://{}.s3.amazonaws.com/{}?X-Amz-Expires={}&X-Amz-Signature=test",
            bucket,
            key,
            expires_in.as_secs()
        ))
    }
}

pub struct FailingSigner;

#[async_trait]
impl UploadSigner for FailingSigner {
    async fn presign_put(&self, _: &str, _: &str, _: Duration) -> Result<String, ApiError> {
        Err(ApiError::Presign("credentials expired".to_string()))
    }
}

/// Store whose every call fails like an unreachable DynamoDB endpoint.
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn get_item(&self, _: &str, _: &str, _: &str) -> Result<Option<Record>, ApiError> {
        Err(ApiError::store("get_item", "dispatch failure"))
    }

    async fn put_item(&self, _: &str, _: Record) -> Result<(), ApiError> {
        Err(ApiError::store("put_item", "dispatch failure"))
    }
}
