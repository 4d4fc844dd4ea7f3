pub mod attributes;
pub mod config;
pub mod error;
pub mod response;
pub mod storage;
pub mod store;

use std::sync::Arc;

use aws_config::SdkConfig;
use aws_sdk_dynamodb::Client as DynamoClient;
use aws_sdk_s3::Client as S3Client;

pub use config::{AppConfig, ConfigError};
pub use error::ApiError;
pub use storage::{public_object_url, S3UploadSigner, UploadSigner};
pub use store::{DynamoStore, MemoryStore, RecordStore};

/// A schema-less stored record.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Everything a request needs, built once per cold start.
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn RecordStore>,
    pub signer: Arc<dyn UploadSigner>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        store: Arc<dyn RecordStore>,
        signer: Arc<dyn UploadSigner>,
    ) -> Self {
        Self {
            config,
            store,
            signer,
        }
    }

    pub fn from_sdk_config(config: AppConfig, sdk_config: &SdkConfig) -> Self {
        Self::new(
            config,
            Arc::new(DynamoStore::new(DynamoClient::new(sdk_config))),
            Arc::new(S3UploadSigner::new(S3Client::new(sdk_config))),
        )
    }
}
