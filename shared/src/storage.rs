use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client as S3Client;

use crate::error::ApiError;

/// Issues time-limited upload URLs for single objects.
#[async_trait]
pub trait UploadSigner: Send + Sync {
    async fn presign_put(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, ApiError>;
}

pub struct S3UploadSigner {
    client: S3Client,
}

impl S3UploadSigner {
    pub fn new(client: S3Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UploadSigner for S3UploadSigner {
    async fn presign_put(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, ApiError> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .map_err(|e| ApiError::Presign(e.to_string()))?;

        let request = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| {
                tracing::error!("❌ S3 presign failed: bucket={}, key={}, error={}", bucket, key, e);
                ApiError::Presign(e.to_string())
            })?;

        tracing::debug!("🔑 Presigned PUT for {}/{} ({}s)", bucket, key, expires_in.as_secs());
        Ok(request.uri().to_string())
    }
}

/// Where an uploaded object is publicly addressable. Not checked for existence.
pub fn public_object_url(bucket: &str, key: &str) -> String {
    format!("https://{}.s3.amazonaws.com/{}", bucket, key)
}
