use lambda_http::{http::StatusCode, Body, Error, Response};
use photogroups_shared::response::json_response;
use photogroups_shared::{ApiError, AppConfig, RecordStore, UploadSigner};

use super::service::create_image;

/// HTTP Handler: POST /groups/{groupId}/images
pub async fn create_image_handler(
    store: &dyn RecordStore,
    signer: &dyn UploadSigner,
    config: &AppConfig,
    group_id: &str,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    tracing::info!(
        "📥 create_image_handler: table={}, group_id={}, raw_body={}",
        config.images_table,
        group_id,
        String::from_utf8_lossy(body),
    );

    match create_image(store, signer, config, group_id, body).await {
        Ok(created) => {
            tracing::info!(
                "✅ create_image_handler success: group_id={}, image_id={}",
                group_id,
                created
                    .new_item
                    .get("imageId")
                    .unwrap_or(&serde_json::Value::Null),
            );
            json_response(StatusCode::CREATED, &created)
        }
        Err(e @ ApiError::NotFound(_)) => {
            tracing::warn!("⚠️ create_image_handler: group {} does not exist", group_id);
            e.into_response()
        }
        Err(e) => {
            tracing::error!(
                "❌ create_image_handler failed: group_id={}, error={}",
                group_id,
                e
            );
            e.into_response()
        }
    }
}
