use lambda_http::{http::StatusCode, Body, Error, Response};
use photogroups_shared::response::json_response;
use photogroups_shared::{AppConfig, RecordStore};

use super::model::CreateGroupResponse;
use super::service::create_group;

/// HTTP Handler: POST /groups
pub async fn create_group_handler(
    store: &dyn RecordStore,
    config: &AppConfig,
    body: &[u8],
) -> Result<Response<Body>, Error> {
    tracing::info!(
        "📥 create_group_handler: table={}, raw_body={}",
        config.groups_table,
        String::from_utf8_lossy(body),
    );

    match create_group(store, &config.groups_table, body).await {
        Ok(new_item) => {
            tracing::info!(
                "✅ create_group_handler success: id={}",
                new_item.get("id").unwrap_or(&serde_json::Value::Null),
            );
            json_response(StatusCode::OK, &CreateGroupResponse { new_item })
        }
        Err(e) => {
            tracing::error!(
                "❌ create_group_handler failed: table={}, error={}",
                config.groups_table,
                e
            );
            e.into_response()
        }
    }
}
