use std::borrow::Cow;
use std::sync::Arc;

use lambda_http::{http::Method, Body, Error, Request, RequestExt, Response};
use percent_encoding::percent_decode_str;
use photogroups_atoms::{groups, images};
use photogroups_shared::{response, ApiError, AppState};

/// Main Lambda handler - routes requests to the group and image endpoints
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    let body = event.body();
    tracing::info!("🚀 Photo groups API invoked - Method: {} Path: {}", method, path);

    // Handle CORS preflight
    if method == Method::OPTIONS {
        return response::preflight();
    }

    let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method, parts.as_slice()) {
        // POST /groups - create group
        (&Method::POST, ["groups"]) => {
            groups::create_group_handler(state.store.as_ref(), &state.config, body).await
        }
        // POST /groups/{groupId}/images - create image + upload URL
        (&Method::POST, ["groups", path_group_id, "images"]) => {
            // API Gateway decodes its path parameters; the raw segment needs the same.
            let group_id = match event
                .path_parameters_ref()
                .and_then(|params| params.first("groupId"))
            {
                Some(group_id) => Cow::Borrowed(group_id),
                None => match percent_decode_str(path_group_id).decode_utf8() {
                    Ok(group_id) => group_id,
                    Err(e) => {
                        return ApiError::BadRequest(format!("Invalid groupId in path: {}", e))
                            .into_response()
                    }
                },
            };

            images::create_image_handler(
                state.store.as_ref(),
                state.signer.as_ref(),
                &state.config,
                &group_id,
                body,
            )
            .await
        }
        _ => {
            tracing::warn!("⚠️ No route matched - Method: {} Path: {}", method, path);
            response::not_found()
        }
    }
}
