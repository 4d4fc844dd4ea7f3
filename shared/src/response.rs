use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

pub const ALLOW_ORIGIN: &str = "*";

/// JSON response with the headers every endpoint returns.
pub fn json_response<T: Serialize + ?Sized>(
    status: StatusCode,
    body: &T,
) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .body(serde_json::to_string(body)?.into())
        .map_err(Box::new)?)
}

/// Empty 200 for CORS preflight requests.
pub fn preflight() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .header("Access-Control-Allow-Methods", "POST,OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type,Authorization")
        .body(Body::Empty)
        .map_err(Box::new)?)
}

pub fn not_found() -> Result<Response<Body>, Error> {
    json_response(
        StatusCode::NOT_FOUND,
        &serde_json::json!({ "error": "Not found" }),
    )
}
