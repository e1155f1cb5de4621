use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, Response, ResponseBuilder};
use http::HeaderValue;

pub const ALLOW_METHODS: &str = "GET, POST, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Answer a CORS preflight.
pub fn preflight_response() -> ResultResp {
    ResponseBuilder::new()
        .status(204)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", ALLOW_METHODS)
        .header("Access-Control-Allow-Headers", ALLOW_HEADERS)
        .body(Body::empty())
        .map_err(|e| ServerError::Internal(e.to_string()))
}

/// Any origin may read any response.
pub fn with_cors(mut resp: Response) -> Response {
    resp.headers_mut().insert(
        "Access-Control-Allow-Origin",
        HeaderValue::from_static("*"),
    );
    resp
}
