pub mod cors;
pub mod errors;
pub mod html;
pub mod json;

pub use cors::{preflight_response, with_cors};
pub use errors::{error_to_response, json_error_response, ResultResp};
pub use html::html_response;
pub use json::json_response;
