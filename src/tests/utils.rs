use crate::db::connection::{init_db, Database};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// Initialize a fresh test DB in its own temp file
pub fn init_test_db(label: &str) -> Database {
    let path = std::env::temp_dir().join(format!(
        "{label}_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path);

    init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));

    db
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(method: Method, uri: &str, json: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .header("Content-Length", json.len().to_string())
        .body(Body::from(json.to_string()))
        .unwrap()
}

pub fn body_json(resp: Response) -> serde_json::Value {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    serde_json::from_str(&body).unwrap_or_else(|e| panic!("body was not JSON ({e}): {body}"))
}

pub fn body_text(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
