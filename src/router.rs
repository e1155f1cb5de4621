use crate::db::properties;
use crate::db::Database;
use crate::domain::property::NewProperty;
use crate::errors::ServerError;
use crate::responses::{
    error_to_response, html_response, json_response, preflight_response, with_cors, ResultResp,
};
use crate::templates;
use astra::{Request, Response};
use http::header::CONTENT_LENGTH;
use serde_json::json;
use std::io::Read;

const API_BASE: &str = "/api/properties";

/// Inbound body cap; bounds memory used by embedded image data.
pub const MAX_BODY_BYTES: u64 = 10 * 1024 * 1024;

/// Entry point used by the server loop: dispatches, renders errors as JSON,
/// attaches CORS headers and logs the outcome.
pub fn respond(req: Request, db: &Database) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let resp = match handle(req, db) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    };

    tracing::info!(%method, %path, status = resp.status().as_u16(), "request");
    with_cors(resp)
}

pub fn handle(req: Request, db: &Database) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().trim_end_matches('/').to_owned();

    if method == "OPTIONS" {
        return preflight_response();
    }

    match (method.as_str(), path.as_str()) {
        ("GET", "") => html_response(templates::pages::home_page()),

        ("GET", API_BASE) => list_properties(db),
        ("POST", API_BASE) => create_property(req, db),
        (_, API_BASE) => Err(ServerError::MethodNotAllowed),

        (method, path) => match property_id_segment(path) {
            Some(raw_id) => match method {
                "GET" => get_property(db, raw_id),
                "DELETE" => delete_property(db, raw_id),
                _ => Err(ServerError::MethodNotAllowed),
            },
            None => Err(ServerError::NotFound("Not Found".into())),
        },
    }
}

/// `/api/properties/{id}` -> `Some("{id}")`
fn property_id_segment(path: &str) -> Option<&str> {
    path.strip_prefix(API_BASE)?
        .strip_prefix('/')
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
}

/// An id that is not an integer can never match a row.
fn parse_id(raw: &str) -> Result<i64, ServerError> {
    raw.parse::<i64>()
        .map_err(|_| ServerError::property_not_found())
}

fn list_properties(db: &Database) -> ResultResp {
    let all = properties::get_all(db)?;
    for prop in &all {
        tracing::debug!(
            property_id = prop.id,
            images = prop.images.len(),
            "retrieved property"
        );
    }
    json_response(&all)
}

fn get_property(db: &Database, raw_id: &str) -> ResultResp {
    let id = parse_id(raw_id)?;
    let prop = properties::get_by_id(db, id)?;
    json_response(&prop)
}

fn create_property(mut req: Request, db: &Database) -> ResultResp {
    let body = read_body(&mut req)?;
    tracing::info!(bytes = body.len(), "create property request body");

    let new_prop: NewProperty = if body.iter().all(u8::is_ascii_whitespace) {
        NewProperty::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ServerError::BadRequest(format!("invalid JSON body: {e}")))?
    };

    tracing::info!(
        name = new_prop.name.as_deref().unwrap_or_default(),
        images = new_prop.images().len(),
        documents = new_prop.documents().len(),
        available_for_visit = new_prop.available_for_visit(),
        "received property"
    );

    let id = properties::insert(db, &new_prop)?;
    tracing::info!(property_id = id, "inserted property");

    // Not atomic with a concurrent delete of the same id; that race
    // surfaces as a 404 here.
    let created = properties::get_by_id(db, id)?;
    json_response(&created)
}

fn delete_property(db: &Database, raw_id: &str) -> ResultResp {
    let id = parse_id(raw_id)?;
    if properties::delete_by_id(db, id)? == 0 {
        return Err(ServerError::property_not_found());
    }

    tracing::info!(property_id = id, "deleted property");
    json_response(&json!({ "message": "Property deleted successfully" }))
}

/// Reads the request body, rejecting anything over `MAX_BODY_BYTES`.
/// A declared `Content-Length` is checked before any byte is read.
fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let declared = req
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());

    if let Some(len) = declared {
        tracing::info!(content_length = len, "incoming request");
        if len > MAX_BODY_BYTES {
            return Err(ServerError::PayloadTooLarge);
        }
    }

    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("failed to read request body: {e}")))?;

    if buf.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::PayloadTooLarge);
    }
    Ok(buf)
}
