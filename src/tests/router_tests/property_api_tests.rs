// src/tests/router_tests/property_api_tests.rs

use crate::errors::ServerError;
use crate::router::{handle, respond};
use crate::tests::utils::{body_json, empty_request, init_test_db, json_request};
use http::Method;
use serde_json::{json, Value};

fn create(db: &crate::db::Database, body: &str) -> Value {
    let resp = handle(json_request(Method::POST, "/api/properties", body), db)
        .expect("create should succeed");
    assert_eq!(resp.status(), 200);
    body_json(resp)
}

fn list_ids(db: &crate::db::Database) -> Vec<i64> {
    let resp = handle(empty_request(Method::GET, "/api/properties"), db).unwrap();
    body_json(resp)
        .as_array()
        .expect("list should be a JSON array")
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}

#[test]
fn villa_scenario_create_get_delete() {
    let db = init_test_db("villa_scenario");

    // Step 1: create
    let created = create(
        &db,
        r#"{"name":"Villa A","address":"1 Lake Rd","price":100000}"#,
    );
    let id = created["id"].as_i64().expect("id should be an integer");
    assert_eq!(created["name"], "Villa A");
    assert_eq!(created["address"], "1 Lake Rd");
    assert_eq!(created["price"], 100000.0);
    assert_eq!(created["images"], json!([]));
    assert_eq!(created["documents"], json!([]));
    assert_eq!(created["available_for_visit"], true);

    // Step 2: get returns the identical object
    let resp = handle(empty_request(Method::GET, &format!("/api/properties/{id}")), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(resp), created);

    // Step 3: delete
    let resp = handle(
        empty_request(Method::DELETE, &format!("/api/properties/{id}")),
        &db,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        body_json(resp),
        json!({ "message": "Property deleted successfully" })
    );

    // Step 4: get is now a 404
    let resp = respond(empty_request(Method::GET, &format!("/api/properties/{id}")), &db);
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(resp), json!({ "error": "Property not found" }));
}

#[test]
fn list_is_empty_array_on_fresh_db() {
    let db = init_test_db("list_empty");
    let resp = handle(empty_request(Method::GET, "/api/properties"), &db).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(resp), json!([]));
}

#[test]
fn created_ids_never_appear_in_earlier_lists() {
    let db = init_test_db("unique_ids");
    let body = r#"{"name":"House","address":"2 Hill St","price":5}"#;

    let mut seen = Vec::new();
    for round in 0..5 {
        let before = list_ids(&db);
        let id = create(&db, body)["id"].as_i64().unwrap();
        assert!(!before.contains(&id), "id {id} was already listed");
        assert!(!seen.contains(&id), "id {id} was reused");
        seen.push(id);

        // Delete every other one so reuse would be possible without AUTOINCREMENT
        if round % 2 == 0 {
            handle(empty_request(Method::DELETE, &format!("/api/properties/{id}")), &db).unwrap();
        }
    }
    assert_eq!(list_ids(&db).len(), 2);
}

#[test]
fn full_payload_round_trips() {
    let db = init_test_db("full_payload");
    let payload = json!({
        "name": "Loft",
        "address": "9 Dock Ln",
        "price": 250000.5,
        "description": "Top floor, river view",
        "images": ["data:image/png;base64,iVBORw0KGgo=", "https://example.com/2.jpg"],
        "owner_name": "Sam Doe",
        "owner_email": "sam@example.com",
        "owner_phone": "+1 555 0100",
        "documents": ["https://example.com/floorplan.pdf"],
        "available_for_visit": false
    });

    let created = create(&db, &payload.to_string());
    for key in [
        "name",
        "address",
        "price",
        "description",
        "images",
        "owner_name",
        "owner_email",
        "owner_phone",
        "documents",
        "available_for_visit",
    ] {
        assert_eq!(created[key], payload[key], "field {key} did not round-trip");
    }

    let listed = body_json(handle(empty_request(Method::GET, "/api/properties"), &db).unwrap());
    assert_eq!(listed, json!([created]));
}

#[test]
fn available_for_visit_true_round_trips() {
    let db = init_test_db("visit_true");
    let created = create(
        &db,
        r#"{"name":"A","address":"B","price":1,"available_for_visit":true}"#,
    );
    assert_eq!(created["available_for_visit"], true);
}

#[test]
fn client_supplied_id_is_ignored() {
    let db = init_test_db("client_id");
    let created = create(&db, r#"{"id":999,"name":"A","address":"B","price":1}"#);
    assert_ne!(created["id"], 999);
}

#[test]
fn delete_missing_id_is_not_found() {
    let db = init_test_db("delete_missing");
    let err = handle(empty_request(Method::DELETE, "/api/properties/12345"), &db).err().expect("request should fail");
    assert!(matches!(err, ServerError::NotFound(ref msg) if msg == "Property not found"));

    let resp = respond(empty_request(Method::DELETE, "/api/properties/12345"), &db);
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(resp), json!({ "error": "Property not found" }));
}

#[test]
fn corrupted_stored_lists_are_served_as_empty() {
    let db = init_test_db("corrupted_lists");
    let id = create(
        &db,
        r#"{"name":"A","address":"B","price":1,"images":["x"],"documents":["y"]}"#,
    )["id"]
        .as_i64()
        .unwrap();

    db.with_conn(|conn| {
        conn.execute(
            "UPDATE properties SET images = 'not json', documents = NULL WHERE id = ?1",
            [id],
        )
        .map_err(ServerError::from)
    })
    .unwrap();

    let resp = handle(empty_request(Method::GET, &format!("/api/properties/{id}")), &db).unwrap();
    let got = body_json(resp);
    assert_eq!(got["images"], json!([]));
    assert_eq!(got["documents"], json!([]));
    assert_eq!(got["name"], "A");
}
