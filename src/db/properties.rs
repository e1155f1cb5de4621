use crate::db::connection::Database;
use crate::domain::property::{NewProperty, Property, PropertyRow};
use crate::errors::ServerError;
use rusqlite::{params, OptionalExtension, Row};

const SELECT_COLUMNS: &str = r#"
    SELECT
        id, name, address, price, description, images,
        owner_name, owner_email, owner_phone, documents, available_for_visit
    FROM properties
"#;

/// Inserts a new property and returns the id the database assigned.
///
/// `images` and `documents` are stored as JSON array text; a missing list
/// is stored as `[]`, never NULL.
pub fn insert(db: &Database, prop: &NewProperty) -> Result<i64, ServerError> {
    let images = encode_sequence(prop.images())?;
    let documents = encode_sequence(prop.documents())?;
    let visit_flag: i64 = if prop.available_for_visit() { 1 } else { 0 };

    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO properties (
                name, address, price, description, images,
                owner_name, owner_email, owner_phone, documents, available_for_visit
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                &prop.name,
                &prop.address,
                &prop.price,
                &prop.description,
                images,
                &prop.owner_name,
                &prop.owner_email,
                &prop.owner_phone,
                documents,
                visit_flag,
            ],
        )
        .map_err(|e| ServerError::Storage(format!("insert property failed: {e}")))?;
        Ok(conn.last_insert_rowid())
    })
}

/// Fetches one property, or `NotFound` if the id matches no row.
pub fn get_by_id(db: &Database, id: i64) -> Result<Property, ServerError> {
    let row = db.with_conn(|conn| {
        conn.query_row(
            &format!("{SELECT_COLUMNS} WHERE id = ?1"),
            params![id],
            read_row,
        )
        .optional()
        .map_err(ServerError::from)
    })?;

    row.map(decode).ok_or_else(ServerError::property_not_found)
}

/// Fetches every property. No ordering is applied.
pub fn get_all(db: &Database) -> Result<Vec<Property>, ServerError> {
    let rows = db.with_conn(|conn| {
        let mut stmt = conn.prepare(SELECT_COLUMNS)?;
        let rows = stmt.query_map([], read_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    })?;

    Ok(rows.into_iter().map(decode).collect())
}

/// Hard-deletes a property. Returns the number of rows removed (0 or 1).
pub fn delete_by_id(db: &Database, id: i64) -> Result<usize, ServerError> {
    db.with_conn(|conn| {
        conn.execute("DELETE FROM properties WHERE id = ?1", params![id])
            .map_err(ServerError::from)
    })
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<PropertyRow> {
    Ok(PropertyRow {
        id: row.get("id")?,
        name: row.get("name")?,
        address: row.get("address")?,
        price: row.get("price")?,
        description: row.get("description")?,
        images: row.get("images")?,
        owner_name: row.get("owner_name")?,
        owner_email: row.get("owner_email")?,
        owner_phone: row.get("owner_phone")?,
        documents: row.get("documents")?,
        available_for_visit: row.get("available_for_visit")?,
    })
}

/// Turns a raw row into a `Property`.
///
/// A list column that cannot be parsed decodes to an empty list and is
/// logged; it never fails the read.
pub fn decode(row: PropertyRow) -> Property {
    let images = decode_sequence(row.id, "images", row.images.as_deref());
    let documents = decode_sequence(row.id, "documents", row.documents.as_deref());

    Property {
        id: row.id,
        name: row.name,
        address: row.address,
        price: row.price,
        description: row.description,
        images,
        owner_name: row.owner_name,
        owner_email: row.owner_email,
        owner_phone: row.owner_phone,
        documents,
        // NULL falls back to the column default.
        available_for_visit: row.available_for_visit.map_or(true, |flag| flag == 1),
    }
}

pub fn encode_sequence(items: &[String]) -> Result<String, ServerError> {
    Ok(serde_json::to_string(items)?)
}

pub fn decode_sequence(id: i64, field: &str, raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        tracing::warn!(property_id = id, field, "stored list is NULL, using empty list");
        return Vec::new();
    };

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(property_id = id, field, error = %e, "error parsing stored list, using empty list");
            Vec::new()
        }
    }
}
