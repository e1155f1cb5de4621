// src/domain/property.rs

use serde::{Deserialize, Serialize};

/// A listed property as exposed to callers.
///
/// `images` and `documents` are always sequences and `available_for_visit`
/// is always a boolean, whatever the stored column held.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub name: Option<String>,
    pub address: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub images: Vec<String>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
    pub owner_phone: Option<String>,
    pub documents: Vec<String>,
    pub available_for_visit: bool,
}

/// Body of a create request. Every field is optional on the wire; the
/// server stores what it is given. Any client-supplied `id` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_for_visit: Option<bool>,
}

impl NewProperty {
    pub fn images(&self) -> &[String] {
        self.images.as_deref().unwrap_or_default()
    }

    pub fn documents(&self) -> &[String] {
        self.documents.as_deref().unwrap_or_default()
    }

    /// Visits are allowed unless the caller explicitly said otherwise.
    pub fn available_for_visit(&self) -> bool {
        self.available_for_visit.unwrap_or(true)
    }
}

/// Raw `properties` row before the composite columns are decoded.
#[derive(Debug, Clone, Default)]
pub struct PropertyRow {
    pub id: i64,
    pub name: Option<String>,
    pub address: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub images: Option<String>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
    pub owner_phone: Option<String>,
    pub documents: Option<String>,
    pub available_for_visit: Option<i64>,
}
