//! Blocking client for the property service.
//!
//! Mirrors the four calls the browser front end makes, including the checks
//! it ran before submitting a new property.

pub mod error;
pub mod media;
pub mod validate;

pub use error::ClientError;
pub use media::image_data_uri;
pub use validate::validate;

use crate::domain::property::{NewProperty, Property};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Deserialize)]
struct MessageBody {
    message: String,
}

pub struct PropertyClient {
    base: Url,
    http: Client,
}

impl PropertyClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            base,
            http: Client::new(),
        })
    }

    /// `api/properties` or `api/properties/{id}` resolved against the base URL.
    pub fn endpoint(&self, id: Option<i64>) -> Result<Url, ClientError> {
        let tail = match id {
            Some(id) => format!("api/properties/{id}"),
            None => "api/properties".to_string(),
        };
        Ok(self.base.join(&tail)?)
    }

    pub fn list(&self) -> Result<Vec<Property>, ClientError> {
        let resp = self.http.get(self.endpoint(None)?).send()?;
        read_json(resp)
    }

    pub fn get(&self, id: i64) -> Result<Property, ClientError> {
        let resp = self.http.get(self.endpoint(Some(id))?).send()?;
        read_json(resp)
    }

    /// Validates `prop` locally, then submits it. Returns the stored property
    /// with its assigned id.
    pub fn create(&self, prop: &NewProperty) -> Result<Property, ClientError> {
        validate(prop)?;
        tracing::debug!(
            images = prop.images().len(),
            documents = prop.documents().len(),
            "submitting property"
        );
        let resp = self.http.post(self.endpoint(None)?).json(prop).send()?;
        read_json(resp)
    }

    /// Deletes a property and returns the server's confirmation message.
    pub fn delete(&self, id: i64) -> Result<String, ClientError> {
        let resp = self.http.delete(self.endpoint(Some(id))?).send()?;
        let body: MessageBody = read_json(resp)?;
        Ok(body.message)
    }
}

fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json()?);
    }

    let text = resp.text()?;
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|b| b.error)
        .unwrap_or(text);
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
