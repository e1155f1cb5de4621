use crate::client::error::ClientError;
use crate::domain::property::NewProperty;

/// Checks the required fields before a create is sent: name and address
/// must be non-empty after trimming and price must be strictly positive.
pub fn validate(prop: &NewProperty) -> Result<(), ClientError> {
    let blank = |field: &Option<String>| field.as_deref().map_or(true, |s| s.trim().is_empty());

    if blank(&prop.name) {
        return Err(ClientError::Validation("name is required".into()));
    }
    if blank(&prop.address) {
        return Err(ClientError::Validation("address is required".into()));
    }
    match prop.price {
        Some(price) if price > 0.0 && price.is_finite() => Ok(()),
        Some(_) => Err(ClientError::Validation(
            "price must be greater than 0".into(),
        )),
        None => Err(ClientError::Validation("price is required".into())),
    }
}
