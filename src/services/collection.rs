use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AppError, Result};

/// Take the `items` array of a named collection out of a GraphQL `data`
/// envelope and deserialize every item
pub fn extract_collection<T: DeserializeOwned>(data: &mut Value, key: &str) -> Result<Vec<T>> {
    let items = data
        .get_mut(key)
        .and_then(|collection| collection.get_mut("items"))
        .map(Value::take)
        .ok_or_else(|| AppError::ShapeMismatch(format!("missing '{}.items' in response", key)))?;

    if !items.is_array() {
        return Err(AppError::ShapeMismatch(format!(
            "'{}.items' is not a list",
            key
        )));
    }

    serde_json::from_value(items)
        .map_err(|e| AppError::ShapeMismatch(format!("invalid item in '{}': {}", key, e)))
}

/// First item of a named collection, if there is one
pub fn extract_collection_item<T: DeserializeOwned>(
    data: &mut Value,
    key: &str,
) -> Result<Option<T>> {
    Ok(extract_collection(data, key)?.into_iter().next())
}
