use crate::domain::model::DealershipConfig;
use crate::utils::error::{FormatterError, Result};
use serde_json::Value;

/// Decodes a webhook payload. The top level is either one dealership object
/// or an array of them.
pub fn parse_dealerships(raw: &str) -> Result<Vec<DealershipConfig>> {
    let data: Value = serde_json::from_str(raw)?;

    match data {
        Value::Object(fields) => Ok(vec![DealershipConfig::new(fields)]),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(fields) => Ok(DealershipConfig::new(fields)),
                other => Err(FormatterError::schema(format!(
                    "Dealership entry {} must be an object, got {}",
                    index + 1,
                    other
                ))),
            })
            .collect(),
        _ => Err(FormatterError::schema(
            "Top-level JSON must be an object or an array of objects.",
        )),
    }
}
