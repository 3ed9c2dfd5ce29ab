use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{PlannerError, Result};
use crate::models::Catalog;

/// Parse catalog JSON out of free-form generated text.
///
/// Generated responses often wrap the object in prose or code fences, so
/// only the span from the first `{` to the last `}` is parsed. The result is
/// validated against the catalog shape.
pub fn parse_generated_catalog(text: &str) -> Result<Catalog> {
    let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) else {
        return Err(PlannerError::invalid("no JSON object found in catalog text"));
    };
    if end < start {
        return Err(PlannerError::invalid("no JSON object found in catalog text"));
    }

    let value: Value = serde_json::from_str(&text[start..=end])?;
    Catalog::from_json_value(value)
}

/// Load a catalog from a JSON file (raw generated text is accepted too).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    parse_generated_catalog(&content)
}

/// Save a catalog as pretty-printed JSON.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &Catalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}
