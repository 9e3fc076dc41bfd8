//! JSON Schema generation for the configuration file.

use crate::config::DisappearConfig;
use crate::constants::SCHEMA_ID;

/// Generates a JSON Schema for the Disappear configuration.
///
/// The schema includes all configuration options with their types,
/// descriptions, and default values.
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(DisappearConfig);

    // Add $id for proper schema identification
    if let Some(obj) = schema.as_object_mut() {
        obj.insert("$id".to_string(), serde_json::json!(SCHEMA_ID));
    }

    schema
}

/// Generates a pretty-printed JSON Schema string for the configuration.
#[must_use]
pub fn generate_schema_json() -> String {
    let schema = generate_schema();
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_schema_produces_valid_json() {
        let schema_json = generate_schema_json();
        let parsed: serde_json::Value = serde_json::from_str(&schema_json).unwrap();

        assert!(parsed["$id"].as_str().unwrap().ends_with("disappear.schema.json"));
        assert_eq!(parsed["$schema"], "https://json-schema.org/draft/2020-12/schema");
        assert_eq!(parsed["title"], "DisappearConfig");
        assert!(parsed["properties"]["blacklist"].is_object());
        assert!(parsed["properties"]["duration"].is_object());
        assert!(parsed["properties"]["transform"].is_object());
    }

    #[test]
    fn test_schema_contains_transform_variants() {
        let schema_json = generate_schema_json();
        assert!(schema_json.contains("recede"));
        assert!(schema_json.contains("shrink"));
    }

    #[test]
    fn test_schema_json_is_pretty_printed() {
        assert!(generate_schema_json().contains('\n'));
    }
}
