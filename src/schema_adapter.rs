//! Boundary to the schema-conversion collaborator.
//!
//! Procedures declare their input as an opaque [`SchemaHandle`]; this module
//! turns a handle into the JSON Schema fragment that gets embedded in the
//! generated document. Handles are either derived from a Rust type through
//! [`schemars`] or wrap a pre-converted fragment supplied by the caller.
//!
//! Every converted fragment carries a draft-07 `$schema` tag, matching what
//! downstream OpenAPI 3.1 tooling expects on these embedded schemas.

use crate::error::Result;
use schemars::schema::RootSchema;
use schemars::JsonSchema;
use serde_json::Value;

/// The `$schema` URI stamped on every converted fragment
pub const DRAFT_07_SCHEMA: &str = "http://json-schema.org/draft-07/schema#";

/// A procedure's declared input schema, held until document generation
/// needs the converted JSON Schema fragment.
#[derive(Debug, Clone)]
pub enum SchemaHandle {
    /// Root schema derived from a Rust type
    Generated(RootSchema),
    /// Pre-converted JSON Schema fragment supplied by the caller
    Raw(Value),
}

impl SchemaHandle {
    /// Derive a handle from a Rust type implementing [`JsonSchema`]
    pub fn of<T: JsonSchema>() -> Self {
        SchemaHandle::Generated(schemars::schema_for!(T))
    }

    /// Wrap an already-converted JSON Schema fragment
    pub fn from_value(value: Value) -> Self {
        SchemaHandle::Raw(value)
    }
}

/// Convert a handle into its JSON Schema fragment.
///
/// Object fragments without a `$schema` tag are stamped with draft-07; an
/// existing tag is left alone. Conversion failures are returned to the
/// caller untouched.
pub fn to_json_schema(handle: &SchemaHandle) -> Result<Value> {
    let mut fragment = match handle {
        SchemaHandle::Generated(root) => serde_json::to_value(root)?,
        SchemaHandle::Raw(value) => value.clone(),
    };

    if let Value::Object(object) = &mut fragment {
        object
            .entry("$schema")
            .or_insert_with(|| Value::String(DRAFT_07_SCHEMA.to_string()));
    }

    Ok(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(JsonSchema)]
    #[allow(dead_code)]
    struct Thing {
        name: String,
        count: Option<u32>,
    }

    #[test]
    fn test_generated_handle_carries_draft_07_tag() {
        let handle = SchemaHandle::of::<Thing>();
        let fragment = to_json_schema(&handle).unwrap();

        assert_eq!(fragment["$schema"], DRAFT_07_SCHEMA);
        assert_eq!(fragment["type"], "object");
    }

    #[test]
    fn test_generated_handle_describes_fields() {
        let handle = SchemaHandle::of::<Thing>();
        let fragment = to_json_schema(&handle).unwrap();

        assert_eq!(fragment["properties"]["name"]["type"], "string");
        let required = fragment["required"].as_array().unwrap();
        assert!(required.contains(&json!("name")));
        assert!(!required.contains(&json!("count")));
    }

    #[test]
    fn test_raw_handle_without_tag_is_stamped() {
        let handle = SchemaHandle::from_value(json!({ "type": "string" }));
        let fragment = to_json_schema(&handle).unwrap();

        assert_eq!(
            fragment,
            json!({ "type": "string", "$schema": DRAFT_07_SCHEMA })
        );
    }

    #[test]
    fn test_raw_handle_keeps_existing_tag() {
        let handle = SchemaHandle::from_value(json!({
            "type": "integer",
            "$schema": "https://json-schema.org/draft/2020-12/schema",
        }));
        let fragment = to_json_schema(&handle).unwrap();

        assert_eq!(
            fragment["$schema"],
            "https://json-schema.org/draft/2020-12/schema"
        );
    }

    #[test]
    fn test_non_object_fragment_passes_through() {
        let handle = SchemaHandle::from_value(json!(true));
        let fragment = to_json_schema(&handle).unwrap();

        assert_eq!(fragment, json!(true));
    }
}
