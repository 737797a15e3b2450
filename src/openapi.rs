//! Serde representations of the emitted OpenAPI 3.1 document.
//!
//! Only the subset of OpenAPI this translation can produce is modeled: one
//! GET or POST operation per path, `content`-wrapped parameters and request
//! bodies, and a components section holding shared header parameters.
//! Embedded schema fragments stay as raw [`Value`]s since they come from the
//! schema collaborator already converted.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Complete OpenAPI document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version tag
    pub openapi: String,
    /// API info
    pub info: Info,
    /// API paths, in router declaration order
    pub paths: IndexMap<String, PathItem>,
    /// Shared component definitions; serialized even when empty
    pub components: Components,
}

/// OpenAPI Info object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    /// API title
    pub title: String,
    /// API version
    pub version: String,
}

/// All operations generated for a single path.
///
/// Read procedures land in `get`, write procedures in `post`; no other
/// methods are ever generated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathItem {
    /// GET operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,
    /// POST operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,
}

/// The HTTP methods a procedure can translate to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// OpenAPI Operation object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// The procedure's fully-qualified dotted name
    #[serde(rename = "operationId")]
    pub operation_id: String,
    /// Parameters: the `input` query parameter (if any) followed by
    /// references to global header parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<ParameterOrRef>>,
    /// Request body for write-kind procedures with a declared input
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
}

/// A parameter given inline or by `$ref` into `components.parameters`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterOrRef {
    /// Reference to a shared parameter definition
    Reference {
        #[serde(rename = "$ref")]
        reference: String,
    },
    /// Inline parameter definition
    Parameter(Parameter),
}

/// OpenAPI Parameter object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    /// Wire name of the parameter
    pub name: String,
    /// Parameter location
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Whether the parameter must be present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Plain schema, used by header parameter definitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
    /// Content-wrapped schema, used by the JSON-encoded `input` parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
}

/// The location a parameter value is carried in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    Cookie,
}

/// OpenAPI RequestBody object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestBody {
    /// Whether the request body must be present
    pub required: bool,
    /// Content types and their schemas
    pub content: IndexMap<String, MediaType>,
}

/// OpenAPI MediaType object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaType {
    /// JSON Schema fragment for this media type
    pub schema: Value,
}

/// OpenAPI Components object
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Components {
    /// Shared parameter definitions, keyed by reference name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<IndexMap<String, Parameter>>,
}

impl Parameter {
    /// Create a header parameter definition for `components.parameters`
    pub fn header(name: impl Into<String>, schema: Value, required: bool) -> Self {
        Self {
            name: name.into(),
            location: ParameterLocation::Header,
            required: Some(required),
            schema: Some(schema),
            content: None,
        }
    }
}
