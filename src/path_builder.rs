//! Per-procedure operation construction.
//!
//! Decides whether a procedure is emitted at all, which HTTP method it maps
//! to, and where its input schema lands (query parameter vs. request body),
//! then keys the finished operation under `{base_path}/{full_name}`.

use crate::error::Result;
use crate::openapi::{
    HttpMethod, MediaType, Operation, Parameter, ParameterLocation, ParameterOrRef, PathItem,
    RequestBody,
};
use crate::router::{Procedure, ProcedureKind};
use crate::schema_adapter;
use indexmap::IndexMap;
use log::debug;

impl ProcedureKind {
    /// Streaming procedures have no HTTP equivalent and return `None`.
    pub(crate) fn http_method(self) -> Option<HttpMethod> {
        match self {
            ProcedureKind::Read => Some(HttpMethod::Get),
            ProcedureKind::Write => Some(HttpMethod::Post),
            ProcedureKind::Stream => None,
        }
    }
}

/// Build the path entry for a single procedure.
///
/// Returns at most one entry; opted-out and streaming procedures yield an
/// empty map. A declared input is converted through the schema collaborator
/// and placed as a JSON-encoded `input` query parameter (GET) or a required
/// JSON request body (POST). `extra_parameters` holds the global header
/// references shared by every operation.
pub fn build_operations(
    base_path: &str,
    full_name: &str,
    procedure: &Procedure,
    extra_parameters: Option<&[ParameterOrRef]>,
) -> Result<IndexMap<String, PathItem>> {
    let mut paths = IndexMap::new();

    if procedure.ignore == Some(true) {
        debug!("Skipping opted-out procedure: {}", full_name);
        return Ok(paths);
    }

    let Some(method) = procedure.kind.http_method() else {
        debug!("Skipping streaming procedure: {}", full_name);
        return Ok(paths);
    };

    let mut operation = Operation {
        operation_id: full_name.to_string(),
        parameters: None,
        request_body: None,
    };

    let mut parameters: Vec<ParameterOrRef> = Vec::new();

    // Only the first declared input counts; later ones are dropped.
    if let Some(input) = procedure.inputs.first() {
        let schema = schema_adapter::to_json_schema(input)?;
        let content = IndexMap::from([("application/json".to_string(), MediaType { schema })]);

        match method {
            HttpMethod::Get => {
                // The whole input travels as one JSON-encoded query parameter,
                // not as a flat query-string encoding.
                parameters.push(ParameterOrRef::Parameter(Parameter {
                    name: "input".to_string(),
                    location: ParameterLocation::Query,
                    required: None,
                    schema: None,
                    content: Some(content),
                }));
            }
            HttpMethod::Post => {
                operation.request_body = Some(RequestBody {
                    required: true,
                    content,
                });
            }
        }
    }

    // Global headers are appended after the input parameter, never prepended.
    if let Some(extra) = extra_parameters {
        parameters.extend(extra.iter().cloned());
    }

    if !parameters.is_empty() {
        operation.parameters = Some(parameters);
    }

    debug!("Emitting {:?} {}/{}", method, base_path, full_name);

    let item = match method {
        HttpMethod::Get => PathItem {
            get: Some(operation),
            post: None,
        },
        HttpMethod::Post => PathItem {
            get: None,
            post: Some(operation),
        },
    };
    paths.insert(format!("{}/{}", base_path, full_name), item);

    Ok(paths)
}
