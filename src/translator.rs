//! Document assembly: the public entry point of the crate.
//!
//! Wraps the flattened path mapping produced by the tree walker with the
//! document envelope, and wires globally shared header parameters into every
//! generated operation by reference.

use crate::error::Result;
use crate::openapi::{Components, Info, OpenApiDocument, Parameter, ParameterOrRef};
use crate::router::RouterNode;
use crate::tree_walker;
use indexmap::IndexMap;
use log::{debug, info};

/// Inputs to [`translate`].
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    /// Title placed in the document's info block
    pub api_title: String,
    /// Version placed in the document's info block
    pub api_version: String,
    /// Plain string prefix prepended verbatim to every generated path.
    /// No normalization happens; supply `"/api"` or leave empty.
    pub base_path: String,
    /// The router tree to translate
    pub router: RouterNode,
    /// Header parameters shared by reference across every generated
    /// operation. The raw definitions land under `components.parameters`.
    pub global_headers: Option<IndexMap<String, Parameter>>,
}

impl TranslateOptions {
    /// Options with an empty base path and no global headers
    pub fn new(
        api_title: impl Into<String>,
        api_version: impl Into<String>,
        router: RouterNode,
    ) -> Self {
        Self {
            api_title: api_title.into(),
            api_version: api_version.into(),
            base_path: String::new(),
            router,
            global_headers: None,
        }
    }

    /// Set the path prefix
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Set the globally injected header parameters
    pub fn with_global_headers(mut self, headers: IndexMap<String, Parameter>) -> Self {
        self.global_headers = Some(headers);
        self
    }
}

/// Translate a router tree into an OpenAPI 3.1 document.
///
/// Pure transformation: every call builds a fresh document and leaves its
/// inputs untouched. Fails only when the schema collaborator does.
pub fn translate(options: TranslateOptions) -> Result<OpenApiDocument> {
    let TranslateOptions {
        api_title,
        api_version,
        base_path,
        router,
        global_headers,
    } = options;

    let header_references: Option<Vec<ParameterOrRef>> = global_headers.as_ref().map(|headers| {
        headers
            .keys()
            .map(|key| ParameterOrRef::Reference {
                reference: format!("#/components/parameters/{}", key),
            })
            .collect()
    });

    debug!("Translating router tree for '{}'", api_title);
    let paths = tree_walker::walk(&base_path, &router, header_references.as_deref())?;
    info!("Translated {} path(s) for '{}'", paths.len(), api_title);

    Ok(OpenApiDocument {
        openapi: "3.1.0".to_string(),
        info: Info {
            title: api_title,
            version: api_version,
        },
        paths,
        components: Components {
            parameters: global_headers,
        },
    })
}
