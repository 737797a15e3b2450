//! OpenAPI from RPC - Static OpenAPI 3.1 documents from declared RPC routers.
//!
//! This library translates a tree of declared remote procedures into an
//! OpenAPI 3.1 document describing HTTP-reachable equivalents of each
//! procedure: read procedures become GET operations with a JSON-encoded
//! `input` query parameter, write procedures become POST operations with a
//! JSON request body, and streaming procedures are left out. Nested
//! namespaces compose into dotted paths (`/myRouter.getThing`), and globally
//! shared header parameters can be injected into every operation by
//! reference.
//!
//! # Architecture
//!
//! The library is organized into modules that work together:
//!
//! 1. [`router`] - The input data model: the router tree and its procedures
//! 2. [`schema_adapter`] - Converts declared input schemas to JSON Schema fragments
//! 3. [`path_builder`] - Builds one HTTP operation per procedure
//! 4. [`tree_walker`] - Recursively flattens the router tree into path entries
//! 5. [`translator`] - Assembles the complete OpenAPI document
//! 6. [`serializer`] - Serializes the document to YAML or JSON
//!
//! # Example Usage
//!
//! ```
//! use indexmap::IndexMap;
//! use openapi_from_rpc::router::{Procedure, ProcedureKind, RouterNode};
//! use openapi_from_rpc::schema_adapter::SchemaHandle;
//! use openapi_from_rpc::translator::{translate, TranslateOptions};
//!
//! let router = RouterNode::Namespace(IndexMap::from([
//!     (
//!         "createThing".to_string(),
//!         RouterNode::Leaf(
//!             Procedure::new(ProcedureKind::Write).with_input(SchemaHandle::from_value(
//!                 serde_json::json!({
//!                     "type": "object",
//!                     "properties": { "name": { "type": "string" } },
//!                     "required": ["name"],
//!                 }),
//!             )),
//!         ),
//!     ),
//!     (
//!         "getThing".to_string(),
//!         RouterNode::Leaf(Procedure::new(ProcedureKind::Read)),
//!     ),
//! ]));
//!
//! let document = translate(TranslateOptions::new("My API", "1.0", router)).unwrap();
//!
//! assert_eq!(document.openapi, "3.1.0");
//! assert!(document.paths.contains_key("/createThing"));
//! assert!(document.paths["/getThing"].get.is_some());
//! ```

pub mod error;
pub mod router;
pub mod schema_adapter;
pub mod openapi;
pub mod path_builder;
pub mod tree_walker;
pub mod translator;
pub mod serializer;
