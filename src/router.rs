//! Input data model for the router tree consumed from the RPC declaration layer.
//!
//! A router is a named, arbitrarily nested tree whose leaves are procedures.
//! This crate only reads the tree; it is declared and validated elsewhere.
//! Child order is insertion order and carries through to the generated
//! document, which is why children live in an [`IndexMap`].

use crate::schema_adapter::SchemaHandle;
use indexmap::IndexMap;

/// One node of the router tree: either a namespace holding further nodes,
/// or a leaf procedure.
#[derive(Debug, Clone)]
pub enum RouterNode {
    /// Named children in declaration order. Names are unique within one
    /// node's direct children.
    Namespace(IndexMap<String, RouterNode>),
    /// A remote-callable procedure.
    Leaf(Procedure),
}

/// The call semantics of a procedure.
///
/// `Read` and `Write` correspond to query/mutation semantics and map to HTTP
/// methods; `Stream` procedures (subscription semantics) have no HTTP
/// equivalent and are excluded from generated documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureKind {
    Read,
    Write,
    Stream,
}

/// A single remote-callable unit as declared by the RPC framework.
///
/// Procedures are immutable once declared. Only the first entry of `inputs`
/// is ever considered; later entries are ignored.
#[derive(Debug, Clone)]
pub struct Procedure {
    /// Call semantics, decides the HTTP method of the generated operation
    pub kind: ProcedureKind,
    /// Declared input schemas, at most one of which is used
    pub inputs: Vec<SchemaHandle>,
    /// Opt-out flag: `Some(true)` removes the procedure from generated
    /// documents; `Some(false)` and `None` behave identically
    pub ignore: Option<bool>,
}

impl Procedure {
    /// Create a procedure with no inputs and no opt-out flag
    pub fn new(kind: ProcedureKind) -> Self {
        Self {
            kind,
            inputs: Vec::new(),
            ignore: None,
        }
    }

    /// Append a declared input schema
    pub fn with_input(mut self, schema: SchemaHandle) -> Self {
        self.inputs.push(schema);
        self
    }

    /// Set the opt-out flag
    pub fn with_ignore(mut self, ignore: bool) -> Self {
        self.ignore = Some(ignore);
        self
    }
}

impl From<Procedure> for RouterNode {
    fn from(procedure: Procedure) -> Self {
        RouterNode::Leaf(procedure)
    }
}
