//! Recursive descent over the router tree.
//!
//! Flattens the nested namespace structure into one path entry per leaf
//! procedure, composing fully-qualified names by dot-joining namespace names
//! at every depth. Namespaces themselves never emit a path.

use crate::error::Result;
use crate::openapi::{ParameterOrRef, PathItem};
use crate::path_builder;
use crate::router::RouterNode;
use indexmap::IndexMap;
use log::debug;

/// Walk a router tree and collect the path entries of every reachable
/// procedure, in declaration order.
pub fn walk(
    base_path: &str,
    node: &RouterNode,
    extra_parameters: Option<&[ParameterOrRef]>,
) -> Result<IndexMap<String, PathItem>> {
    match node {
        RouterNode::Namespace(children) => {
            walk_children(base_path, "", children, extra_parameters)
        }
        // A procedure at the root has no name to address it by.
        RouterNode::Leaf(_) => Ok(IndexMap::new()),
    }
}

fn walk_children(
    base_path: &str,
    prefix: &str,
    children: &IndexMap<String, RouterNode>,
    extra_parameters: Option<&[ParameterOrRef]>,
) -> Result<IndexMap<String, PathItem>> {
    let mut paths = IndexMap::new();

    for (name, child) in children {
        let full_name = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };

        let entries = match child {
            RouterNode::Leaf(procedure) => {
                path_builder::build_operations(base_path, &full_name, procedure, extra_parameters)?
            }
            RouterNode::Namespace(grandchildren) => {
                debug!("Descending into namespace: {}", full_name);
                walk_children(base_path, &full_name, grandchildren, extra_parameters)?
            }
        };

        // Paths are unique across a well-formed tree; a collision is a
        // caller error and overwrites the earlier entry.
        paths.extend(entries);
    }

    Ok(paths)
}
