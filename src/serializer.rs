//! Serialization of translated documents to YAML or JSON.
//!
//! The translation itself performs no I/O; these helpers are for the
//! enclosing application that wants to persist or serve the document.

use crate::openapi::OpenApiDocument;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Serialize a document to YAML.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_yaml(document: &OpenApiDocument) -> Result<String> {
    debug!("Serializing OpenAPI document to YAML");
    serde_yaml::to_string(document).context("Failed to serialize OpenAPI document to YAML")
}

/// Serialize a document to pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn serialize_json(document: &OpenApiDocument) -> Result<String> {
    debug!("Serializing OpenAPI document to JSON");
    serde_json::to_string_pretty(document).context("Failed to serialize OpenAPI document to JSON")
}

/// Write serialized content to a file, creating parent directories and
/// overwriting any existing file.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be created or written.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing document to file: {}", path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(path, content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
