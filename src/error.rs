/// Result type alias for the translation pipeline
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the translation pipeline
#[derive(Debug)]
pub enum Error {
    /// The schema collaborator failed to produce a JSON Schema fragment.
    /// Aborts the whole translation; there is no partial-document mode.
    SchemaConversion(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::SchemaConversion(e) => write!(f, "schema conversion failed: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::SchemaConversion(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SchemaConversion(err)
    }
}
