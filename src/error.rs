use std::path::PathBuf;

/// All errors that can occur while building the seed script.
#[derive(thiserror::Error, Debug)]
pub enum SeederError {
    /// One of the embedded catalogue partitions is not valid JSON.
    #[error("failed to parse embedded catalogue partition {partition}: {source}")]
    CatalogParse {
        partition: &'static str,
        source: serde_json::Error,
    },

    /// A catalogue record violates a data invariant (e.g. a non-positive
    /// campaign duration).
    #[error("invalid catalogue record '{title}': {reason}")]
    InvalidRecord { title: String, reason: String },

    /// A record field could not be JSON-encoded for the jsonb columns.
    #[error("failed to JSON-encode field {field} of '{title}': {source}")]
    JsonEncode {
        field: &'static str,
        title: String,
        source: serde_json::Error,
    },

    /// Writing the generated script to disk failed.
    #[error("failed to write seed script to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SeederError>;
