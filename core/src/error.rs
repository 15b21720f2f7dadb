use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndexError>;

/// Failures raised while building or querying the hero index.
#[derive(Error, Debug)]
pub enum IndexError {
    /// The documents directory, a document, or an output file could not be read or written.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A value that must already be present in a table was not. Only happens when the catalog,
    /// vocabulary and postings were built from inconsistent inputs.
    #[error("{table} has no entry for {value:?}")]
    Lookup { table: &'static str, value: String },
    /// No indexed hero matches the query.
    #[error("no indexed hero named {hero:?}")]
    NotFound { hero: String },
    /// A document lacks a metadata field the indexer depends on.
    #[error("document {document} has no element matching {selector}")]
    MissingField { document: String, selector: String },
    #[error("invalid selector {selector}: {reason}")]
    Selector { selector: String, reason: String },
}

impl IndexError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexError::Io { path: path.into(), source }
    }

    pub(crate) fn lookup(table: &'static str, value: impl ToString) -> Self {
        IndexError::Lookup { table, value: value.to_string() }
    }

    /// `true` for the expected "nothing matched" outcome of a search.
    pub fn is_not_found(&self) -> bool {
        matches!(self, IndexError::NotFound { .. })
    }
}
