//! Error handling for nbfix.
//!
//! Centralized error types using thiserror. The library's fallible paths all
//! come down to reading/parsing/writing the notebook file, so IO and JSON
//! failures convert automatically; the verifier's per-check catch-all wraps
//! these (and anything else) in anyhow at the edge.

use thiserror::Error;

/// Main error type for nbfix operations
#[derive(Error, Debug)]
pub enum NbFixError {
    /// IO errors (reading/writing the notebook, probing the filesystem)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse/serialize errors from the notebook file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for nbfix operations
pub type Result<T> = std::result::Result<T, NbFixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NbFixError = io_err.into();
        assert!(matches!(err, NbFixError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        let err: NbFixError = json_err.into();
        assert!(matches!(err, NbFixError::Json(_)));
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_every_variant_is_reachable_from_the_loader() {
        // Both variants arise from loading: a missing file gives Io, a
        // present-but-broken file gives Json.
        use crate::notebook::Notebook;
        use std::io::Write;
        use tempfile::NamedTempFile;

        let missing = Notebook::load_from_file("/nonexistent/notebook.ipynb");
        assert!(matches!(missing, Err(NbFixError::Io(_))));

        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"{ not a notebook").unwrap();
        f.flush().unwrap();
        let broken = Notebook::load_from_file(f.path());
        assert!(matches!(broken, Err(NbFixError::Json(_))));
    }
}
