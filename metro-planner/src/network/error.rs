//! Network data error types.

use std::path::PathBuf;

/// Errors that can occur while loading network data.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The data file could not be read
    #[error("failed to read network data from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not valid network JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reload requested on a store that was not loaded from a file
    #[error("network store has no data source to reload from")]
    NoSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NetworkError::Io {
            path: PathBuf::from("/data/network.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read network data from /data/network.json: missing"
        );

        let err = NetworkError::NoSource;
        assert_eq!(
            err.to_string(),
            "network store has no data source to reload from"
        );
    }
}
