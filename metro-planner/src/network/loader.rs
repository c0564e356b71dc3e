//! Loading network data from disk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use super::Network;
use super::error::NetworkError;

/// Parse network JSON (`{"stations": [...], "lines": [...]}`).
pub fn parse_network(json: &str) -> Result<Network, NetworkError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a network data file.
///
/// Integrity problems are logged but do not fail the load.
pub fn load_network(path: &Path) -> Result<Network, NetworkError> {
    let contents = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let network = parse_network(&contents)?;

    for warning in network.integrity_warnings() {
        warn!(path = %path.display(), %warning, "network data integrity problem");
    }

    info!(
        path = %path.display(),
        stations = network.stations.len(),
        lines = network.lines.len(),
        "loaded network data"
    );

    Ok(network)
}

/// Process-wide network data.
///
/// Loaded once and shared by every query. The data is only replaced by an
/// explicit [`NetworkStore::reload`]; queries hold an `Arc` snapshot so a
/// reload never changes a network mid-query.
#[derive(Clone)]
pub struct NetworkStore {
    inner: Arc<RwLock<Arc<Network>>>,
    source: Option<PathBuf>,
}

impl NetworkStore {
    /// Create a store by loading the given data file.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, NetworkError> {
        let path = path.into();
        let network = load_network(&path)?;

        Ok(Self {
            inner: Arc::new(RwLock::new(Arc::new(network))),
            source: Some(path),
        })
    }

    /// Create a store around an in-memory network (for tests and embedding).
    ///
    /// Such a store cannot be reloaded.
    pub fn from_network(network: Network) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(network))),
            source: None,
        }
    }

    /// Returns the current network.
    pub async fn snapshot(&self) -> Arc<Network> {
        let guard = self.inner.read().await;
        guard.clone()
    }

    /// Returns the data file this store loads from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Reload the network from its data file.
    ///
    /// On success, replaces the current network and returns its station
    /// count. On failure, the existing network is preserved.
    pub async fn reload(&self) -> Result<usize, NetworkError> {
        let path = self.source.as_ref().ok_or(NetworkError::NoSource)?;
        let network = load_network(path)?;
        let count = network.stations.len();

        let mut guard = self.inner.write().await;
        *guard = Arc::new(network);

        Ok(count)
    }
}
