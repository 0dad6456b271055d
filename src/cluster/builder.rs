//! Contains the `ClusterBuilder` for fluently constructing a `Cluster`.
use super::Cluster;
use crate::types::StoreConfig;
use std::path::PathBuf;
use std::time::Duration;

/// Builder for creating Cluster instances
///
/// # Example
///
/// ```rust
/// use rdocs::Cluster;
/// use std::time::Duration;
///
/// let cluster = Cluster::builder()
///     .with_root("/tmp/rdocs_data")
///     .with_autosave(Duration::from_secs(30))
///     .with_atomic_writes(true)
///     .build();
/// assert!(cluster.config().atomic_writes);
/// ```
#[derive(Debug, Default)]
pub struct ClusterBuilder {
    config: StoreConfig,
}

impl ClusterBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the root directory; relative paths resolve against the working directory
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.root_dir = root.into();
        self
    }

    /// Flush every database in the background at this interval
    pub fn with_autosave(mut self, interval: Duration) -> Self {
        self.config.autosave_interval = Some(interval);
        self
    }

    /// Write collection files through a temporary file and a rename
    pub fn with_atomic_writes(mut self, atomic: bool) -> Self {
        self.config.atomic_writes = atomic;
        self
    }

    /// Indent collection files
    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    /// Build the Cluster with the configured options
    pub fn build(self) -> Cluster {
        Cluster::new(self.config)
    }
}
