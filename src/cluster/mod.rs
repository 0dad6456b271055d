//! Contains the `Cluster`, the root namespace and main entry point: it discovers the databases
//! under a root directory and lazily opens them by name.

mod builder;
mod management;

pub use self::builder::ClusterBuilder;
use crate::database::Database;
use crate::types::StoreConfig;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;

type DatabaseSlot = Arc<OnceCell<Arc<Database>>>;

/// Result of the one-time scan of the root directory.
#[derive(Debug)]
struct Discovery {
    root: PathBuf,
    databases: HashSet<String>,
}

/// Root namespace owning databases by name.
///
/// # Example
///
/// ```rust,no_run
/// use rdocs::{Cluster, Filter, FlushMode, Result};
/// use serde_json::json;
///
/// # async fn run() -> Result<()> {
/// let cluster = Cluster::builder().with_root("/tmp/rdocs_data").build();
/// let database = cluster.open("public").await?;
/// let users = database.collection("users").await?;
///
/// users.insert(&json!({"name": "Sidharth", "age": 18}))?;
/// let adults = users.find(Some(&Filter::new(json!({"age": 18}))?), None);
/// assert_eq!(adults.len(), 1);
///
/// database.flush(FlushMode::Blocking).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Cluster {
    config: StoreConfig,
    discovery: OnceCell<Discovery>,
    databases: Mutex<HashMap<String, DatabaseSlot>>,
}

impl Cluster {
    /// Creates a new builder for configuring a `Cluster`.
    pub fn builder() -> ClusterBuilder {
        ClusterBuilder::default()
    }

    /// Creates a cluster over the configured root. No I/O happens until the first `open`.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            discovery: OnceCell::new(),
            databases: Mutex::new(HashMap::new()),
        }
    }

    /// Gets the configuration this cluster was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl Default for Cluster {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
