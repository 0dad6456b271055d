//! rdocs - Rust Document Store
//!
//! An embedded, file-backed document store. Records are persisted as JSON and organized in a
//! two-level namespace: a [`Cluster`] owns databases, a [`Database`] owns collections, and a
//! [`Collection`] owns documents.
//!
//! # Features
//!
//! - **Lazy loading**: databases and collections are opened on first request and shared afterwards
//! - **Ordered documents**: insertion order is kept in memory and in the persisted file
//! - **Subset filters**: query by example with exact, structural equality on every filter field
//! - **Dirty tracking**: flushing a database writes nothing when nothing changed
//! - **Shutdown flush**: dropping a database performs a best-effort blocking flush
//! - **Autosave**: optional periodic background flush per database
//!
//! # Layout on disk
//!
//! ```text
//! <root>/<database-name>/<collection-name>.json
//! ```
//!
//! Each collection file holds one JSON object mapping identifiers to documents.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rdocs::{Cluster, Filter, FlushMode, Result};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let cluster = Cluster::builder().with_root("data").build();
//!
//!     let database = cluster.open("public").await?;
//!     let users = database.collection("users").await?;
//!
//!     let user = users.insert(&json!({"name": "Sidharth", "age": 18}))?;
//!     println!("inserted {}", user["_id"]);
//!
//!     let filter = Filter::new(json!({"age": 18}))?;
//!     for doc in users.find(Some(&filter), Some(10)) {
//!         println!("{}", serde_json::Value::Object(doc));
//!     }
//!
//!     database.flush(FlushMode::Background).await?;
//!     Ok(())
//! }
//! ```

pub mod cluster;
pub mod collection;
pub mod database;
pub mod error;
pub mod matcher;
pub mod names;
pub mod persistence;
pub mod table;
pub mod types;

// Re-export commonly used types
pub use cluster::{Cluster, ClusterBuilder};
pub use collection::Collection;
pub use database::Database;
pub use error::{RdocsError, Result};
pub use matcher::{values_equal, Filter};
pub use types::*;
