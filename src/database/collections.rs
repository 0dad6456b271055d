//! Contains lazy collection lookup for the `Database`.
use super::Database;
use crate::collection::Collection;
use crate::names::normalize_collection_name;
use crate::types::COLLECTION_EXTENSION;
use crate::Result;
use std::sync::Arc;

impl Database {
    /// Gets a handle to a collection, loading or creating it on first use.
    ///
    /// The name is normalized first, so `"Users "` and `"users"` resolve to the same collection
    /// and the same `users.json` file. Concurrent first requests for one name load the file once.
    /// If loading fails the error is returned and the collection stays unmaterialized, so a later
    /// call retries.
    pub async fn collection(&self, name: &str) -> Result<Arc<Collection>> {
        let name = normalize_collection_name(name)?;

        let slot = {
            let mut collections = self.collections.lock();
            Arc::clone(collections.entry(name.clone()).or_default())
        };

        let collection = slot
            .get_or_try_init(|| async {
                let path = self
                    .path
                    .join(format!("{}.{}", name, COLLECTION_EXTENSION));
                tracing::debug!(
                    database = %self.name,
                    collection = %name,
                    "materializing collection"
                );
                Collection::load(
                    name.clone(),
                    path,
                    self.write_options,
                    self.flush_state.clone(),
                )
                .await
                .map(Arc::new)
            })
            .await?;

        Ok(Arc::clone(collection))
    }
}
