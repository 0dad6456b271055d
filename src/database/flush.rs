//! Contains the flush methods persisting every materialized collection of the `Database`.
use super::Database;
use crate::types::FlushMode;
use crate::Result;
use futures::future::try_join_all;

impl Database {
    /// Persists every materialized collection.
    ///
    /// Does nothing if no insert or delete happened since the last successful flush.
    /// `FlushMode::Blocking` writes on the calling thread; `FlushMode::Background` writes
    /// with async I/O and logs each saved collection. On failure the database stays dirty.
    pub async fn flush(&self, mode: FlushMode) -> Result<()> {
        match mode {
            FlushMode::Blocking => self.flush_blocking(),
            FlushMode::Background => self.flush_background().await,
        }
    }

    /// Blocking flush, usable outside of an async context.
    pub fn flush_blocking(&self) -> Result<()> {
        if self.flush_state.begin_flush() {
            return Ok(());
        }

        let result = self
            .materialized()
            .iter()
            .try_for_each(|collection| collection.save_sync());

        if result.is_err() {
            self.flush_state.mark_dirty();
        }
        result
    }

    async fn flush_background(&self) -> Result<()> {
        if self.flush_state.begin_flush() {
            return Ok(());
        }

        let collections = self.materialized();
        let saves = collections.iter().map(|collection| async move {
            collection.save().await?;
            tracing::info!(
                database = %self.name,
                collection = %collection.name(),
                "collection saved"
            );
            Ok::<(), crate::RdocsError>(())
        });

        if let Err(e) = try_join_all(saves).await {
            self.flush_state.mark_dirty();
            return Err(e);
        }
        Ok(())
    }
}
