//! Contains the background autosave task for the `Database`.
use super::Database;
use crate::types::FlushMode;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::time::{self, Instant};

impl Database {
    /// Spawns the task flushing this database every `period`.
    pub(super) fn spawn_autosave(self: &Arc<Self>, period: Duration) {
        let task = Self::create_autosave_task(Arc::downgrade(self), period);
        let handle = tokio::spawn(task);
        *self.autosave_task.lock() = Some(handle);
    }

    /// Creates the future for the autosave task. The first flush happens one period after start.
    async fn create_autosave_task(weak_self: Weak<Self>, period: Duration) {
        let mut interval = time::interval_at(Instant::now() + period, period);
        loop {
            interval.tick().await;
            if let Some(strong_self) = weak_self.upgrade() {
                if let Err(e) = strong_self.flush(FlushMode::Background).await {
                    tracing::error!(
                        database = %strong_self.name,
                        error = %e,
                        "autosave failed"
                    );
                }
            } else {
                break; // Database was dropped, exit task
            }
        }
    }
}
