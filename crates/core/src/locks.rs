//! Per-friend mutation locks.
//!
//! Point changes and deletes against the same friend are serialised so the
//! ledger's running-total chain and the cached point total never diverge.
//! Different friends never contend.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

/// Lazily-populated table of one async mutex per friend id.
#[derive(Debug, Default)]
pub struct FriendLocks {
    inner: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl FriendLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `friend_id`. Released when the guard drops.
    pub async fn acquire(&self, friend_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut inner = self.inner.lock().await;
            Arc::clone(
                inner
                    .entry(friend_id.to_string())
                    .or_insert_with(|| Arc::new(Mutex::new(()))),
            )
        };
        lock.lock_owned().await
    }

    /// Drop the table entry for a deleted friend.
    ///
    /// Callers still holding or awaiting the old mutex keep their `Arc`, so
    /// this never strands a waiter.
    pub async fn forget(&self, friend_id: &str) {
        self.inner.lock().await.remove(friend_id);
    }
}
