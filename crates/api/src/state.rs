use std::sync::Arc;

use pripals_core::image::{DataUrlStore, ImageStore};
use pripals_core::locks::FriendLocks;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pripals_db::DbPool,
    /// Server configuration (league policy, history window, upload limit).
    pub config: Arc<ServerConfig>,
    /// Serialises point changes and deletes per friend.
    pub friend_locks: Arc<FriendLocks>,
    /// Turns uploaded images into profile picture references.
    pub image_store: Arc<dyn ImageStore>,
}

impl AppState {
    /// State backed by the inline data-URL image store.
    pub fn new(pool: pripals_db::DbPool, config: ServerConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
            friend_locks: Arc::new(FriendLocks::new()),
            image_store: Arc::new(DataUrlStore),
        }
    }
}
