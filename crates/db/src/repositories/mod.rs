//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! a pool (or, where a transaction must be shared, any SQLite executor) as the
//! first argument.

pub mod friend_repo;
pub mod point_action_repo;

pub use friend_repo::FriendRepo;
pub use point_action_repo::PointActionRepo;
