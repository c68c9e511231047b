//! Repository for the `point_actions` table: the per-friend point ledger.
//!
//! The ledger is append-only. Entries are ordered by `seq` (insertion order)
//! and each caches the running total up to and including itself.

use pripals_core::ledger::{into_chronological, next_running_total};
use pripals_core::types::{new_entity_id, Timestamp};
use sqlx::{SqliteConnection, SqlitePool};

use crate::error::StoreError;
use crate::models::point_action::{PointAction, PointHistoryEntry};

/// Column list for `point_actions` queries.
const POINT_ACTION_COLUMNS: &str = "\
    seq, id, friend_id, points, reason, running_total, timestamp";

/// Provides append, history, and cascade-delete operations for the ledger.
pub struct PointActionRepo;

impl PointActionRepo {
    /// Append an entry for `friend_id`, chaining its running total from the
    /// friend's latest entry (or zero when there is none).
    ///
    /// Takes a connection rather than a pool so it can share the caller's
    /// transaction. Past entries are never touched.
    pub async fn append(
        conn: &mut SqliteConnection,
        friend_id: &str,
        delta: i64,
        reason: &str,
        timestamp: Timestamp,
    ) -> Result<PointAction, StoreError> {
        let previous: Option<i64> = sqlx::query_scalar(
            "SELECT running_total FROM point_actions \
             WHERE friend_id = $1 \
             ORDER BY seq DESC \
             LIMIT 1",
        )
        .bind(friend_id)
        .fetch_optional(&mut *conn)
        .await?;

        let running_total = next_running_total(previous.unwrap_or(0), delta)?;

        let query = format!(
            "INSERT INTO point_actions (id, friend_id, points, reason, running_total, timestamp) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {POINT_ACTION_COLUMNS}"
        );
        let action = sqlx::query_as::<_, PointAction>(&query)
            .bind(new_entity_id())
            .bind(friend_id)
            .bind(delta)
            .bind(reason)
            .bind(running_total)
            .bind(timestamp)
            .fetch_one(&mut *conn)
            .await?;

        Ok(action)
    }

    /// The most recent `limit` entries for a friend, oldest first.
    ///
    /// Unknown friends simply have no history, so this returns an empty list
    /// rather than failing.
    pub async fn recent(
        pool: &SqlitePool,
        friend_id: &str,
        limit: i64,
    ) -> Result<Vec<PointHistoryEntry>, sqlx::Error> {
        let newest_first = sqlx::query_as::<_, PointHistoryEntry>(
            "SELECT timestamp, points, running_total AS total_points \
             FROM point_actions \
             WHERE friend_id = $1 \
             ORDER BY seq DESC \
             LIMIT $2",
        )
        .bind(friend_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(into_chronological(newest_first))
    }

    /// Every entry for a friend in insertion order.
    pub async fn list_for_friend(
        pool: &SqlitePool,
        friend_id: &str,
    ) -> Result<Vec<PointAction>, sqlx::Error> {
        let query = format!(
            "SELECT {POINT_ACTION_COLUMNS} FROM point_actions \
             WHERE friend_id = $1 \
             ORDER BY seq"
        );
        sqlx::query_as::<_, PointAction>(&query)
            .bind(friend_id)
            .fetch_all(pool)
            .await
    }

    /// Remove every entry for a friend. Only used by the friend cascade delete.
    ///
    /// Returns the number of entries removed.
    pub async fn delete_all(
        conn: &mut SqliteConnection,
        friend_id: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM point_actions WHERE friend_id = $1")
            .bind(friend_id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected())
    }
}
