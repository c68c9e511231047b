//! Repository for the `friends` table: the Friend Store.
//!
//! Point totals change only through [`FriendRepo::apply_point_change`], which
//! writes the ledger entry and the new total in one transaction.

use chrono::Utc;
use pripals_core::error::CoreError;
use pripals_core::friend::normalize_partner_name;
use pripals_core::types::new_entity_id;
use sqlx::SqlitePool;

use crate::error::StoreError;
use crate::models::friend::{CreateFriend, Friend, UpdateFriend};
use crate::models::point_action::{CreatePointAction, PointAction};
use crate::repositories::PointActionRepo;

/// Column list for `friends` queries.
const FRIEND_COLUMNS: &str = "\
    seq, id, name, profile_picture, points, is_couple, partner_name, \
    created_at, updated_at";

/// Provides CRUD and point-change operations for friends.
pub struct FriendRepo;

impl FriendRepo {
    /// Insert a new friend with a zero point total.
    pub async fn create(pool: &SqlitePool, input: &CreateFriend) -> Result<Friend, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO friends \
                 (id, name, profile_picture, points, is_couple, partner_name, created_at, updated_at) \
             VALUES ($1, $2, $3, 0, $4, $5, $6, $6) \
             RETURNING {FRIEND_COLUMNS}"
        );
        sqlx::query_as::<_, Friend>(&query)
            .bind(new_entity_id())
            .bind(input.name.trim())
            .bind(&input.profile_picture)
            .bind(input.is_couple)
            .bind(normalize_partner_name(input.partner_name.as_deref()))
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a friend by id.
    pub async fn find_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Friend>, sqlx::Error> {
        let query = format!("SELECT {FRIEND_COLUMNS} FROM friends WHERE id = $1");
        sqlx::query_as::<_, Friend>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every friend in creation order. Ranking is the league assigner's job.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Friend>, sqlx::Error> {
        let query = format!("SELECT {FRIEND_COLUMNS} FROM friends ORDER BY seq");
        sqlx::query_as::<_, Friend>(&query).fetch_all(pool).await
    }

    /// Partially update a friend's display attributes and bump `updated_at`.
    ///
    /// Uses `COALESCE` so only provided fields are changed; `partner_name`
    /// can additionally be cleared. Returns `None` if no friend has this id.
    pub async fn update(
        pool: &SqlitePool,
        id: &str,
        dto: &UpdateFriend,
    ) -> Result<Option<Friend>, sqlx::Error> {
        let partner_name_provided = dto.partner_name.is_some();
        let partner_name_value = normalize_partner_name(
            dto.partner_name.as_ref().and_then(|v| v.as_deref()),
        );

        let query = format!(
            "UPDATE friends SET \
                 name            = COALESCE($2, name), \
                 profile_picture = COALESCE($3, profile_picture), \
                 is_couple       = COALESCE($4, is_couple), \
                 partner_name    = CASE WHEN $5 THEN $6 ELSE partner_name END, \
                 updated_at      = $7 \
             WHERE id = $1 \
             RETURNING {FRIEND_COLUMNS}"
        );
        sqlx::query_as::<_, Friend>(&query)
            .bind(id)
            .bind(dto.name.as_deref().map(str::trim))
            .bind(&dto.profile_picture)
            .bind(dto.is_couple)
            .bind(partner_name_provided)
            .bind(partner_name_value)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete a friend together with its whole ledger.
    ///
    /// Returns `true` if a friend was deleted.
    pub async fn delete(pool: &SqlitePool, id: &str) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let entries_removed = PointActionRepo::delete_all(&mut *tx, id).await?;
        let result = sqlx::query("DELETE FROM friends WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!(friend_id = %id, entries_removed, "Friend ledger removed");
        }
        Ok(deleted)
    }

    /// Record a point change: append a ledger entry and move the friend's
    /// total to the entry's running total, all or nothing.
    ///
    /// Fails with `CoreError::NotFound` for an unknown friend and with
    /// `CoreError::Validation` if the total would overflow; neither leaves a
    /// trace in the store.
    pub async fn apply_point_change(
        pool: &SqlitePool,
        id: &str,
        change: &CreatePointAction,
    ) -> Result<PointAction, StoreError> {
        let now = Utc::now();
        let mut tx = pool.begin().await?;

        // Write first so the transaction holds the database write lock before
        // it reads the ledger tail.
        let touched = sqlx::query("UPDATE friends SET updated_at = $2 WHERE id = $1")
            .bind(id)
            .bind(now)
            .execute(&mut *tx)
            .await?;
        if touched.rows_affected() == 0 {
            return Err(CoreError::friend_not_found(id).into());
        }

        let action =
            PointActionRepo::append(&mut *tx, id, change.points, change.reason.trim(), now).await?;

        sqlx::query("UPDATE friends SET points = $2 WHERE id = $1")
            .bind(id)
            .bind(action.running_total)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(action)
    }
}
