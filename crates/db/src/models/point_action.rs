//! Point ledger models and DTOs.

use pripals_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `point_actions` table: one point change against a friend.
///
/// `running_total` is the friend's cumulative total immediately after this
/// entry. Rows are never updated once written.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointAction {
    #[serde(skip)]
    pub seq: i64,
    pub id: EntityId,
    pub friend_id: EntityId,
    pub points: i64,
    pub reason: String,
    pub running_total: i64,
    pub timestamp: Timestamp,
}

/// One point of a friend's trend line.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointHistoryEntry {
    pub timestamp: Timestamp,
    pub points: i64,
    pub total_points: i64,
}

/// DTO for awarding (positive) or deducting (negative) points.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePointAction {
    pub points: i64,
    pub reason: String,
}
