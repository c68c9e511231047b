//! Handlers for the point ledger nested under `/friends/{id}`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use pripals_core::error::CoreError;
use pripals_core::friend::validate_reason;
use pripals_core::ledger::resolve_history_limit;
use pripals_db::error::StoreError;
use pripals_db::models::point_action::{CreatePointAction, PointAction, PointHistoryEntry};
use pripals_db::repositories::{FriendRepo, PointActionRepo};

use crate::error::{AppError, AppResult};
use crate::query::HistoryParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Verify that the friend exists, returning 404 if not.
async fn ensure_friend_exists(state: &AppState, id: &str) -> AppResult<()> {
    FriendRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::friend_not_found(id)))?;
    Ok(())
}

/// POST /api/friends/{id}/points
///
/// Appends a ledger entry and moves the friend's total in one step. Changes
/// for the same friend are applied one at a time.
pub async fn record_change(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CreatePointAction>,
) -> AppResult<(StatusCode, Json<DataResponse<PointAction>>)> {
    validate_reason(&input.reason)?;

    let result = {
        let _guard = state.friend_locks.acquire(&id).await;
        FriendRepo::apply_point_change(&state.pool, &id, &input).await
    };

    let action = match result {
        Ok(action) => action,
        Err(StoreError::Core(err @ CoreError::NotFound { .. })) => {
            state.friend_locks.forget(&id).await;
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(
        friend_id = %id,
        points = action.points,
        running_total = action.running_total,
        reason = %action.reason,
        "Point change recorded"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: action })))
}

/// GET /api/friends/{id}/actions
///
/// The friend's full ledger, oldest first.
pub async fn list_actions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<PointAction>>>> {
    ensure_friend_exists(&state, &id).await?;
    let actions = PointActionRepo::list_for_friend(&state.pool, &id).await?;
    Ok(Json(DataResponse { data: actions }))
}

/// GET /api/friends/{id}/history?limit=N
///
/// The most recent `limit` entries in ascending time order.
pub async fn history(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<HistoryParams>,
) -> AppResult<Json<DataResponse<Vec<PointHistoryEntry>>>> {
    ensure_friend_exists(&state, &id).await?;
    let limit = resolve_history_limit(params.requested_limit(), state.config.history_default_limit);
    let entries = PointActionRepo::recent(&state.pool, &id, limit).await?;
    Ok(Json(DataResponse { data: entries }))
}
