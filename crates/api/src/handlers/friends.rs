//! Handlers for the `/friends` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use pripals_core::error::CoreError;
use pripals_core::friend::validate_name;
use pripals_db::models::friend::{CreateFriend, Friend, UpdateFriend};
use pripals_db::repositories::FriendRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/friends
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateFriend>,
) -> AppResult<(StatusCode, Json<DataResponse<Friend>>)> {
    validate_name(&input.name)?;

    let friend = FriendRepo::create(&state.pool, &input).await?;

    tracing::info!(friend_id = %friend.id, name = %friend.name, "Friend created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: friend })))
}

/// GET /api/friends
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Friend>>>> {
    let friends = FriendRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: friends }))
}

/// GET /api/friends/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Friend>>> {
    let friend = FriendRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::friend_not_found(&id)))?;
    Ok(Json(DataResponse { data: friend }))
}

/// PUT /api/friends/{id}
///
/// Only the fields present in the body change; points are never touched here.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateFriend>,
) -> AppResult<Json<DataResponse<Friend>>> {
    if let Some(ref name) = input.name {
        validate_name(name)?;
    }

    let friend = FriendRepo::update(&state.pool, &id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::friend_not_found(&id)))?;

    tracing::info!(friend_id = %id, "Friend updated");

    Ok(Json(DataResponse { data: friend }))
}

/// DELETE /api/friends/{id}
///
/// Removes the friend and its whole ledger.
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let deleted = {
        let _guard = state.friend_locks.acquire(&id).await;
        FriendRepo::delete(&state.pool, &id).await?
    };
    state.friend_locks.forget(&id).await;

    if deleted {
        tracing::info!(friend_id = %id, "Friend deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::friend_not_found(&id)))
    }
}
