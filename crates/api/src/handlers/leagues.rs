use axum::extract::State;
use axum::Json;
use pripals_core::league::{assign_leagues, League};
use pripals_db::models::friend::Friend;
use pripals_db::repositories::FriendRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/leagues
///
/// Computed on every request from the current friend set; highest tier first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<League<Friend>>>>> {
    let friends = FriendRepo::list(&state.pool).await?;
    let leagues = assign_leagues(friends, &state.config.league_policy);
    Ok(Json(DataResponse { data: leagues }))
}
