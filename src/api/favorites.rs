//! Per-user favorites list, stored as game ids on the user row.
use axum::{Extension, Json, extract::Path};
use tracing::info;

use super::Message;
use super::games::{GameDto, find_game_or_404};
use super::users::find_user_or_404;
use crate::SharedState;
use crate::error::AppError;
use crate::validation;

// GET /users/{id}/favorites
//
// Games come back in favorites-list order. Ids that no longer resolve to a
// game, or that are not integers, are skipped.
pub async fn list_favorites(
    Extension(state): Extension<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<GameDto>>, AppError> {
    let user = find_user_or_404(state.store.as_ref(), &id).await?;
    if user.favorites.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let ids: Vec<i64> = user
        .favorites
        .iter()
        .filter_map(|fav| validation::parse_id(fav))
        .collect();
    let mut games = state.store.find_games(&ids).await?;
    games.sort_by_key(|game| ids.iter().position(|id| *id == game.id));

    Ok(Json(games.into_iter().map(GameDto::from).collect()))
}

// POST /users/{id}/favorites/{game_id}
pub async fn add_favorite(
    Extension(state): Extension<SharedState>,
    Path((user_id, game_id)): Path<(String, String)>,
) -> Result<Json<Message>, AppError> {
    let mut user = find_user_or_404(state.store.as_ref(), &user_id).await?;
    let game = find_game_or_404(state.store.as_ref(), &game_id).await?;

    let key = game.id.to_string();
    if !user.favorites.contains(&key) {
        user.favorites.push(key);
        state.store.set_favorites(user.id, &user.favorites).await?;
        info!(user_id = user.id, game_id = game.id, "favorite added");
    }

    Ok(Json(Message::new("Juego agregado a favoritos")))
}

// DELETE /users/{id}/favorites/{game_id}
//
// The game itself is not looked up; removal matches the raw id string.
pub async fn remove_favorite(
    Extension(state): Extension<SharedState>,
    Path((user_id, game_id)): Path<(String, String)>,
) -> Result<Json<Message>, AppError> {
    let mut user = find_user_or_404(state.store.as_ref(), &user_id).await?;

    if let Some(pos) = user.favorites.iter().position(|fav| *fav == game_id) {
        user.favorites.remove(pos);
        state.store.set_favorites(user.id, &user.favorites).await?;
        info!(user_id = user.id, game_id = %game_id, "favorite removed");
    }

    Ok(Json(Message::new("Juego eliminado de favoritos")))
}
