//! CRUD endpoints for the game catalog.
use axum::{
    Extension, Json,
    body::Bytes,
    extract::Path,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use tracing::info;

use super::users::update_rejection;
use super::{Created, Message};
use crate::SharedState;
use crate::db::Store;
use crate::db::game_repo::{Game, GameChanges, NewGame};
use crate::error::AppError;
use crate::validation::{self, ValidationError, nullable};

pub const NOT_FOUND: &str = "Juego no encontrado";
const MISSING_FIELDS: &str = "Nombre y desarrollador son requeridos";

/// Wire representation of a game.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: String,
    pub name: String,
    pub developer: String,
    pub image_link: Option<String>,
    pub description: Option<String>,
    pub price: f64,
    pub units_in_stock: Number,
    pub platforms: Vec<String>,
    pub release_date: Option<String>,
    pub media_carousel: Vec<String>,
}

impl From<Game> for GameDto {
    fn from(game: Game) -> Self {
        Self {
            id: game.id.to_string(),
            name: game.name,
            developer: game.developer,
            image_link: game.image_link,
            description: game.description,
            price: game.price,
            units_in_stock: game.units_in_stock,
            platforms: game.platforms,
            release_date: game.release_date,
            media_carousel: game.media_carousel,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    pub name: Option<String>,
    pub developer: Option<String>,
    pub image_link: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub units_in_stock: Option<Number>,
    pub platforms: Option<Vec<String>>,
    pub release_date: Option<String>,
    pub media_carousel: Option<Vec<String>>,
}

/// Fields left out keep their stored value. The free-text fields also accept
/// `null`, which clears them.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameRequest {
    pub name: Option<String>,
    pub developer: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub image_link: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
    pub units_in_stock: Option<Number>,
    pub platforms: Option<Vec<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub release_date: Option<Option<String>>,
    pub media_carousel: Option<Vec<String>>,
}

impl From<UpdateGameRequest> for GameChanges {
    fn from(req: UpdateGameRequest) -> Self {
        Self {
            name: req.name,
            developer: req.developer,
            image_link: req.image_link,
            description: req.description,
            price: req.price,
            units_in_stock: req.units_in_stock,
            platforms: req.platforms,
            release_date: req.release_date,
            media_carousel: req.media_carousel,
        }
    }
}

/// Resolve a raw path id to a stored game, or 404.
pub(crate) async fn find_game_or_404(store: &dyn Store, raw_id: &str) -> Result<Game, AppError> {
    let Some(id) = validation::parse_id(raw_id) else {
        return Err(AppError::not_found(NOT_FOUND));
    };
    store
        .find_game(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))
}

// GET /games
pub async fn list_games(
    Extension(state): Extension<SharedState>,
) -> Result<Json<Vec<GameDto>>, AppError> {
    let games = state.store.list_games().await?;
    Ok(Json(games.into_iter().map(GameDto::from).collect()))
}

// GET /games/{id}
pub async fn get_game(
    Extension(state): Extension<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<GameDto>, AppError> {
    let game = find_game_or_404(state.store.as_ref(), &id).await?;
    Ok(Json(game.into()))
}

// POST /games
pub async fn create_game(
    Extension(state): Extension<SharedState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let req: CreateGameRequest = validation::parse_payload(&body).map_err(|err| match err {
        ValidationError::EmptyBody => AppError::bad_request(MISSING_FIELDS),
        other => AppError::bad_request(other.to_string()),
    })?;

    let (Some(name), Some(developer)) = (
        validation::required_text(req.name),
        validation::required_text(req.developer),
    ) else {
        return Err(AppError::bad_request(MISSING_FIELDS));
    };

    let id = state
        .store
        .insert_game(&NewGame {
            name,
            developer,
            image_link: req.image_link,
            description: req.description,
            price: req.price.unwrap_or(0.0),
            units_in_stock: req.units_in_stock.unwrap_or_else(|| Number::from(0)),
            platforms: req.platforms.unwrap_or_default(),
            release_date: req.release_date,
            media_carousel: req.media_carousel.unwrap_or_default(),
        })
        .await?;
    info!(game_id = id, "game created");

    Ok((
        StatusCode::CREATED,
        Json(Created {
            mensaje: "Juego creado",
            id: id.to_string(),
        }),
    ))
}

// PUT /games/{id}
pub async fn update_game(
    Extension(state): Extension<SharedState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Message>, AppError> {
    let fields = validation::parse_object(&body).map_err(update_rejection)?;
    let game = find_game_or_404(state.store.as_ref(), &id).await?;
    let req: UpdateGameRequest = validation::decode_object(fields).map_err(update_rejection)?;

    state.store.update_game(game.id, &GameChanges::from(req)).await?;
    info!(game_id = game.id, "game updated");

    Ok(Json(Message::new("Juego actualizado")))
}

// DELETE /games/{id}
pub async fn delete_game(
    Extension(state): Extension<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, AppError> {
    let game = find_game_or_404(state.store.as_ref(), &id).await?;
    if !state.store.delete_game(game.id).await? {
        return Err(AppError::not_found(NOT_FOUND));
    }
    // favorites lists keep dangling references; readers skip them
    info!(game_id = game.id, "game deleted");

    Ok(Json(Message::new("Juego eliminado")))
}
