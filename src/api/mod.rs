pub mod favorites;
pub mod games;
pub mod info;
pub mod users;

use axum::{Extension, Router, routing::{get, post}};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::SharedState;

/// Confirmation body returned by mutating endpoints.
#[derive(Debug, Serialize)]
pub struct Message {
    pub mensaje: &'static str,
}

impl Message {
    pub fn new(mensaje: &'static str) -> Self {
        Self { mensaje }
    }
}

/// Body returned after a row has been created.
#[derive(Debug, Serialize)]
pub struct Created {
    pub mensaje: &'static str,
    pub id: String,
}

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(info::index))
        // users
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        // favorites
        .route("/users/{id}/favorites", get(favorites::list_favorites))
        .route(
            "/users/{id}/favorites/{game_id}",
            post(favorites::add_favorite).delete(favorites::remove_favorite),
        )
        // games
        .route("/games", get(games::list_games).post(games::create_game))
        .route(
            "/games/{id}",
            get(games::get_game)
                .put(games::update_game)
                .delete(games::delete_game),
        )
        .layer(Extension(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
