//! CRUD endpoints for user accounts.
use axum::{
    Extension, Json,
    body::Bytes,
    extract::Path,
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{Created, Message};
use crate::SharedState;
use crate::db::Store;
use crate::db::user_repo::{NewUser, User, UserChanges};
use crate::error::AppError;
use crate::validation::{self, ValidationError};

pub const NOT_FOUND: &str = "Usuario no encontrado";
const MISSING_FIELDS: &str = "Nombre y contraseña son requeridos";
pub(crate) const NO_DATA: &str = "No se enviaron datos";

/// Wire representation of a user.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub password: String,
    pub favorites: Vec<String>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            password: user.password,
            favorites: user.favorites,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub password: Option<String>,
    pub favorites: Option<Vec<String>>,
}

/// Fields left out keep their stored value.
#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub password: Option<String>,
    pub favorites: Option<Vec<String>>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            name: req.name,
            password: req.password,
            favorites: req.favorites,
        }
    }
}

/// Resolve a raw path id to a stored user, or 404.
pub(crate) async fn find_user_or_404(store: &dyn Store, raw_id: &str) -> Result<User, AppError> {
    let Some(id) = validation::parse_id(raw_id) else {
        return Err(AppError::not_found(NOT_FOUND));
    };
    store
        .find_user(id)
        .await?
        .ok_or_else(|| AppError::not_found(NOT_FOUND))
}

/// Map body errors on update endpoints to a 400.
pub(crate) fn update_rejection(err: ValidationError) -> AppError {
    match err {
        ValidationError::EmptyBody => AppError::bad_request(NO_DATA),
        other => AppError::bad_request(other.to_string()),
    }
}

// GET /users
pub async fn list_users(
    Extension(state): Extension<SharedState>,
) -> Result<Json<Vec<UserDto>>, AppError> {
    let users = state.store.list_users().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

// GET /users/{id}
pub async fn get_user(
    Extension(state): Extension<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<UserDto>, AppError> {
    let user = find_user_or_404(state.store.as_ref(), &id).await?;
    Ok(Json(user.into()))
}

// POST /users
pub async fn create_user(
    Extension(state): Extension<SharedState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Created>), AppError> {
    let req: CreateUserRequest = validation::parse_payload(&body).map_err(|err| match err {
        ValidationError::EmptyBody => AppError::bad_request(MISSING_FIELDS),
        other => AppError::bad_request(other.to_string()),
    })?;

    let (Some(name), Some(password)) = (
        validation::required_text(req.name),
        validation::required_text(req.password),
    ) else {
        return Err(AppError::bad_request(MISSING_FIELDS));
    };

    let id = state
        .store
        .insert_user(&NewUser {
            name,
            password,
            favorites: req.favorites.unwrap_or_default(),
        })
        .await?;
    info!(user_id = id, "user created");

    Ok((
        StatusCode::CREATED,
        Json(Created {
            mensaje: "Usuario creado",
            id: id.to_string(),
        }),
    ))
}

// PUT /users/{id}
pub async fn update_user(
    Extension(state): Extension<SharedState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Message>, AppError> {
    let fields = validation::parse_object(&body).map_err(update_rejection)?;
    let user = find_user_or_404(state.store.as_ref(), &id).await?;
    let req: UpdateUserRequest = validation::decode_object(fields).map_err(update_rejection)?;

    state.store.update_user(user.id, &UserChanges::from(req)).await?;
    info!(user_id = user.id, "user updated");

    Ok(Json(Message::new("Usuario actualizado")))
}

// DELETE /users/{id}
pub async fn delete_user(
    Extension(state): Extension<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Message>, AppError> {
    let user = find_user_or_404(state.store.as_ref(), &id).await?;
    if !state.store.delete_user(user.id).await? {
        return Err(AppError::not_found(NOT_FOUND));
    }
    info!(user_id = user.id, "user deleted");

    Ok(Json(Message::new("Usuario eliminado")))
}
