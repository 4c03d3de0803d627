use axum::Json;
use serde_json::{Value, json};

/// Static description of the service and its endpoint families.
pub async fn index() -> Json<Value> {
    Json(json!({
        "mensaje": "API de Tienda de Videojuegos",
        "endpoints": {
            "users": "/users",
            "games": "/games",
            "user_favorites": "/users/{id}/favorites"
        }
    }))
}
