//! In-memory `Store` used to exercise the HTTP layer without a database file.
use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::game_repo::{Game, GameChanges, NewGame};
use super::user_repo::{NewUser, User, UserChanges};
use super::{Store, StoreResult};

#[derive(Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    games: BTreeMap<i64, Game>,
    last_user_id: i64,
    last_game_id: i64,
}

/// Ids are never reused after deletion, mirroring `AUTOINCREMENT`.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.tables.lock().await.users.values().cloned().collect())
    }

    async fn find_user(&self, id: i64) -> StoreResult<Option<User>> {
        Ok(self.tables.lock().await.users.get(&id).cloned())
    }

    async fn insert_user(&self, user: &NewUser) -> StoreResult<i64> {
        let mut tables = self.tables.lock().await;
        tables.last_user_id += 1;
        let id = tables.last_user_id;
        tables.users.insert(
            id,
            User {
                id,
                name: user.name.clone(),
                password: user.password.clone(),
                favorites: user.favorites.clone(),
            },
        );
        Ok(id)
    }

    async fn update_user(&self, id: i64, changes: &UserChanges) -> StoreResult<()> {
        let mut tables = self.tables.lock().await;
        if let Some(row) = tables.users.get_mut(&id) {
            changes.apply(row);
        }
        Ok(())
    }

    async fn set_favorites(&self, user_id: i64, favorites: &[String]) -> StoreResult<()> {
        let mut tables = self.tables.lock().await;
        if let Some(row) = tables.users.get_mut(&user_id) {
            row.favorites = favorites.to_vec();
        }
        Ok(())
    }

    async fn delete_user(&self, id: i64) -> StoreResult<bool> {
        Ok(self.tables.lock().await.users.remove(&id).is_some())
    }

    async fn list_games(&self) -> StoreResult<Vec<Game>> {
        Ok(self.tables.lock().await.games.values().cloned().collect())
    }

    async fn find_game(&self, id: i64) -> StoreResult<Option<Game>> {
        Ok(self.tables.lock().await.games.get(&id).cloned())
    }

    async fn find_games(&self, ids: &[i64]) -> StoreResult<Vec<Game>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .games
            .values()
            .filter(|game| ids.contains(&game.id))
            .cloned()
            .collect())
    }

    async fn insert_game(&self, game: &NewGame) -> StoreResult<i64> {
        let mut tables = self.tables.lock().await;
        tables.last_game_id += 1;
        let id = tables.last_game_id;
        tables.games.insert(
            id,
            Game {
                id,
                name: game.name.clone(),
                developer: game.developer.clone(),
                image_link: game.image_link.clone(),
                description: game.description.clone(),
                price: game.price,
                units_in_stock: game.units_in_stock.clone(),
                platforms: game.platforms.clone(),
                release_date: game.release_date.clone(),
                media_carousel: game.media_carousel.clone(),
            },
        );
        Ok(id)
    }

    async fn update_game(&self, id: i64, changes: &GameChanges) -> StoreResult<()> {
        let mut tables = self.tables.lock().await;
        if let Some(row) = tables.games.get_mut(&id) {
            changes.apply(row);
        }
        Ok(())
    }

    async fn delete_game(&self, id: i64) -> StoreResult<bool> {
        Ok(self.tables.lock().await.games.remove(&id).is_some())
    }
}
