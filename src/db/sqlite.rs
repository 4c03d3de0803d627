//! `Store` implementation backed by the SQLite pool.
use async_trait::async_trait;

use super::game_repo::{self, Game, GameChanges, NewGame};
use super::user_repo::{self, NewUser, User, UserChanges};
use super::{Db, Store, StoreResult};

#[derive(Clone)]
pub struct SqliteStore {
    db: Db,
}

impl SqliteStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    pub fn pool(&self) -> &Db {
        &self.db
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(user_repo::list(&self.db).await?)
    }

    async fn find_user(&self, id: i64) -> StoreResult<Option<User>> {
        Ok(user_repo::find_by_id(&self.db, id).await?)
    }

    async fn insert_user(&self, user: &NewUser) -> StoreResult<i64> {
        Ok(user_repo::insert(&self.db, user).await?)
    }

    async fn update_user(&self, id: i64, changes: &UserChanges) -> StoreResult<()> {
        Ok(user_repo::update(&self.db, id, changes).await?)
    }

    async fn set_favorites(&self, user_id: i64, favorites: &[String]) -> StoreResult<()> {
        Ok(user_repo::set_favorites(&self.db, user_id, favorites).await?)
    }

    async fn delete_user(&self, id: i64) -> StoreResult<bool> {
        Ok(user_repo::delete(&self.db, id).await?)
    }

    async fn list_games(&self) -> StoreResult<Vec<Game>> {
        Ok(game_repo::list(&self.db).await?)
    }

    async fn find_game(&self, id: i64) -> StoreResult<Option<Game>> {
        Ok(game_repo::find_by_id(&self.db, id).await?)
    }

    async fn find_games(&self, ids: &[i64]) -> StoreResult<Vec<Game>> {
        Ok(game_repo::find_by_ids(&self.db, ids).await?)
    }

    async fn insert_game(&self, game: &NewGame) -> StoreResult<i64> {
        Ok(game_repo::insert(&self.db, game).await?)
    }

    async fn update_game(&self, id: i64, changes: &GameChanges) -> StoreResult<()> {
        Ok(game_repo::update(&self.db, id, changes).await?)
    }

    async fn delete_game(&self, id: i64) -> StoreResult<bool> {
        Ok(game_repo::delete(&self.db, id).await?)
    }
}
