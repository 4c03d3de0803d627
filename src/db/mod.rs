pub mod game_repo;
pub mod json_list;
pub mod memory;
pub mod sqlite;
pub mod user_repo;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

use game_repo::{Game, GameChanges, NewGame};
use user_repo::{NewUser, User, UserChanges};

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

pub type Db = SqlitePool;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Row-level access to the users and games tables.
///
/// Every call is independent; read-then-write sequences built on top of it
/// are not atomic.
#[async_trait]
pub trait Store: Send + Sync {
    /// All users ordered by id.
    async fn list_users(&self) -> StoreResult<Vec<User>>;
    async fn find_user(&self, id: i64) -> StoreResult<Option<User>>;
    /// Returns the generated id.
    async fn insert_user(&self, user: &NewUser) -> StoreResult<i64>;
    /// Overwrites only the columns present in `changes`.
    async fn update_user(&self, id: i64, changes: &UserChanges) -> StoreResult<()>;
    async fn set_favorites(&self, user_id: i64, favorites: &[String]) -> StoreResult<()>;
    /// `false` when no row matched.
    async fn delete_user(&self, id: i64) -> StoreResult<bool>;

    /// All games ordered by id.
    async fn list_games(&self) -> StoreResult<Vec<Game>>;
    async fn find_game(&self, id: i64) -> StoreResult<Option<Game>>;
    /// Games whose id is in `ids`; missing ids are skipped, order is unspecified.
    async fn find_games(&self, ids: &[i64]) -> StoreResult<Vec<Game>>;
    async fn insert_game(&self, game: &NewGame) -> StoreResult<i64>;
    /// Overwrites only the columns present in `changes`.
    async fn update_game(&self, id: i64, changes: &GameChanges) -> StoreResult<()>;
    async fn delete_game(&self, id: i64) -> StoreResult<bool>;
}

/// Open (creating if missing) the database file and ensure both tables exist.
pub async fn init_db(url: &str) -> anyhow::Result<Db> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    create_schema(&pool).await?;
    Ok(pool)
}

/// Create-if-absent for both tables. Existing schemas are left untouched.
pub async fn create_schema(db: &Db) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            password TEXT NOT NULL,
            favorites TEXT DEFAULT '[]'
        )
        "#,
    )
    .execute(db)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS games (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            developer TEXT NOT NULL,
            imageLink TEXT,
            description TEXT,
            price REAL DEFAULT 0,
            unitsInStock INTEGER DEFAULT 0,
            platforms TEXT DEFAULT '[]',
            releaseDate TEXT,
            mediaCarousel TEXT DEFAULT '[]'
        )
        "#,
    )
    .execute(db)
    .await?;

    Ok(())
}
