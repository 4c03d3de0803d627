//! Repository functions for manipulating rows in the `users` table.
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool, sqlite::SqliteRow};

use super::json_list;

/// Application-level representation of a stored user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub password: String,
    pub favorites: Vec<String>,
}

/// Column values for a user that has not been assigned an id yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub password: String,
    pub favorites: Vec<String>,
}

/// Columns to overwrite on an existing user; `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub password: Option<String>,
    pub favorites: Option<Vec<String>>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.password.is_none() && self.favorites.is_none()
    }

    pub fn apply(&self, user: &mut User) {
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(password) = &self.password {
            user.password = password.clone();
        }
        if let Some(favorites) = &self.favorites {
            user.favorites = favorites.clone();
        }
    }
}

fn from_row(row: &SqliteRow) -> sqlx::Result<User> {
    let favorites: Option<String> = row.try_get("favorites")?;
    Ok(User {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        password: row.try_get("password")?,
        favorites: json_list::decode(favorites.as_deref()),
    })
}

pub async fn list(db: &SqlitePool) -> sqlx::Result<Vec<User>> {
    let rows = sqlx::query("SELECT id, name, password, favorites FROM users ORDER BY id")
        .fetch_all(db)
        .await?;
    rows.iter().map(from_row).collect()
}

pub async fn find_by_id(db: &SqlitePool, id: i64) -> sqlx::Result<Option<User>> {
    let row = sqlx::query("SELECT id, name, password, favorites FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    from_row(&row).map(Some)
}

pub async fn insert(db: &SqlitePool, user: &NewUser) -> sqlx::Result<i64> {
    let res = sqlx::query("INSERT INTO users (name, password, favorites) VALUES (?, ?, ?)")
        .bind(&user.name)
        .bind(&user.password)
        .bind(json_list::encode(&user.favorites))
        .execute(db)
        .await?;

    Ok(res.last_insert_rowid())
}

/// Write only the supplied columns; untouched columns keep their stored text.
pub async fn update(db: &SqlitePool, id: i64, changes: &UserChanges) -> sqlx::Result<()> {
    if changes.is_empty() {
        return Ok(());
    }

    let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE users SET ");
    let mut columns = query.separated(", ");
    if let Some(name) = &changes.name {
        columns.push("name = ");
        columns.push_bind_unseparated(name.clone());
    }
    if let Some(password) = &changes.password {
        columns.push("password = ");
        columns.push_bind_unseparated(password.clone());
    }
    if let Some(favorites) = &changes.favorites {
        columns.push("favorites = ");
        columns.push_bind_unseparated(json_list::encode(favorites));
    }
    query.push(" WHERE id = ");
    query.push_bind(id);

    query.build().execute(db).await?;
    Ok(())
}

/// Replace only the favorites column.
pub async fn set_favorites(db: &SqlitePool, user_id: i64, favorites: &[String]) -> sqlx::Result<()> {
    sqlx::query("UPDATE users SET favorites = ? WHERE id = ?")
        .bind(json_list::encode(favorites))
        .bind(user_id)
        .execute(db)
        .await?;

    Ok(())
}

pub async fn delete(db: &SqlitePool, id: i64) -> sqlx::Result<bool> {
    let res = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;

    Ok(res.rows_affected() > 0)
}
