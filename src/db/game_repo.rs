//! Repository functions for manipulating rows in the `games` table.
use serde_json::Number;
use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool, TypeInfo, ValueRef, sqlite::SqliteRow};

use super::json_list;

const COLUMNS: &str = "id, name, developer, imageLink, description, price, unitsInStock, \
                       platforms, releaseDate, mediaCarousel";

/// Application-level representation of a catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: i64,
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

/// Column values for a game that has not been assigned an id yet.
#[derive(Debug, Clone)]
pub struct NewGame {
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

/// Columns to overwrite on an existing game; `None` keeps the stored value.
///
/// The free-text columns take `Some(None)` to store NULL.
#[derive(Debug, Clone, Default)]
pub struct GameChanges {
    pub name: Option<String>,
    pub developer: Option<String>,
    pub image_link: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
    pub units_in_stock: Option<Number>,
    pub platforms: Option<Vec<String>>,
    pub release_date: Option<Option<String>>,
    pub media_carousel: Option<Vec<String>>,
}

impl GameChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.developer.is_none()
            && self.image_link.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.units_in_stock.is_none()
            && self.platforms.is_none()
            && self.release_date.is_none()
            && self.media_carousel.is_none()
    }

    pub fn apply(&self, game: &mut Game) {
        if let Some(name) = &self.name {
            game.name = name.clone();
        }
        if let Some(developer) = &self.developer {
            game.developer = developer.clone();
        }
        if let Some(image_link) = &self.image_link {
            game.image_link = image_link.clone();
        }
        if let Some(description) = &self.description {
            game.description = description.clone();
        }
        if let Some(price) = self.price {
            game.price = price;
        }
        if let Some(units) = &self.units_in_stock {
            game.units_in_stock = units.clone();
        }
        if let Some(platforms) = &self.platforms {
            game.platforms = platforms.clone();
        }
        if let Some(release_date) = &self.release_date {
            game.release_date = release_date.clone();
        }
        if let Some(media) = &self.media_carousel {
            game.media_carousel = media.clone();
        }
    }
}

// Numeric columns carry whatever storage class the row was written with.
// SQLite's own coercion is used for price; unitsInStock keeps integers and
// reals apart. Unparseable text reads as 0.

fn decode_price(row: &SqliteRow) -> sqlx::Result<f64> {
    Ok(row
        .try_get_unchecked::<Option<f64>, _>("price")?
        .filter(|price| price.is_finite())
        .unwrap_or(0.0))
}

fn decode_units(row: &SqliteRow) -> sqlx::Result<Number> {
    let raw = row.try_get_raw("unitsInStock")?;
    if raw.is_null() {
        return Ok(Number::from(0));
    }

    let units = match raw.type_info().name() {
        "REAL" => Number::from_f64(row.try_get_unchecked::<f64, _>("unitsInStock")?),
        "TEXT" => row
            .try_get_unchecked::<String, _>("unitsInStock")?
            .trim()
            .parse::<Number>()
            .ok(),
        _ => Some(Number::from(row.try_get_unchecked::<i64, _>("unitsInStock")?)),
    };
    Ok(units.unwrap_or_else(|| Number::from(0)))
}

fn from_row(row: &SqliteRow) -> sqlx::Result<Game> {
    let platforms: Option<String> = row.try_get("platforms")?;
    let media_carousel: Option<String> = row.try_get("mediaCarousel")?;
    Ok(Game {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        developer: row.try_get("developer")?,
        image_link: row.try_get("imageLink")?,
        description: row.try_get("description")?,
        price: decode_price(row)?,
        units_in_stock: decode_units(row)?,
        platforms: json_list::decode(platforms.as_deref()),
        release_date: row.try_get("releaseDate")?,
        media_carousel: json_list::decode(media_carousel.as_deref()),
    })
}

pub async fn list(db: &SqlitePool) -> sqlx::Result<Vec<Game>> {
    let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM games ORDER BY id"))
        .fetch_all(db)
        .await?;
    rows.iter().map(from_row).collect()
}

pub async fn find_by_id(db: &SqlitePool, id: i64) -> sqlx::Result<Option<Game>> {
    let row = sqlx::query(&format!("SELECT {COLUMNS} FROM games WHERE id = ?"))
        .bind(id)
        .fetch_optional(db)
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };

    from_row(&row).map(Some)
}

/// `SELECT ... WHERE id IN (?, ?, ...)` with one bound placeholder per id.
pub async fn find_by_ids(db: &SqlitePool, ids: &[i64]) -> sqlx::Result<Vec<Game>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut query: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {COLUMNS} FROM games WHERE id IN ("));
    let mut separated = query.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");

    let rows = query.build().fetch_all(db).await?;
    rows.iter().map(from_row).collect()
}

pub async fn insert(db: &SqlitePool, game: &NewGame) -> sqlx::Result<i64> {
    let query = sqlx::query(
        r#"
        INSERT INTO games (
            name,
            developer,
            imageLink,
            description,
            price,
            unitsInStock,
            platforms,
            releaseDate,
            mediaCarousel
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&game.name)
    .bind(&game.developer)
    .bind(&game.image_link)
    .bind(&game.description)
    .bind(game.price);
    let query = match game.units_in_stock.as_i64() {
        Some(units) => query.bind(units),
        None => query.bind(game.units_in_stock.as_f64().unwrap_or(0.0)),
    };
    let res = query
        .bind(json_list::encode(&game.platforms))
        .bind(&game.release_date)
        .bind(json_list::encode(&game.media_carousel))
        .execute(db)
        .await?;

    Ok(res.last_insert_rowid())
}

/// Write only the supplied columns; untouched columns keep their stored text.
pub async fn update(db: &SqlitePool, id: i64, changes: &GameChanges) -> sqlx::Result<()> {
    if changes.is_empty() {
        return Ok(());
    }

    let mut query: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE games SET ");
    let mut columns = query.separated(", ");
    if let Some(name) = &changes.name {
        columns.push("name = ");
        columns.push_bind_unseparated(name.clone());
    }
    if let Some(developer) = &changes.developer {
        columns.push("developer = ");
        columns.push_bind_unseparated(developer.clone());
    }
    if let Some(image_link) = &changes.image_link {
        columns.push("imageLink = ");
        columns.push_bind_unseparated(image_link.clone());
    }
    if let Some(description) = &changes.description {
        columns.push("description = ");
        columns.push_bind_unseparated(description.clone());
    }
    if let Some(price) = changes.price {
        columns.push("price = ");
        columns.push_bind_unseparated(price);
    }
    if let Some(units) = &changes.units_in_stock {
        columns.push("unitsInStock = ");
        match units.as_i64() {
            Some(units) => columns.push_bind_unseparated(units),
            None => columns.push_bind_unseparated(units.as_f64().unwrap_or(0.0)),
        };
    }
    if let Some(platforms) = &changes.platforms {
        columns.push("platforms = ");
        columns.push_bind_unseparated(json_list::encode(platforms));
    }
    if let Some(release_date) = &changes.release_date {
        columns.push("releaseDate = ");
        columns.push_bind_unseparated(release_date.clone());
    }
    if let Some(media) = &changes.media_carousel {
        columns.push("mediaCarousel = ");
        columns.push_bind_unseparated(json_list::encode(media));
    }
    query.push(" WHERE id = ");
    query.push_bind(id);

    query.build().execute(db).await?;
    Ok(())
}

pub async fn delete(db: &SqlitePool, id: i64) -> sqlx::Result<bool> {
    let res = sqlx::query("DELETE FROM games WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;

    Ok(res.rows_affected() > 0)
}
