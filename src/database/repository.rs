use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::database::manager::DatabaseError;
use crate::database::models::{Cafe, NewCafe};

const CAFE_COLUMNS: &str = "id, name, map_url, img_url, location, seats, \
     has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price";

/// Storage capabilities the cafe service needs. Each write is atomic on its own.
#[async_trait]
pub trait CafeRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Cafe>, DatabaseError>;
    async fn get(&self, id: i64) -> Result<Option<Cafe>, DatabaseError>;
    async fn find_by_location(&self, location: &str) -> Result<Vec<Cafe>, DatabaseError>;
    async fn insert(&self, cafe: NewCafe) -> Result<Cafe, DatabaseError>;
    /// Returns `None` when no cafe has `id`; nothing is written in that case
    async fn update_price(&self, id: i64, price: &str) -> Result<Option<Cafe>, DatabaseError>;
    /// Returns `false` when no cafe has `id`
    async fn delete(&self, id: i64) -> Result<bool, DatabaseError>;
}

/// SQLite-backed repository implementation.
#[derive(Clone)]
pub struct SqliteCafeRepository {
    pool: SqlitePool,
}

impl SqliteCafeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CafeRepository for SqliteCafeRepository {
    async fn list(&self) -> Result<Vec<Cafe>, DatabaseError> {
        let sql = format!("SELECT {} FROM cafe ORDER BY id", CAFE_COLUMNS);
        let cafes = sqlx::query_as::<_, Cafe>(&sql).fetch_all(&self.pool).await?;
        Ok(cafes)
    }

    async fn get(&self, id: i64) -> Result<Option<Cafe>, DatabaseError> {
        let sql = format!("SELECT {} FROM cafe WHERE id = ?", CAFE_COLUMNS);
        let cafe = sqlx::query_as::<_, Cafe>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(cafe)
    }

    async fn find_by_location(&self, location: &str) -> Result<Vec<Cafe>, DatabaseError> {
        let sql = format!("SELECT {} FROM cafe WHERE location = ? ORDER BY id", CAFE_COLUMNS);
        let cafes = sqlx::query_as::<_, Cafe>(&sql)
            .bind(location)
            .fetch_all(&self.pool)
            .await?;
        Ok(cafes)
    }

    async fn insert(&self, cafe: NewCafe) -> Result<Cafe, DatabaseError> {
        let sql = format!(
            "INSERT INTO cafe (name, map_url, img_url, location, seats, \
             has_toilet, has_wifi, has_sockets, can_take_calls, coffee_price) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {}",
            CAFE_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let created = sqlx::query_as::<_, Cafe>(&sql)
            .bind(cafe.name)
            .bind(cafe.map_url)
            .bind(cafe.img_url)
            .bind(cafe.location)
            .bind(cafe.seats)
            .bind(cafe.has_toilet)
            .bind(cafe.has_wifi)
            .bind(cafe.has_sockets)
            .bind(cafe.can_take_calls)
            .bind(cafe.coffee_price)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(created)
    }

    async fn update_price(&self, id: i64, price: &str) -> Result<Option<Cafe>, DatabaseError> {
        // Single statement: the write lock is taken up front, so concurrent
        // callers wait on the busy timeout instead of failing a lock upgrade
        let sql = format!(
            "UPDATE cafe SET coffee_price = ? WHERE id = ? RETURNING {}",
            CAFE_COLUMNS
        );
        let cafe = sqlx::query_as::<_, Cafe>(&sql)
            .bind(price)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(cafe)
    }

    async fn delete(&self, id: i64) -> Result<bool, DatabaseError> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM cafe WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
