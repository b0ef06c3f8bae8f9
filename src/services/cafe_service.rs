use std::sync::Arc;

use rand::seq::SliceRandom;
use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::database::manager::DatabaseError;
use crate::database::models::{Cafe, CafeForm, NewCafe};
use crate::database::repository::{CafeRepository, SqliteCafeRepository};

#[derive(Debug, thiserror::Error)]
pub enum CafeError {
    #[error("Missing required parameter: {0}")]
    BadRequest(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error("Cafe not found: {0}")]
    NotFound(i64),
    #[error("API key mismatch")]
    Forbidden,
    #[error("There are no cafes in the database")]
    EmptyCollection,
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

/// The cafe store: every public operation of the API goes through here.
pub struct CafeService {
    repository: Arc<dyn CafeRepository>,
    api_key: String,
}

impl CafeService {
    pub fn new(repository: Arc<dyn CafeRepository>, api_key: impl Into<String>) -> Self {
        Self {
            repository,
            api_key: api_key.into(),
        }
    }

    /// Service over the SQLite repository for `pool`
    pub fn from_pool(pool: SqlitePool, api_key: impl Into<String>) -> Self {
        Self::new(Arc::new(SqliteCafeRepository::new(pool)), api_key)
    }

    /// All cafes in insertion order
    pub async fn list_all(&self) -> Result<Vec<Cafe>, CafeError> {
        Ok(self.repository.list().await?)
    }

    /// One cafe picked uniformly from the current collection
    pub async fn random_one(&self) -> Result<Cafe, CafeError> {
        let cafes = self.repository.list().await?;
        let picked = cafes.choose(&mut rand::thread_rng()).cloned();
        picked.ok_or(CafeError::EmptyCollection)
    }

    pub async fn get(&self, id: i64) -> Result<Cafe, CafeError> {
        self.repository.get(id).await?.ok_or(CafeError::NotFound(id))
    }

    /// Cafes whose location equals the title-cased query. No match is an empty vec.
    pub async fn find_by_location(&self, query: Option<&str>) -> Result<Vec<Cafe>, CafeError> {
        let query = query.ok_or(CafeError::BadRequest("loc"))?;
        let location = title_case(query);
        Ok(self.repository.find_by_location(&location).await?)
    }

    /// Insert a cafe from raw form fields. Any failure, including a store fault,
    /// comes back as `Conflict` carrying the underlying message.
    pub async fn create(&self, form: CafeForm) -> Result<Cafe, CafeError> {
        let new_cafe = NewCafe::try_from(form).map_err(|e| {
            warn!("Rejected new cafe: {}", e);
            CafeError::Conflict(e.to_string())
        })?;

        match self.repository.insert(new_cafe).await {
            Ok(cafe) => {
                info!("Added cafe {} ({})", cafe.id, cafe.name);
                Ok(cafe)
            }
            Err(e) => {
                warn!("Failed to add cafe: {}", e);
                Err(CafeError::Conflict(store_message(&e)))
            }
        }
    }

    pub async fn update_price(&self, id: i64, new_price: Option<&str>) -> Result<Cafe, CafeError> {
        let new_price = new_price.ok_or(CafeError::BadRequest("new_price"))?;
        let cafe = self
            .repository
            .update_price(id, new_price)
            .await?
            .ok_or(CafeError::NotFound(id))?;

        info!("Updated coffee price of cafe {} to {}", id, new_price);
        Ok(cafe)
    }

    /// Remove a cafe. The key is checked before the record is looked up, so a
    /// wrong key on a missing id is still `Forbidden`.
    pub async fn delete(&self, id: i64, provided_key: Option<&str>) -> Result<(), CafeError> {
        if provided_key != Some(self.api_key.as_str()) {
            warn!("Rejected delete of cafe {}: API key mismatch", id);
            return Err(CafeError::Forbidden);
        }

        if !self.repository.delete(id).await? {
            return Err(CafeError::NotFound(id));
        }

        info!("Deleted cafe {}", id);
        Ok(())
    }
}

/// Upper-case the first letter of every whitespace-separated word and
/// lower-case the rest. Whitespace is kept as-is.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut word_start = true;
    for c in input.chars() {
        if c.is_whitespace() {
            word_start = true;
            out.push(c);
        } else if word_start {
            out.extend(c.to_uppercase());
            word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

// Database errors print as "error returned from database: ..."; keep only the driver text
fn store_message(err: &DatabaseError) -> String {
    match err {
        DatabaseError::Sqlx(sqlx::Error::Database(db_err)) => db_err.message().to_string(),
        other => other.to_string(),
    }
}
