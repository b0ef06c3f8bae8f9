use std::sync::Arc;

use sqlx::SqlitePool;

use crate::database::manager::DatabaseManager;
use crate::database::models::{Cafe, CafeForm};
use crate::services::CafeService;
use crate::types::AppState;

pub const TEST_API_KEY: &str = "test-api-key";

/// In-memory cafe store for unit and router tests
pub struct TestContext {
    pub pool: SqlitePool,
    pub service: Arc<CafeService>,
}

impl TestContext {
    /// Create a new test context backed by a fresh in-memory database
    pub async fn new() -> anyhow::Result<Self> {
        let pool = DatabaseManager::in_memory()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to open test database: {}", e))?;
        let service = Arc::new(CafeService::from_pool(pool.clone(), TEST_API_KEY));

        Ok(Self { pool, service })
    }

    pub fn api_key(&self) -> &'static str {
        TEST_API_KEY
    }

    pub fn state(&self) -> AppState {
        AppState::new(self.service.clone(), self.pool.clone())
    }

    /// Insert `count` cafes named "Seed Cafe N", spread over two locations
    pub async fn seed(&self, count: usize) -> anyhow::Result<Vec<Cafe>> {
        let mut created = Vec::with_capacity(count);
        for n in 0..count {
            let location = if n % 2 == 0 { "Peckham" } else { "Hackney" };
            let cafe = self
                .service
                .create(sample_form(&format!("Seed Cafe {}", n), location))
                .await
                .map_err(|e| anyhow::anyhow!("Failed to seed cafe {}: {}", n, e))?;
            created.push(cafe);
        }
        Ok(created)
    }
}

/// Complete form for a cafe with every amenity flag set
pub fn sample_form(name: &str, location: &str) -> CafeForm {
    CafeForm {
        name: Some(name.to_string()),
        map_url: Some(format!("https://maps.example.com/{}", name.replace(' ', "+"))),
        img_url: Some(format!("https://img.example.com/{}.jpg", name.replace(' ', "_"))),
        loc: Some(location.to_string()),
        sockets: Some("1".to_string()),
        toilet: Some("1".to_string()),
        wifi: Some("1".to_string()),
        calls: Some("1".to_string()),
        seats: Some("20-30".to_string()),
        coffee_price: Some("£2.50".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_context_starts_empty() {
        let ctx = TestContext::new().await.unwrap();
        assert!(ctx.service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seed_creates_distinct_cafes() {
        let ctx = TestContext::new().await.unwrap();
        let seeded = ctx.seed(3).await.unwrap();

        assert_eq!(seeded.len(), 3);
        assert_ne!(seeded[0].name, seeded[1].name);
        assert_eq!(seeded[1].location, "Hackney");
    }
}
