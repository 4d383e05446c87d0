use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use models::category;
use crate::errors::ServiceError;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories ordered by id.
    async fn list_all(&self) -> Result<Vec<category::Model>, ServiceError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<category::Model>, ServiceError>;
    async fn create(&self, name: &str) -> Result<category::Model, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCategoryRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn list_all(&self) -> Result<Vec<category::Model>, ServiceError> {
        Ok(category::find_all(&self.db).await?)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<category::Model>, ServiceError> {
        Ok(category::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn create(&self, name: &str) -> Result<category::Model, ServiceError> {
        Ok(category::create(&self.db, name).await?)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct MockCategoryRepository {
        rows: RwLock<BTreeMap<i32, category::Model>>,
    }

    #[async_trait]
    impl CategoryRepository for MockCategoryRepository {
        async fn list_all(&self) -> Result<Vec<category::Model>, ServiceError> {
            Ok(self.rows.read().await.values().cloned().collect())
        }

        async fn get_by_id(&self, id: i32) -> Result<Option<category::Model>, ServiceError> {
            Ok(self.rows.read().await.get(&id).cloned())
        }

        async fn create(&self, name: &str) -> Result<category::Model, ServiceError> {
            let mut rows = self.rows.write().await;
            let id = rows.keys().next_back().map_or(1, |last| last + 1);
            let model = category::Model { id, name: name.to_string() };
            rows.insert(id, model.clone());
            Ok(model)
        }
    }
}
