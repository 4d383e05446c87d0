use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

use models::product;
use crate::errors::ServiceError;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<product::Model>, ServiceError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<product::Model>, ServiceError>;
    async fn list_by_category(&self, category_id: i32) -> Result<Vec<product::Model>, ServiceError>;
    /// Upsert by id: inserts an unseen id, fully replaces an existing row.
    async fn save(&self, product: product::Model) -> Result<product::Model, ServiceError>;
    /// Returns `false` when no row had that id.
    async fn delete_by_id(&self, id: &str) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn list_all(&self) -> Result<Vec<product::Model>, ServiceError> {
        Ok(product::Entity::find().all(&self.db).await?)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<product::Model>, ServiceError> {
        Ok(product::Entity::find_by_id(id.to_string()).one(&self.db).await?)
    }

    async fn list_by_category(&self, category_id: i32) -> Result<Vec<product::Model>, ServiceError> {
        Ok(product::find_by_category(&self.db, category_id).await?)
    }

    async fn save(&self, product: product::Model) -> Result<product::Model, ServiceError> {
        Ok(product::upsert(&self.db, product).await?)
    }

    async fn delete_by_id(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(product::delete(&self.db, id).await?)
    }
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct MockProductRepository {
        rows: RwLock<HashMap<String, product::Model>>,
    }

    #[async_trait]
    impl ProductRepository for MockProductRepository {
        async fn list_all(&self) -> Result<Vec<product::Model>, ServiceError> {
            Ok(self.rows.read().await.values().cloned().collect())
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<product::Model>, ServiceError> {
            Ok(self.rows.read().await.get(id).cloned())
        }

        async fn list_by_category(&self, category_id: i32) -> Result<Vec<product::Model>, ServiceError> {
            let rows = self.rows.read().await;
            Ok(rows.values().filter(|p| p.category_id == Some(category_id)).cloned().collect())
        }

        async fn save(&self, product: product::Model) -> Result<product::Model, ServiceError> {
            self.rows.write().await.insert(product.id.clone(), product.clone());
            Ok(product)
        }

        async fn delete_by_id(&self, id: &str) -> Result<bool, ServiceError> {
            Ok(self.rows.write().await.remove(id).is_some())
        }
    }
}
