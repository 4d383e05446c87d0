use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use models::{category, product};
use crate::category::{CategoryRepository, SeaOrmCategoryRepository};
use crate::errors::ServiceError;
use crate::product::{ProductRepository, SeaOrmProductRepository};

use super::domain::ProductInput;

/// Application service over the category and product stores.
#[derive(Clone)]
pub struct CatalogService {
    categories: Arc<dyn CategoryRepository>,
    products: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(categories: Arc<dyn CategoryRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { categories, products }
    }

    /// Service backed by SeaORM repositories sharing one connection pool.
    pub fn with_db(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmCategoryRepository { db: db.clone() }),
            Arc::new(SeaOrmProductRepository { db }),
        )
    }

    pub async fn list_products(&self) -> Result<Vec<product::Model>, ServiceError> {
        self.products.list_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> Result<product::Model, ServiceError> {
        self.products
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("product", id))
    }

    pub async fn list_categories(&self) -> Result<Vec<category::Model>, ServiceError> {
        self.categories.list_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_category(&self, id: i32) -> Result<category::Model, ServiceError> {
        self.categories
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("category", id))
    }

    /// Products currently pointing at `category_id`.
    pub async fn products_of_category(&self, category_id: i32) -> Result<Vec<product::Model>, ServiceError> {
        self.products.list_by_category(category_id).await
    }

    /// Looks up a category, yielding `None` for an absent or unknown id.
    pub async fn resolve_or_null(&self, category_id: Option<i32>) -> Result<Option<category::Model>, ServiceError> {
        let Some(id) = category_id else { return Ok(None) };
        self.categories.get_by_id(id).await
    }

    /// Create a product under a freshly generated id.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create_product(&self, input: ProductInput) -> Result<product::Model, ServiceError> {
        let id = Uuid::new_v4().to_string();
        let saved = self.store(id, input).await?;
        info!(id = %saved.id, category_id = ?saved.category_id, "product_created");
        Ok(saved)
    }

    /// Replace the product stored under `id` with `input`.
    ///
    /// This is a full overwrite, not a patch: every field comes from
    /// `input`. An unknown `id` creates the product.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn update_product(&self, id: &str, input: ProductInput) -> Result<product::Model, ServiceError> {
        let saved = self.store(id.to_string(), input).await?;
        info!(id = %saved.id, category_id = ?saved.category_id, "product_replaced");
        Ok(saved)
    }

    /// Remove a product; an unknown id is a no-op reported as `false`.
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: &str) -> Result<bool, ServiceError> {
        let removed = self.products.delete_by_id(id).await?;
        if removed {
            info!(id, "product_deleted");
        } else {
            debug!(id, "delete of unknown product ignored");
        }
        Ok(removed)
    }

    async fn store(&self, id: String, input: ProductInput) -> Result<product::Model, ServiceError> {
        let category = self.resolve_or_null(input.category_id).await?;
        if let (Some(requested), None) = (input.category_id, &category) {
            warn!(category_id = requested, "unknown category id; storing product without category");
        }
        let model = product::Model {
            id,
            name: input.name,
            price: input.price,
            quantity: input.quantity,
            category_id: category.map(|c| c.id),
        };
        self.products.save(model).await
    }
}
