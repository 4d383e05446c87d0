use async_graphql::{Context, InputObject, Object, Result};
use service::catalog::{self, CatalogService};

use models::{category, product};

pub struct Category(pub category::Model);

#[Object]
impl Category {
    async fn id(&self) -> i32 { self.0.id }

    async fn name(&self) -> &str { &self.0.name }

    /// Products referencing this category, queried on every access.
    async fn products(&self, ctx: &Context<'_>) -> Result<Vec<Product>> {
        let catalog = ctx.data::<CatalogService>()?;
        let rows = catalog.products_of_category(self.0.id).await?;
        Ok(rows.into_iter().map(Product).collect())
    }
}

pub struct Product(pub product::Model);

#[Object]
impl Product {
    async fn id(&self) -> &str { &self.0.id }

    async fn name(&self) -> &str { &self.0.name }

    async fn price(&self) -> f64 { self.0.price }

    async fn quantity(&self) -> i32 { self.0.quantity }

    async fn category_id(&self) -> Option<i32> { self.0.category_id }

    async fn category(&self, ctx: &Context<'_>) -> Result<Option<Category>> {
        let catalog = ctx.data::<CatalogService>()?;
        Ok(catalog.resolve_or_null(self.0.category_id).await?.map(Category))
    }
}

/// Full product state; update replaces every field with these values.
#[derive(InputObject)]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub quantity: i32,
    pub category_id: Option<i32>,
}

impl From<ProductInput> for catalog::ProductInput {
    fn from(i: ProductInput) -> Self {
        Self { name: i.name, price: i.price, quantity: i.quantity, category_id: i.category_id }
    }
}
