use async_graphql::{Context, EmptySubscription, Object, Result, Schema};
use service::catalog::CatalogService;

use super::types::{Category, Product, ProductInput};

pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(catalog: CatalogService) -> CatalogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(catalog)
        .finish()
}

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn list_products(&self, ctx: &Context<'_>) -> Result<Vec<Product>> {
        let rows = ctx.data::<CatalogService>()?.list_products().await?;
        Ok(rows.into_iter().map(Product).collect())
    }

    async fn get_product(&self, ctx: &Context<'_>, id: String) -> Result<Product> {
        Ok(Product(ctx.data::<CatalogService>()?.get_product(&id).await?))
    }

    async fn list_categories(&self, ctx: &Context<'_>) -> Result<Vec<Category>> {
        let rows = ctx.data::<CatalogService>()?.list_categories().await?;
        Ok(rows.into_iter().map(Category).collect())
    }

    async fn get_category(&self, ctx: &Context<'_>, id: i32) -> Result<Category> {
        Ok(Category(ctx.data::<CatalogService>()?.get_category(id).await?))
    }
}

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_product(&self, ctx: &Context<'_>, input: ProductInput) -> Result<Product> {
        let created = ctx.data::<CatalogService>()?.create_product(input.into()).await?;
        Ok(Product(created))
    }

    /// Replaces the whole product; fields left out of `input` are cleared.
    async fn update_product(&self, ctx: &Context<'_>, id: String, input: ProductInput) -> Result<Product> {
        let updated = ctx.data::<CatalogService>()?.update_product(&id, input.into()).await?;
        Ok(Product(updated))
    }

    /// `false` when no product had that id.
    async fn delete_product(&self, ctx: &Context<'_>, id: String) -> Result<bool> {
        Ok(ctx.data::<CatalogService>()?.delete_product(&id).await?)
    }
}
