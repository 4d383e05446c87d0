//! GraphQL surface of the catalog.
//!
//! Field and argument names follow async-graphql's camelCase convention, so
//! `list_products` is served as `listProducts` and `category_id` as
//! `categoryId`.

pub mod schema;
pub mod types;

pub use schema::{build_schema, CatalogSchema, MutationRoot, QueryRoot};
