//! Service layer providing catalog operations on top of models.
//! - Repositories abstract the category and product tables.
//! - `CatalogService` holds the query/mutation contract.
//! - `seed` writes startup sample data.

pub mod errors;
pub mod category;
pub mod product;
pub mod catalog;
pub mod seed;
#[cfg(test)]
pub mod test_support;
