//! Catalog API: the four queries and three mutations exposed to clients.
//!
//! Category ↔ product is a back-reference: products own the foreign key and
//! a category's products are always re-queried, never cached.

pub mod domain;
pub mod service;

pub use domain::ProductInput;
pub use service::CatalogService;
