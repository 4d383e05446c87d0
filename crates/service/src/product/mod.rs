//! Product store. `save` is the only write path and always overwrites the
//! whole row.

pub mod repository;

pub use repository::{ProductRepository, SeaOrmProductRepository};
