//! Category store: read access plus the insert used by seeding.

pub mod repository;

pub use repository::{CategoryRepository, SeaOrmCategoryRepository};
