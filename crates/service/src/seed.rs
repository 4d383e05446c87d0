//! Startup sample data.
//!
//! Creates the configured categories and attaches a batch of products with
//! random price and stock to each of them. A run writes everything in one
//! transaction, so a failed run leaves the catalog as it was.

use rand::{rngs::StdRng, Rng, SeedableRng};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use configs::SeedConfig;
use models::{category, product};
use crate::errors::ServiceError;

/// What a seeding run wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub products: usize,
    pub skipped: bool,
}

#[instrument(skip_all, fields(categories = cfg.categories.len(), per_category = cfg.products_per_category))]
pub async fn seed_catalog(db: &DatabaseConnection, cfg: &SeedConfig) -> Result<SeedReport, ServiceError> {
    if !cfg.enabled {
        info!("seeding disabled");
        return Ok(SeedReport { skipped: true, ..SeedReport::default() });
    }
    if cfg.skip_if_populated && !category::find_all(db).await?.is_empty() {
        info!("catalog already populated; skipping seed");
        return Ok(SeedReport { skipped: true, ..SeedReport::default() });
    }

    let txn = db.begin().await?;
    match write_sample(&txn, cfg).await {
        Ok(report) => {
            txn.commit().await?;
            info!(categories = report.categories, products = report.products, "catalog seeded");
            Ok(report)
        }
        Err(e) => {
            warn!(error = %e, "seeding failed; rolling back");
            txn.rollback().await?;
            Err(e)
        }
    }
}

async fn write_sample<C: ConnectionTrait>(conn: &C, cfg: &SeedConfig) -> Result<SeedReport, ServiceError> {
    let mut rng = StdRng::from_entropy();
    let mut report = SeedReport::default();
    for name in &cfg.categories {
        let category = category::create(conn, name).await?;
        report.categories += 1;
        for i in 0..cfg.products_per_category {
            let row = product::Model {
                id: Uuid::new_v4().to_string(),
                name: format!("{} {}", category.name, i),
                price: 100.0 + rng.gen::<f64>() * 50_000.0,
                quantity: rng.gen_range(0..100),
                category_id: Some(category.id),
            };
            product::upsert(conn, row).await?;
            report.products += 1;
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogService;
    use crate::test_support::get_db;

    fn cfg(categories: &[&str], per: u32) -> SeedConfig {
        SeedConfig {
            enabled: true,
            categories: categories.iter().map(|c| c.to_string()).collect(),
            products_per_category: per,
            skip_if_populated: true,
        }
    }

    #[tokio::test]
    async fn seeds_empty_catalog() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let report = seed_catalog(&db, &SeedConfig::default()).await?;
        let catalog = CatalogService::with_db(db);
        assert_eq!(report, SeedReport { categories: 3, products: 30, skipped: false });

        let categories = catalog.list_categories().await?;
        let names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Computers", "Printers", "Smartphones"]);

        for c in &categories {
            let products = catalog.products_of_category(c.id).await?;
            assert_eq!(products.len(), 10);
            for p in products {
                assert!(p.name.starts_with(&c.name));
                assert!((100.0..50_100.0).contains(&p.price));
                assert!((0..100).contains(&p.quantity));
            }
        }
        Ok(())
    }

    #[tokio::test]
    async fn skips_populated_catalog() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed_catalog(&db, &cfg(&["Books"], 2)).await?;

        let second = seed_catalog(&db, &cfg(&["Games"], 2)).await?;
        let catalog = CatalogService::with_db(db);
        assert!(second.skipped);
        assert_eq!(catalog.list_categories().await?.len(), 1);
        assert_eq!(catalog.list_products().await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn appends_when_not_skipping() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        seed_catalog(&db, &cfg(&["Books"], 1)).await?;

        let mut again = cfg(&["Books"], 1);
        again.skip_if_populated = false;
        let report = seed_catalog(&db, &again).await?;
        let catalog = CatalogService::with_db(db);
        assert_eq!(report.categories, 1);
        assert_eq!(catalog.list_categories().await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn disabled_writes_nothing() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let mut off = cfg(&["Books"], 1);
        off.enabled = false;
        assert!(seed_catalog(&db, &off).await?.skipped);
        let catalog = CatalogService::with_db(db);
        assert!(catalog.list_categories().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn failed_run_leaves_catalog_empty() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        // categories insert fine, every product insert fails
        db.execute_unprepared("DROP TABLE products").await?;

        assert!(seed_catalog(&db, &cfg(&["Books", "Games"], 2)).await.is_err());
        assert!(category::find_all(&db).await?.is_empty());
        Ok(())
    }
}
