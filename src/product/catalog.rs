//! In-memory product catalogue with CRUD operations

use std::collections::BTreeMap;

use chrono::Utc;

use super::types::{BulkProductUpdate, Product, ProductError, ProductRecord, ProductResult};

const PRODUCT_FIXTURE: &str = include_str!("../../fixtures/products.json");

/// In-memory product storage keyed by product id
#[derive(Debug, Default)]
pub struct ProductCatalog {
    products: BTreeMap<u32, Product>,
}

impl ProductCatalog {
    /// Create an empty catalogue
    pub fn new() -> Self {
        Self {
            products: BTreeMap::new(),
        }
    }

    /// Create a catalogue seeded from the bundled product fixture
    pub fn seeded() -> ProductResult<Self> {
        let products: Vec<Product> = serde_json::from_str(PRODUCT_FIXTURE)?;
        Ok(Self::from_products(products))
    }

    /// Create a catalogue holding the given products
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    /// List all products in id order
    pub fn list(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    /// List products belonging to a store
    pub fn list_by_store(&self, store_id: i64) -> Vec<Product> {
        self.products
            .values()
            .filter(|p| {
                p.record
                    .store_id
                    .as_ref()
                    .and_then(|v| v.as_number())
                    .is_some_and(|id| id == store_id as f64)
            })
            .cloned()
            .collect()
    }

    /// List products with the given status
    pub fn list_by_status(&self, status: &str) -> Vec<Product> {
        self.products
            .values()
            .filter(|p| p.record.status.as_ref().is_some_and(|s| s.to_text() == status))
            .cloned()
            .collect()
    }

    /// Get a product by id
    pub fn get(&self, id: u32) -> ProductResult<Product> {
        self.products
            .get(&id)
            .cloned()
            .ok_or(ProductError::NotFound(id))
    }

    /// Add a new product, allocating the next id
    pub fn create(&mut self, record: ProductRecord) -> Product {
        let id = self.products.keys().next_back().map_or(1, |max| max + 1);
        let now = Utc::now();
        let product = Product {
            id,
            record,
            created_at: now,
            updated_at: now,
        };

        self.products.insert(id, product.clone());
        tracing::debug!(product_id = id, "Product created");
        product
    }

    /// Merge the present fields of `updates` into an existing product
    pub fn update(&mut self, id: u32, updates: ProductRecord) -> ProductResult<Product> {
        let product = self
            .products
            .get_mut(&id)
            .ok_or(ProductError::NotFound(id))?;

        product.record.merge(updates);
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    /// Remove a product, returning it
    pub fn delete(&mut self, id: u32) -> ProductResult<Product> {
        self.products.remove(&id).ok_or(ProductError::NotFound(id))
    }

    /// Apply several updates, skipping ids that do not exist
    pub fn bulk_update(&mut self, updates: Vec<BulkProductUpdate>) -> Vec<Product> {
        let mut updated = Vec::with_capacity(updates.len());

        for update in updates {
            match self.update(update.id, update.fields) {
                Ok(product) => updated.push(product),
                Err(_) => {
                    tracing::debug!(product_id = update.id, "Skipping bulk update for unknown product");
                }
            }
        }

        updated
    }

    /// Get the number of products
    pub fn count(&self) -> usize {
        self.products.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> ProductRecord {
        ProductRecord {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_seeded_catalogue_loads_fixture() {
        let catalog = ProductCatalog::seeded().unwrap();
        assert_eq!(catalog.count(), 6);

        let first = catalog.get(1).unwrap();
        assert_eq!(first.record.sku, Some("WBH-001".into()));
    }

    #[test]
    fn test_filter_by_store_and_status() {
        let catalog = ProductCatalog::seeded().unwrap();

        let store_two: Vec<u32> = catalog.list_by_store(2).iter().map(|p| p.id).collect();
        assert_eq!(store_two, vec![3, 4]);

        let inactive: Vec<u32> = catalog.list_by_status("inactive").iter().map(|p| p.id).collect();
        assert_eq!(inactive, vec![5]);
    }

    #[test]
    fn test_create_allocates_next_id() {
        let mut catalog = ProductCatalog::new();
        assert_eq!(catalog.create(record("First")).id, 1);
        assert_eq!(catalog.create(record("Second")).id, 2);

        catalog.delete(1).unwrap();
        assert_eq!(catalog.create(record("Third")).id, 3);
    }

    #[test]
    fn test_update_merges_and_keeps_id() {
        let mut catalog = ProductCatalog::new();
        let created = catalog.create(ProductRecord {
            title: Some("Lamp".into()),
            sku: Some("L-1".into()),
            ..Default::default()
        });

        let updated = catalog
            .update(
                created.id,
                ProductRecord {
                    price: Some(19.0.into()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.record.sku, Some("L-1".into()));
        assert_eq!(updated.record.price, Some(19.0.into()));
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn test_missing_product_errors() {
        let mut catalog = ProductCatalog::new();
        assert!(matches!(catalog.get(9), Err(ProductError::NotFound(9))));
        assert!(matches!(
            catalog.update(9, ProductRecord::default()),
            Err(ProductError::NotFound(9))
        ));
        assert!(matches!(catalog.delete(9), Err(ProductError::NotFound(9))));
    }

    #[test]
    fn test_bulk_update_skips_unknown_ids() {
        let mut catalog = ProductCatalog::seeded().unwrap();

        let updated = catalog.bulk_update(vec![
            BulkProductUpdate {
                id: 2,
                fields: ProductRecord {
                    inventory: Some(99i64.into()),
                    ..Default::default()
                },
            },
            BulkProductUpdate {
                id: 404,
                fields: record("Ghost"),
            },
        ]);

        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].id, 2);
        assert_eq!(catalog.get(2).unwrap().record.inventory, Some(99i64.into()));
        assert_eq!(catalog.count(), 6);
    }
}
